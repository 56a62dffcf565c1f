//! DOM Cart View
//!
//! Projects the cart onto the storefront markup found by class name.
//! Rows are a Leptos component mounted once into the items container;
//! badges, visibility and totals are written straight into the page.

use cart_core::{CartLine, CartSelectors, CartView};
use leptos::mount::mount_to;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::CartRows;
use crate::store::{create_cart_store, store_set_lines, CartStore};

pub struct DomCartView {
    document: Document,
    selectors: CartSelectors,
    items: Option<HtmlElement>,
    store: CartStore,
}

impl DomCartView {
    /// Find the items container and mount the row list into it.
    /// Pages without a container only get badge updates.
    pub fn mount(document: Document, selectors: CartSelectors) -> Self {
        let store = create_cart_store();
        let items = query_html(&document, &selectors.items);

        if let Some(container) = &items {
            container.set_inner_html("");
            mount_to(container.clone(), move || view! { <CartRows store=store /> }).forget();
        }

        Self {
            document,
            selectors,
            items,
            store,
        }
    }

    pub fn items_container(&self) -> Option<&HtmlElement> {
        self.items.as_ref()
    }

    fn set_display(&self, selector: &str, value: &str) {
        if let Some(element) = query_html(&self.document, selector) {
            if let Err(e) = element.style().set_property("display", value) {
                warn!("could not set display on `{}`: {:?}", selector, e);
            }
        }
    }

    fn set_text(&self, selector: &str, text: &str) {
        if let Ok(Some(element)) = self.document.query_selector(selector) {
            element.set_text_content(Some(text));
        }
    }
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

impl CartView for DomCartView {
    fn has_items_container(&self) -> bool {
        self.items.is_some()
    }

    fn set_badge(&self, count: u32) {
        let Ok(badges) = self.document.query_selector_all(&self.selectors.count) else {
            return;
        };
        let text = count.to_string();
        for idx in 0..badges.length() {
            if let Some(badge) = badges.item(idx) {
                badge.set_text_content(Some(&text));
            }
        }
    }

    fn show_empty_state(&self) {
        self.set_display(&self.selectors.empty, "flex");
        self.set_display(&self.selectors.items, "none");
        self.set_display(&self.selectors.summary, "none");
        store_set_lines(&self.store, Vec::new());
    }

    fn render_items(&self, lines: &[CartLine], subtotal: &str, total: &str) {
        self.set_display(&self.selectors.empty, "none");
        self.set_display(&self.selectors.items, "block");
        self.set_display(&self.selectors.summary, "block");

        store_set_lines(&self.store, lines.to_vec());
        self.set_text(&self.selectors.subtotal, subtotal);
        self.set_text(&self.selectors.total, total);
    }

    fn confirm_checkout(&self, message: &str) {
        // Stub: no checkout page exists yet
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                warn!("checkout alert failed: {:?}", e);
            }
        }
    }
}
