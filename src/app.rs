//! Furni Cart App
//!
//! Page-ready wiring: build the controller, bind the storefront controls and
//! draw the restored cart.

use std::cell::RefCell;
use std::rc::Rc;

use cart_core::{CartAction, CartController, CartRepository, NewCartItem};
use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::config::load_config;
use crate::notifier::ToastNotifier;
use crate::storage::BrowserStorage;
use crate::view::DomCartView;

type Controller = CartController<BrowserStorage, DomCartView, ToastNotifier>;
type SharedCart = Rc<RefCell<Controller>>;

/// Boot now if the DOM is parsed, otherwise on `DOMContentLoaded`
pub fn start() {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        error!("no document, cart not started");
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || boot(doc));
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            error!("could not wait for DOMContentLoaded: {:?}", e);
        }
    } else {
        boot(document);
    }
}

fn boot(document: Document) {
    let config = load_config();
    let repository = CartRepository::new(BrowserStorage::open(), config.storage_key.clone());
    let view = DomCartView::mount(document.clone(), config.selectors.clone());
    let notifier = ToastNotifier::new(&config);

    let cart: SharedCart = Rc::new(RefCell::new(CartController::load(
        repository,
        view,
        notifier,
        config.clone(),
    )));

    bind_add_buttons(&document, &cart, &config.selectors.add_button);
    bind_checkout(&document, &cart, &config.selectors.checkout);
    bind_row_actions(&cart);

    cart.borrow().render();
    info!("cart ready");
}

/// Run `f` against the controller unless a handler is already inside it
fn with_cart(cart: &SharedCart, f: impl FnOnce(&mut Controller)) {
    match cart.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => warn!("cart busy, click ignored"),
    }
}

fn add_click_listener(target: &Element, on_click: Closure<dyn FnMut(MouseEvent)>) {
    if let Err(e) = target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        warn!("could not bind click handler: {:?}", e);
    }
    on_click.forget();
}

fn bind_add_buttons(document: &Document, cart: &SharedCart, selector: &str) {
    let Ok(buttons) = document.query_selector_all(selector) else {
        warn!("bad add-to-cart selector `{}`", selector);
        return;
    };

    for idx in 0..buttons.length() {
        let Some(button) = buttons.item(idx).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let cart = Rc::clone(cart);
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let Some(control) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let request = NewCartItem::from_attributes(
                control.get_attribute("data-id"),
                control.get_attribute("data-name"),
                control.get_attribute("data-price"),
                control.get_attribute("data-img"),
            );
            match request {
                Ok(item) => with_cart(&cart, |c| c.add_to_cart(item)),
                Err(e) => warn!("ignoring add-to-cart click: {}", e),
            }
        });
        add_click_listener(&button, on_click);
    }
    debug!("bound {} add-to-cart controls", buttons.length());
}

fn bind_checkout(document: &Document, cart: &SharedCart, selector: &str) {
    let Ok(Some(button)) = document.query_selector(selector) else {
        debug!("no checkout control on this page");
        return;
    };

    let cart = Rc::clone(cart);
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_ev: MouseEvent| {
        with_cart(&cart, |c| {
            let outcome = c.checkout();
            debug!("checkout: {:?}", outcome);
        });
    });
    add_click_listener(&button, on_click);
}

/// One delegated listener on the items container serves every row control,
/// however often the rows are rebuilt
fn bind_row_actions(cart: &SharedCart) {
    let Some(container) = cart.borrow().view().items_container().cloned() else {
        return;
    };

    let shared = Rc::clone(cart);
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
        if let Some(action) = row_action(&ev) {
            with_cart(&shared, |c| c.dispatch(action));
        }
    });
    add_click_listener(&container, on_click);
}

fn row_action(ev: &MouseEvent) -> Option<CartAction> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let control = target.closest("[data-cart-action]").ok().flatten()?;
    let action = control.get_attribute("data-cart-action")?;
    let id = control.get_attribute("data-id")?;
    CartAction::from_control(&action, id)
}
