//! Recording fakes shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cart_core::{
    CartConfig, CartController, CartLine, CartRepository, CartView, MemoryStorage, Notifier,
};

/// Everything the controller asked the page to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Empty,
    Items {
        lines: Vec<CartLine>,
        subtotal: String,
        total: String,
    },
}

#[derive(Debug, Default)]
pub struct PageState {
    pub badge: Option<u32>,
    pub display: Option<Rendered>,
    pub renders: u32,
    pub confirmations: Vec<String>,
    pub messages: Vec<String>,
}

/// View + notifier pair writing into one shared page state
#[derive(Clone, Default)]
pub struct RecordingPage {
    pub cart_page: bool,
    pub state: Rc<RefCell<PageState>>,
}

impl RecordingPage {
    pub fn cart_page() -> Self {
        Self {
            cart_page: true,
            ..Self::default()
        }
    }

    pub fn product_page() -> Self {
        Self::default()
    }

    pub fn badge(&self) -> Option<u32> {
        self.state.borrow().badge
    }

    pub fn display(&self) -> Option<Rendered> {
        self.state.borrow().display.clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.state.borrow().messages.clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.state.borrow().confirmations.clone()
    }

    pub fn renders(&self) -> u32 {
        self.state.borrow().renders
    }
}

impl CartView for RecordingPage {
    fn has_items_container(&self) -> bool {
        self.cart_page
    }

    fn set_badge(&self, count: u32) {
        self.state.borrow_mut().badge = Some(count);
    }

    fn show_empty_state(&self) {
        let mut state = self.state.borrow_mut();
        state.display = Some(Rendered::Empty);
        state.renders += 1;
    }

    fn render_items(&self, lines: &[CartLine], subtotal: &str, total: &str) {
        let mut state = self.state.borrow_mut();
        state.display = Some(Rendered::Items {
            lines: lines.to_vec(),
            subtotal: subtotal.to_string(),
            total: total.to_string(),
        });
        state.renders += 1;
    }

    fn confirm_checkout(&self, message: &str) {
        self.state.borrow_mut().confirmations.push(message.to_string());
    }
}

impl Notifier for RecordingPage {
    fn notify(&self, message: &str) {
        self.state.borrow_mut().messages.push(message.to_string());
    }
}

pub type TestController<'a> = CartController<&'a MemoryStorage, RecordingPage, RecordingPage>;

/// Controller over `storage` rendering into `page`, already rendered once
pub fn boot<'a>(storage: &'a MemoryStorage, page: &RecordingPage) -> TestController<'a> {
    let config = CartConfig::default();
    let controller = CartController::load(
        CartRepository::new(storage, config.storage_key.clone()),
        page.clone(),
        page.clone(),
        config,
    );
    controller.render();
    controller
}
