//! Cart View Store
//!
//! Uses Leptos reactive_stores so the mounted row list re-renders when the
//! controller pushes a new set of lines.

use cart_core::CartLine;
use leptos::prelude::*;
use reactive_stores::Store;

/// Rows currently shown on the cart page
#[derive(Clone, Debug, Default, Store)]
pub struct CartViewState {
    pub lines: Vec<CartLine>,
}

/// Type alias for the store
pub type CartStore = Store<CartViewState>;

pub fn create_cart_store() -> CartStore {
    Store::new(CartViewState::default())
}

/// Replace every row
pub fn store_set_lines(store: &CartStore, lines: Vec<CartLine>) {
    *store.lines().write() = lines;
}

/// Current rows, tracked
pub fn store_lines(store: &CartStore) -> Vec<CartLine> {
    store.lines().get()
}
