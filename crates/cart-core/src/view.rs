//! Rendering Contract
//!
//! The controller only talks to the page through [`CartView`] and
//! [`Notifier`], so its logic runs the same against the DOM or a test fake.

use rust_decimal::Decimal;

use crate::domain::{Cart, CartItem, Money};

/// One rendered row, with amounts already formatted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl CartLine {
    pub fn from_item(item: &CartItem, symbol: &str) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            unit_price: Money::format(item.price, symbol),
            quantity: item.quantity,
            line_total: Money::format(item.line_total(), symbol),
        }
    }

    /// Rows for every entry, in cart order
    pub fn from_cart(cart: &Cart, symbol: &str) -> Vec<Self> {
        cart.items()
            .iter()
            .map(|item| Self::from_item(item, symbol))
            .collect()
    }
}

/// Order summary block
///
/// No taxes, shipping or discounts are modelled, so `total == subtotal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: Decimal,
    pub total: Decimal,
}

impl CartSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        Self {
            item_count: cart.item_count(),
            subtotal,
            total: subtotal,
        }
    }

    pub fn subtotal_label(&self, symbol: &str) -> String {
        Money::format(self.subtotal, symbol)
    }

    pub fn total_label(&self, symbol: &str) -> String {
        Money::format(self.total, symbol)
    }
}

/// Page surface the cart is projected onto
pub trait CartView {
    /// Whether the page has a cart item container at all
    fn has_items_container(&self) -> bool;

    /// Write the unit count into every badge; no badges is fine
    fn set_badge(&self, count: u32);

    /// Show the empty indicator and hide the item list and summary
    fn show_empty_state(&self);

    /// Hide the empty indicator, show list and summary, rebuild the header
    /// and one row per line, and write the subtotal and total fields
    fn render_items(&self, lines: &[CartLine], subtotal: &str, total: &str);

    /// Blocking confirmation shown when checking out a non-empty cart
    fn confirm_checkout(&self, message: &str);
}

/// Transient shopper notification
pub trait Notifier {
    fn notify(&self, message: &str);
}
