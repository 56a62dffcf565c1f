//! Cart Aggregate
//!
//! Ordered list of cart items, unique by id. Existing entries are updated in
//! place, so the order reflects when each product was first added.

use log::warn;
use rust_decimal::Decimal;

use super::cart_item::{CartItem, NewCartItem};
use crate::error::CartResult;

/// Result of adding a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// New entry appended with quantity 1
    Inserted,
    /// Existing entry bumped; its stored name/price/image are kept
    Incremented { quantity: u32 },
}

/// Result of decreasing a product's quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecreaseOutcome {
    Decremented { quantity: u32 },
    /// Quantity was 1, so the entry was deleted
    Removed(CartItem),
}

/// The shopper's cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from restored entries.
    ///
    /// Zero-quantity entries are dropped and repeated ids are folded into
    /// their first occurrence. Entries whose line total overflows a
    /// `Decimal` are dropped as well.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(&item.id) {
                Some(idx) => {
                    let existing = &mut cart.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart.items.retain(|item| {
            let fits = item.checked_line_total().is_some();
            if !fits {
                warn!("dropping restored entry `{}`: line total overflows", item.id);
            }
            fits
        });
        cart
    }

    /// Decode a persisted snapshot
    pub fn from_json(raw: &str) -> CartResult<Self> {
        let items: Vec<CartItem> = serde_json::from_str(raw)?;
        Ok(Self::from_items(items))
    }

    /// Encode the full cart as a JSON array snapshot
    pub fn to_json(&self) -> CartResult<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all entries (the badge value)
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Sum of all line totals, recomputed on every call.
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.line_total()).unwrap_or(Decimal::MAX)
        })
    }

    /// Add one unit of a product.
    ///
    /// When the id is already present only the quantity changes; the details
    /// carried by `new_item` are discarded.
    pub fn add(&mut self, new_item: NewCartItem) -> AddOutcome {
        match self.position(&new_item.id) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.quantity = existing.quantity.saturating_add(1);
                AddOutcome::Incremented {
                    quantity: existing.quantity,
                }
            }
            None => {
                self.items.push(new_item.into_item());
                AddOutcome::Inserted
            }
        }
    }

    /// Add one unit to an existing entry. Returns the new quantity.
    pub fn increase(&mut self, id: &str) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity = item.quantity.saturating_add(1);
        Some(item.quantity)
    }

    /// Take one unit away, deleting the entry instead of leaving quantity 0
    pub fn decrease(&mut self, id: &str) -> Option<DecreaseOutcome> {
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        if item.quantity > 1 {
            item.quantity -= 1;
            Some(DecreaseOutcome::Decremented {
                quantity: item.quantity,
            })
        } else {
            Some(DecreaseOutcome::Removed(self.items.remove(idx)))
        }
    }

    /// Delete an entry regardless of quantity
    pub fn remove(&mut self, id: &str) -> Option<CartItem> {
        let idx = self.position(id)?;
        Some(self.items.remove(idx))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
