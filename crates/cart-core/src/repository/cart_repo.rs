//! Cart Repository
//!
//! Persists the whole cart as one JSON array under a single storage key.
//! There is no schema version; readers must tolerate an absent slot.

use log::{debug, warn};

use super::traits::CartStorage;
use crate::domain::Cart;
use crate::error::CartResult;

/// Snapshot repository for a single cart slot
#[derive(Debug)]
pub struct CartRepository<S> {
    storage: S,
    key: String,
}

impl<S: CartStorage> CartRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restore the persisted cart.
    ///
    /// An absent slot, a failed read or an unparseable snapshot all yield an
    /// empty cart.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved cart under `{}`", self.key);
                return Cart::new();
            }
            Err(e) => {
                warn!("reading saved cart `{}` failed, starting empty: {}", self.key, e);
                return Cart::new();
            }
        };

        match Cart::from_json(&raw) {
            Ok(cart) => {
                debug!("restored {} cart entries from `{}`", cart.len(), self.key);
                cart
            }
            Err(e) => {
                warn!("saved cart `{}` is unreadable, starting empty: {}", self.key, e);
                Cart::new()
            }
        }
    }

    /// Write the full cart snapshot
    pub fn save(&self, cart: &Cart) -> CartResult<()> {
        let raw = cart.to_json()?;
        self.storage.set_item(&self.key, &raw)
    }

    /// Drop the persisted snapshot
    pub fn clear(&self) -> CartResult<()> {
        self.storage.remove_item(&self.key)
    }
}
