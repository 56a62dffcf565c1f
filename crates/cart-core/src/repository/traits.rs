//! Repository Layer - Core Traits
//!
//! Defines the key/value interface the cart is persisted through.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::error::CartResult;

/// String key/value store shaped like the browser `Storage` interface
///
/// Synchronous: every cart mutation writes through before re-rendering.
pub trait CartStorage {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn get_item(&self, key: &str) -> CartResult<Option<String>>;

    /// Overwrite a slot
    fn set_item(&self, key: &str, value: &str) -> CartResult<()>;

    /// Delete a slot
    fn remove_item(&self, key: &str) -> CartResult<()>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn get_item(&self, key: &str) -> CartResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> CartResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> CartResult<()> {
        (**self).remove_item(key)
    }
}
