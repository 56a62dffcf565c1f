//! In-memory storage backend.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::CartStorage;
use crate::error::CartResult;

/// Storage that lives only as long as the value itself
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Current raw value of a slot
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl CartStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> CartResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> CartResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> CartResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
