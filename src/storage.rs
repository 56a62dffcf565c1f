//! Browser Storage
//!
//! `CartStorage` over `window.localStorage`, falling back to memory when the
//! browser refuses access (private mode, sandboxed iframes).

use cart_core::{CartError, CartResult, CartStorage, MemoryStorage};
use log::warn;
use wasm_bindgen::JsValue;

pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web_sys::window().map(|win| win.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            Some(Err(e)) => {
                warn!("localStorage unavailable ({:?}), cart will not survive a reload", e);
                Self::Memory(MemoryStorage::new())
            }
            _ => {
                warn!("localStorage missing, cart will not survive a reload");
                Self::Memory(MemoryStorage::new())
            }
        }
    }
}

fn storage_error(e: JsValue) -> CartError {
    CartError::Storage(format!("{:?}", e))
}

impl CartStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> CartResult<Option<String>> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(storage_error),
            Self::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> CartResult<()> {
        match self {
            Self::Local(storage) => storage.set_item(key, value).map_err(storage_error),
            Self::Memory(storage) => storage.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> CartResult<()> {
        match self {
            Self::Local(storage) => storage.remove_item(key).map_err(storage_error),
            Self::Memory(storage) => storage.remove_item(key),
        }
    }
}
