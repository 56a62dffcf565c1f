//! Page Configuration
//!
//! A page can tweak the cart by defining `window.furniCartConfig` before the
//! wasm module starts, e.g. `{ currencySymbol: "€", selectors: { count: ".badge" } }`.

use cart_core::CartConfig;
use log::{info, warn};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "furniCartConfig";

/// Defaults merged with the page override, if any
pub fn load_config() -> CartConfig {
    let Some(window) = web_sys::window() else {
        return CartConfig::default();
    };
    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return CartConfig::default(),
    };

    match serde_wasm_bindgen::from_value::<CartConfig>(value) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                info!("using window.{} override", CONFIG_GLOBAL);
                config
            }
            Err(e) => {
                warn!("ignoring window.{}: {}", CONFIG_GLOBAL, e);
                CartConfig::default()
            }
        },
        Err(e) => {
            warn!("ignoring malformed window.{}: {}", CONFIG_GLOBAL, e);
            CartConfig::default()
        }
    }
}
