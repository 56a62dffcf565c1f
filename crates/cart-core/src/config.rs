//! Cart Configuration
//!
//! Storage key, currency, notification timing, page selectors and shopper
//! messages. Every field has a default matching the stock storefront
//! markup, so a page only overrides what differs.

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartConfig {
    /// localStorage slot holding the cart snapshot
    pub storage_key: String,
    /// Prefix for every rendered amount
    pub currency_symbol: String,
    /// How long a notification stays visible
    pub notification_ms: u32,
    pub selectors: CartSelectors,
    pub messages: CartMessages,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: "furniCart".to_string(),
            currency_symbol: "$".to_string(),
            notification_ms: 3000,
            selectors: CartSelectors::default(),
            messages: CartMessages::default(),
        }
    }
}

impl CartConfig {
    /// Decode a (possibly partial) JSON override
    pub fn from_json(raw: &str) -> CartResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CartResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(CartError::Config("storageKey must not be empty".to_string()));
        }
        if self.selectors.items.trim().is_empty() {
            return Err(CartError::Config("selectors.items must not be empty".to_string()));
        }
        Ok(())
    }
}

/// CSS selectors for the collaborator markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartSelectors {
    /// Item-count badges (any number, including none)
    pub count: String,
    /// Row container; its absence means "not the cart page"
    pub items: String,
    pub empty: String,
    pub summary: String,
    pub subtotal: String,
    pub total: String,
    /// Add-to-cart controls carrying `data-id`, `data-name`, `data-price`, `data-img`
    pub add_button: String,
    /// Optional checkout control
    pub checkout: String,
    /// Class name (not a selector) of the shared notification element
    pub message_class: String,
}

impl Default for CartSelectors {
    fn default() -> Self {
        Self {
            count: ".cart__count".to_string(),
            items: ".cart__items".to_string(),
            empty: ".cart__empty".to_string(),
            summary: ".cart__summary".to_string(),
            subtotal: ".cart__subtotal".to_string(),
            total: ".cart__total".to_string(),
            add_button: ".add__to__cart".to_string(),
            checkout: ".checkout__btn".to_string(),
            message_class: "cart__message".to_string(),
        }
    }
}

/// Shopper-facing texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartMessages {
    /// `{name}` is replaced by the product name
    pub added: String,
    /// `{name}` is replaced by the product name
    pub removed: String,
    pub checkout_empty: String,
    pub checkout_confirm: String,
}

impl Default for CartMessages {
    fn default() -> Self {
        Self {
            added: "{name} added to cart!".to_string(),
            removed: "{name} removed from cart".to_string(),
            checkout_empty: "Your cart is empty. Add items before checkout.".to_string(),
            checkout_confirm: "Proceeding to checkout...".to_string(),
        }
    }
}

impl CartMessages {
    pub fn added_message(&self, name: &str) -> String {
        self.added.replace("{name}", name)
    }

    pub fn removed_message(&self, name: &str) -> String {
        self.removed.replace("{name}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_storefront_markup() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "furniCart");
        assert_eq!(config.notification_ms, 3000);
        assert_eq!(config.selectors.items, ".cart__items");
        assert_eq!(config.selectors.message_class, "cart__message");
    }

    #[test]
    fn test_partial_override() {
        let config = CartConfig::from_json(
            r#"{"currencySymbol":"€","selectors":{"count":".badge"},"messages":{"added":"+1 {name}"}}"#,
        )
        .unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.storage_key, "furniCart");
        assert_eq!(config.selectors.count, ".badge");
        assert_eq!(config.selectors.items, ".cart__items");
        assert_eq!(config.messages.added_message("Sofa"), "+1 Sofa");
        assert_eq!(config.messages.removed_message("Sofa"), "Sofa removed from cart");
    }

    #[test]
    fn test_invalid_override() {
        assert!(matches!(CartConfig::from_json("[1,2]"), Err(CartError::Serialize(_))));
        assert!(matches!(
            CartConfig::from_json(r#"{"storageKey":"  "}"#),
            Err(CartError::Config(_))
        ));
    }
}
