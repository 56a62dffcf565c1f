//! Cart Item Entity
//!
//! One line of the cart, keyed by the product id from the storefront markup.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CartError, CartResult};

/// Largest unit price accepted from page markup
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A product in the cart with its quantity
///
/// Persisted as `{id, name, price, image, quantity}`. `price` is written as a
/// decimal string and read back from either a string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Storefront product id, unique within the cart
    pub id: String,
    /// Display name; `null` or missing in older snapshots reads as ""
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Image URL or path; `null` or missing reads as ""
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    /// Always >= 1 while the item is in a cart
    pub quantity: u32,
}

impl CartItem {
    /// Price multiplied by quantity, `None` when it does not fit a `Decimal`
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    /// Price multiplied by quantity, saturating at `Decimal::MAX`
    pub fn line_total(&self) -> Decimal {
        self.checked_line_total().unwrap_or(Decimal::MAX)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Product details carried by an add-to-cart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

impl NewCartItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Build a request from the raw `data-id`, `data-name`, `data-price` and
    /// `data-img` attribute values of an add-to-cart control.
    pub fn from_attributes(
        id: Option<String>,
        name: Option<String>,
        price: Option<String>,
        image: Option<String>,
    ) -> CartResult<Self> {
        let id = id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or(CartError::MissingAttribute("data-id"))?;
        let raw_price = price.ok_or(CartError::MissingAttribute("data-price"))?;
        let price = parse_price(&raw_price)?;

        Ok(Self {
            id,
            name: name.unwrap_or_default(),
            price,
            image: image.unwrap_or_default(),
        })
    }

    /// Turn the request into a fresh cart line with quantity 1
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity: 1,
        }
    }
}

/// Parse a price attribute such as `199.99`, ` 12 ` or `$5.50`
fn parse_price(raw: &str) -> CartResult<Decimal> {
    let text = raw.trim();
    let text = text.strip_prefix('$').unwrap_or(text).trim();

    let price = Decimal::from_str(text).map_err(|e| CartError::InvalidPrice {
        raw: raw.to_string(),
        reason: e.to_string(),
    })?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(CartError::InvalidPrice {
            raw: raw.to_string(),
            reason: "price must not be negative".to_string(),
        });
    }
    if price > MAX_PRICE {
        return Err(CartError::InvalidPrice {
            raw: raw.to_string(),
            reason: format!("price must not exceed {}", MAX_PRICE),
        });
    }
    Ok(price)
}
