//! Domain Layer
//!
//! Cart entities and the rules for mutating them.
//! No storage or rendering concerns live here.

mod cart;
mod cart_item;
mod money;

pub use cart::{AddOutcome, Cart, DecreaseOutcome};
pub use cart_item::{CartItem, NewCartItem};
pub use money::Money;
