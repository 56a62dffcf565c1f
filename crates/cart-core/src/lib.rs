//! Furni Cart Core
//!
//! Layered architecture:
//! - domain: cart entities and mutation rules
//! - repository: storage abstraction and snapshot persistence
//! - view: rendering contract and pre-formatted row models
//! - controller: mutate, persist, render, notify

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod repository;
pub mod view;

pub use config::{CartConfig, CartMessages, CartSelectors};
pub use controller::{CartAction, CartController, CheckoutOutcome};
pub use domain::{AddOutcome, Cart, CartItem, DecreaseOutcome, Money, NewCartItem};
pub use error::{CartError, CartResult};
pub use repository::{CartRepository, CartStorage, MemoryStorage};
pub use view::{CartLine, CartSummary, CartView, Notifier};
