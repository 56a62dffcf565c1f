//! UI Components
//!
//! Leptos components mounted into the storefront markup.

mod cart_rows;

pub use cart_rows::CartRows;
