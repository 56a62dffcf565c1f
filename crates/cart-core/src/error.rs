//! Cart Errors
//!
//! Nothing here is ever shown to the shopper; the browser layer logs these
//! and degrades to an empty or unchanged cart.

use thiserror::Error;

/// Common result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

#[derive(Debug, Error)]
pub enum CartError {
    /// The backing key/value store rejected a read or write
    #[error("storage error: {0}")]
    Storage(String),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An add-to-cart control is missing a required data attribute
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("invalid price `{raw}`: {reason}")]
    InvalidPrice { raw: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}
