//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in marketplace operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Artisan not found.
    #[error("Artisan not found: {0}")]
    ArtisanNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Saved address not found.
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Payment method not found.
    #[error("Payment method not found: {0}")]
    PaymentMethodNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Option selection does not fit the product.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Invalid promo code.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// A checkout step is missing its required selection.
    #[error("Please select {0} to continue")]
    CheckoutIncomplete(String),

    /// Rejected inventory edit.
    #[error("Invalid inventory edit for {product_id}: {reason}")]
    InvalidInventoryEdit { product_id: String, reason: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Malformed timeline.
    #[error("Invalid tracking timeline: {0}")]
    InvalidTimeline(String),

    /// A simulated-latency task was cancelled before it finished.
    #[error("Task cancelled")]
    TaskCancelled,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::ConfigError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_incomplete_message() {
        let err = CommerceError::CheckoutIncomplete("a shipping address".to_string());
        assert_eq!(err.to_string(), "Please select a shipping address to continue");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: CommerceError = parse.unwrap_err().into();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
