//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an ArtisanId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(ArtisanId);
define_id!(LineItemId);
define_id!(OrderId);
define_id!(AddressId);
define_id!(PaymentMethodId);
define_id!(CustomerId);

impl LineItemId {
    /// Deterministic line id for a product and its selected options.
    ///
    /// Two add-to-cart actions with the same product and options map to the
    /// same line, which is how quantities merge.
    pub fn for_selection(product_id: &ProductId, options: &BTreeMap<String, String>) -> Self {
        if options.is_empty() {
            return Self(product_id.as_str().to_string());
        }
        let opts = options
            .iter()
            .map(|(k, v)| format!("{}={}", k.to_lowercase(), v.to_lowercase()))
            .collect::<Vec<_>>()
            .join(";");
        Self(format!("{}[{}]", product_id, opts))
    }
}

impl OrderId {
    /// Synthetic order id shown on the confirmation page
    /// (`ORD-<millis>-<seq>`). The process-wide sequence keeps ids placed in
    /// the same millisecond apart.
    pub fn synthetic() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};

        static SEQUENCE: AtomicU64 = AtomicU64::new(0);

        let millis = chrono::Utc::now().timestamp_millis();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("ORD-{}-{}", millis, seq))
    }
}
