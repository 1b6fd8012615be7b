//! Saved delivery addresses.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A delivery address saved on the customer's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedAddress {
    pub id: AddressId,
    /// Short label such as "Home" or "Office".
    pub label: String,
    /// Recipient name.
    pub name: String,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    /// Six-digit postal index number.
    pub pin_code: String,
    pub phone: String,
    #[serde(default)]
    pub is_default: bool,
}

impl SavedAddress {
    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.line1.clone()];
        if let Some(ref line2) = self.line2 {
            parts.push(line2.clone());
        }
        parts.push(self.city.clone());
        parts.push(format!("{} - {}", self.state, self.pin_code));
        parts.join(", ")
    }

    /// Format as multi-line, recipient first.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![self.name.clone(), self.line1.clone()];
        if let Some(ref line2) = self.line2 {
            lines.push(line2.clone());
        }
        lines.push(format!("{}, {} - {}", self.city, self.state, self.pin_code));
        lines.push(format!("Phone: {}", self.phone));
        lines.join("\n")
    }

    /// Check if the address has every field needed for delivery.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.line1.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.state.trim().is_empty()
            && self.pin_code.len() == 6
            && self.pin_code.chars().all(|c| c.is_ascii_digit())
    }

    /// The default address, else the first one.
    pub fn preferred(addresses: &[SavedAddress]) -> Option<&SavedAddress> {
        addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| addresses.first())
    }
}
