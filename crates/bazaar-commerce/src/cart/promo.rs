//! Promo codes.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How a promo code computes its discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoKind {
    /// Whole-number percentage of the subtotal.
    Percentage,
    /// Fixed amount, capped at the subtotal.
    Fixed,
}

/// A promo code and its discount rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromoRule {
    /// Code the customer types (matched case-insensitively).
    pub code: String,
    /// Shown next to the discount line.
    #[serde(default)]
    pub description: String,
    /// Rule kind.
    pub kind: PromoKind,
    /// Percent for `Percentage`, amount for `Fixed`.
    pub value: i64,
}

impl PromoRule {
    /// Create a percentage promo.
    pub fn percentage(code: impl Into<String>, description: impl Into<String>, percent: i64) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            kind: PromoKind::Percentage,
            value: percent,
        }
    }

    /// Create a fixed-amount promo.
    pub fn fixed(code: impl Into<String>, description: impl Into<String>, amount: i64) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            kind: PromoKind::Fixed,
            value: amount,
        }
    }

    /// Discount this rule grants on a subtotal. Never exceeds the subtotal.
    pub fn discount_for(&self, subtotal: &Money) -> Result<Money, CommerceError> {
        let discount = match self.kind {
            PromoKind::Percentage => {
                let bps = self.value.checked_mul(100).ok_or(CommerceError::Overflow)?;
                subtotal.basis_points(bps)?
            }
            PromoKind::Fixed => Money::new(self.value, subtotal.currency),
        };
        Ok(discount.min(*subtotal))
    }

    /// Reject rules that cannot produce a sensible discount.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.code.trim().is_empty() {
            return Err(CommerceError::ConfigError("promo code must not be empty".to_string()));
        }
        let ok = match self.kind {
            PromoKind::Percentage => (1..=100).contains(&self.value),
            PromoKind::Fixed => self.value > 0,
        };
        if !ok {
            return Err(CommerceError::ConfigError(format!(
                "promo {} has out-of-range value {}",
                self.code, self.value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_promo() {
        let promo = PromoRule::percentage("SAVE10", "10% off", 10);
        assert_eq!(promo.discount_for(&Money::inr(10_000)).unwrap(), Money::inr(1000));
        assert_eq!(promo.discount_for(&Money::inr(4998)).unwrap(), Money::inr(500));
    }

    #[test]
    fn test_fixed_promo_capped() {
        let promo = PromoRule::fixed("FLAT500", "500 off", 500);
        assert_eq!(promo.discount_for(&Money::inr(300)).unwrap(), Money::inr(300));
        assert_eq!(promo.discount_for(&Money::inr(3000)).unwrap(), Money::inr(500));
    }

    #[test]
    fn test_validate() {
        assert!(PromoRule::percentage("X", "", 10).validate().is_ok());
        assert!(PromoRule::percentage("X", "", 0).validate().is_err());
        assert!(PromoRule::percentage("X", "", 101).validate().is_err());
        assert!(PromoRule::fixed("X", "", 0).validate().is_err());
        assert!(PromoRule::fixed("  ", "", 10).validate().is_err());
    }
}
