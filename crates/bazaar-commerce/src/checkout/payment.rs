//! Saved payment methods.
//!
//! These are display records only. No payment is ever authorized.

use crate::ids::PaymentMethodId;
use serde::{Deserialize, Serialize};

/// Kind of payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Card,
    Upi,
    NetBanking,
    CashOnDelivery,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Card => "card",
            PaymentKind::Upi => "upi",
            PaymentKind::NetBanking => "net_banking",
            PaymentKind::CashOnDelivery => "cash_on_delivery",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentKind::Card => "Credit / Debit Card",
            PaymentKind::Upi => "UPI",
            PaymentKind::NetBanking => "Net Banking",
            PaymentKind::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Paid up front, so the payment milestone completes at order time.
    pub fn is_prepaid(&self) -> bool {
        !matches!(self, PaymentKind::CashOnDelivery)
    }
}

/// A payment method saved on the customer's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub kind: PaymentKind,
    /// e.g. "HDFC Visa" or "Google Pay".
    pub label: String,
    /// Masked detail, e.g. "•••• 4242" or "ananya@okhdfc".
    pub detail: String,
    #[serde(default)]
    pub is_default: bool,
}

impl PaymentMethod {
    /// The default method, else the first one.
    pub fn preferred(methods: &[PaymentMethod]) -> Option<&PaymentMethod> {
        methods.iter().find(|m| m.is_default).or_else(|| methods.first())
    }
}

/// Payment details copied onto an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSummary {
    pub kind: PaymentKind,
    pub label: String,
    pub detail: String,
}

impl From<&PaymentMethod> for PaymentSummary {
    fn from(method: &PaymentMethod) -> Self {
        Self {
            kind: method.kind,
            label: method.label.clone(),
            detail: method.detail.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn upi() -> PaymentMethod {
        PaymentMethod {
            id: PaymentMethodId::new("pm-upi"),
            kind: PaymentKind::Upi,
            label: "Google Pay".to_string(),
            detail: "ananya@okhdfc".to_string(),
            is_default: false,
        }
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&PaymentKind::CashOnDelivery).unwrap();
        assert_eq!(json, "\"cash_on_delivery\"");
        assert!(!PaymentKind::CashOnDelivery.is_prepaid());
        assert!(PaymentKind::Upi.is_prepaid());
    }

    #[test]
    fn test_summary_from_method() {
        let summary = PaymentSummary::from(&upi());
        assert_eq!(summary.kind, PaymentKind::Upi);
        assert_eq!(summary.detail, "ananya@okhdfc");
    }
}
