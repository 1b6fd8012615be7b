//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit the store prices in. Rupee
//! prices carry no paise, so an INR amount of `2499` is ₹2,499.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Number of decimal places in a stored amount.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::INR => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest priced unit.
    pub amount: i64,
    /// The currency.
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Shorthand for a rupee amount.
    pub fn inr(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Checked addition; fails on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Checked subtraction; fails on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, CommerceError> {
        self.same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Checked multiplication by a quantity.
    pub fn try_multiply(&self, factor: i64) -> Result<Money, CommerceError> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// A share of this amount in basis points, rounded half away from zero.
    ///
    /// ```
    /// use bazaar_commerce::money::Money;
    /// // 18% of 4998 is 899.64
    /// assert_eq!(Money::inr(4998).basis_points(1800).unwrap().amount, 900);
    /// ```
    pub fn basis_points(&self, bps: i64) -> Result<Money, CommerceError> {
        let scaled = self.amount.checked_mul(bps).ok_or(CommerceError::Overflow)?;
        Ok(Money::new(round_div(scaled, 10_000), self.currency))
    }

    /// The smaller of two amounts in the same currency.
    pub fn min(self, other: Money) -> Money {
        if other.amount < self.amount {
            other
        } else {
            self
        }
    }

    /// Sum an iterator of Money values.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format for display: `₹4,998`, `₹1,24,999`, `$49.99`.
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let whole = abs / divisor;
        let grouped = match self.currency {
            Currency::INR => group_indian(whole),
            _ => group_thousands(whole),
        };
        if places == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), grouped)
        } else {
            let frac = abs % divisor;
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency.symbol(),
                grouped,
                frac,
                width = places as usize
            )
        }
    }

    fn same_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Integer division rounding half away from zero.
pub(crate) fn round_div(value: i64, divisor: i64) -> i64 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder.abs() * 2 >= divisor {
        quotient + value.signum()
    } else {
        quotient
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Indian grouping: last three digits, then pairs (1,23,45,678).
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_inr() {
        assert_eq!(Money::inr(0).display(), "\u{20b9}0");
        assert_eq!(Money::inr(999).display(), "\u{20b9}999");
        assert_eq!(Money::inr(4998).display(), "\u{20b9}4,998");
        assert_eq!(Money::inr(124_999).display(), "\u{20b9}1,24,999");
        assert_eq!(Money::inr(12_345_678).display(), "\u{20b9}1,23,45,678");
    }

    #[test]
    fn test_money_display_usd() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(123_456_705, Currency::USD).display(), "$1,234,567.05");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::inr(1000).try_add(&Money::inr(500)).unwrap();
        assert_eq!(c.amount, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let c = Money::inr(1000).try_subtract(&Money::inr(300)).unwrap();
        assert_eq!(c.amount, 700);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let err = Money::inr(1000)
            .try_add(&Money::new(1000, Currency::EUR))
            .unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_money_overflow() {
        assert_eq!(
            Money::inr(i64::MAX).try_multiply(2),
            Err(CommerceError::Overflow)
        );
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::inr(4998), Money::inr(99), Money::inr(900)];
        assert_eq!(
            Money::try_sum(amounts.iter(), Currency::INR),
            Ok(Money::inr(5997))
        );
        assert_eq!(
            Money::try_sum(std::iter::empty::<&Money>(), Currency::INR),
            Ok(Money::zero(Currency::INR))
        );
        let huge = [Money::inr(i64::MAX), Money::inr(1)];
        assert_eq!(
            Money::try_sum(huge.iter(), Currency::INR),
            Err(CommerceError::Overflow)
        );
    }

    #[test]
    fn test_basis_points_rounds_half_up() {
        // 10% of 4998 = 499.8
        assert_eq!(Money::inr(4998).basis_points(1000).unwrap().amount, 500);
        // 18% of 25 = 4.5
        assert_eq!(Money::inr(25).basis_points(1800).unwrap().amount, 5);
        // 18% of 2 = 0.36
        assert_eq!(Money::inr(2).basis_points(1800).unwrap().amount, 0);
        // No overflow while rounding near the top of the range.
        assert_eq!(round_div(i64::MAX, 10_000), i64::MAX / 10_000 + 1);
        assert_eq!(round_div(-25, 10), -3);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code(" USD "), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
