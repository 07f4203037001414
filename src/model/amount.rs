//! Amount type for handling the monetary values found in an expense stream.
//!
//! This module provides the `Amount` type which wraps `Decimal` and only accepts the unsigned
//! decimal literals allowed by the line grammar: `123`, `123.45`, `.45` and `123.`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents an amount of money.
///
/// Parsing is strict: no sign, no exponent, no thousands separators and at least one digit on one
/// side of the decimal point. `Display` renders two decimals with thousands separators, while
/// serialization keeps the exact decimal value.
///
/// # Examples
///
/// ```
/// # use coloc::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("1234.5").unwrap();
/// assert_eq!(amount.to_string(), "1,234.50");
/// ```
///
/// A lone decimal point is not a number:
/// ```
/// # use coloc::model::Amount;
/// # use std::str::FromStr;
/// assert!(Amount::from_str(".").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Adds `other`, returning `None` if the result cannot be represented.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub enum AmountError {
    /// The text is not an unsigned decimal literal.
    Syntax(String),
    /// The text is well-formed but `Decimal` cannot hold it.
    Range(rust_decimal::Error),
}

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Syntax(s) => write!(f, "AmountError::Syntax({s:?})"),
            AmountError::Range(e) => Debug::fmt(e, f),
        }
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Syntax(s) => write!(f, "'{s}' is not a valid amount"),
            AmountError::Range(e) => Display::fmt(e, f),
        }
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AmountError::Syntax(_) => None,
            AmountError::Range(e) => Some(e),
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || AmountError::Syntax(s.to_string());
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.map(all_digits).unwrap_or(true) {
            return Err(syntax());
        }

        // Rebuild a literal that `Decimal` accepts: "123." -> "123" and ".45" -> "0.45"
        let literal = match fraction {
            _ if whole.is_empty() && fraction.unwrap_or_default().is_empty() => return Err(syntax()),
            None | Some("") => whole.to_string(),
            Some(fraction) if whole.is_empty() => format!("0.{fraction}"),
            Some(fraction) => format!("{whole}.{fraction}"),
        };

        Decimal::from_str(&literal)
            .map(Amount)
            .map_err(AmountError::Range)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_zero() || rounded.is_sign_positive() {
            ""
        } else {
            "-"
        };
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        write!(f, "{sign}{}.{cents}", group_thousands(whole))
    }
}

/// Inserts a comma between every group of three digits, counting from the right.
fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (ix, c) in whole.chars().enumerate() {
        if ix > 0 && (whole.len() - ix) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize the exact value, not the rounded display form
        serializer.serialize_str(&self.0.normalize().to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Decimal::from_str(&s)
            .map(Amount)
            .map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_integer() {
        let amount = Amount::from_str("123").unwrap();
        assert_eq!(amount.value(), dec("123"));
    }

    #[test]
    fn test_parse_fraction() {
        let amount = Amount::from_str("123.45").unwrap();
        assert_eq!(amount.value(), dec("123.45"));
    }

    #[test]
    fn test_parse_leading_point() {
        let amount = Amount::from_str(".45").unwrap();
        assert_eq!(amount.value(), dec("0.45"));
    }

    #[test]
    fn test_parse_trailing_point() {
        let amount = Amount::from_str("123.").unwrap();
        assert_eq!(amount.value(), dec("123"));
    }

    #[test]
    fn test_parse_zero() {
        let amount = Amount::from_str("0").unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_parse_rejects_bare_point() {
        assert!(matches!(Amount::from_str("."), Err(AmountError::Syntax(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Amount::from_str("").is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_separators() {
        for s in ["-5", "+5", "1,000", "1e3", "1.2.3", " 5", "5 ", "$5", "abc"] {
            assert!(Amount::from_str(s).is_err(), "'{s}' should not parse");
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        let huge = "9".repeat(40);
        assert!(matches!(
            Amount::from_str(&huge),
            Err(AmountError::Range(_))
        ));
    }

    #[test]
    fn test_display_positive() {
        let amount = Amount::new(dec("50"));
        assert_eq!(amount.to_string(), "50.00");
    }

    #[test]
    fn test_display_thousands() {
        let amount = Amount::new(dec("1234567.891"));
        assert_eq!(amount.to_string(), "1,234,567.89");
    }

    #[test]
    fn test_display_negative() {
        let amount = Amount::new(dec("-1500.5"));
        assert_eq!(amount.to_string(), "-1,500.50");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_serialize_exact() {
        let amount = Amount::from_str("20.50").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"20.5\"");
    }

    #[test]
    fn test_deserialize() {
        let amount: Amount = serde_json::from_str("\"-12.25\"").unwrap();
        assert_eq!(amount.value(), dec("-12.25"));
    }

    #[test]
    fn test_checked_add_is_exact() {
        let a = Amount::from_str(".1").unwrap();
        let b = Amount::from_str(".2").unwrap();
        assert_eq!(a.checked_add(b).unwrap().value(), dec("0.3"));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Amount::new(Decimal::MAX);
        assert!(max.checked_add(Amount::new(Decimal::ONE)).is_none());
    }

    #[test]
    fn test_display_beyond_f64_precision() {
        let amount = Amount::new(dec("12345678901234567.88"));
        assert_eq!(amount.to_string(), "12,345,678,901,234,567.88");
    }

    #[test]
    fn test_display_rounds_midpoint_away_from_zero() {
        assert_eq!(Amount::new(dec("0.125")).to_string(), "0.13");
        assert_eq!(Amount::new(dec("0.005")).to_string(), "0.01");
        assert_eq!(Amount::new(dec("-2.675")).to_string(), "-2.68");
    }

    #[test]
    fn test_display_no_negative_zero() {
        assert_eq!(Amount::new(dec("-0.004")).to_string(), "0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
