//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (kopecks, cents) as i64 so sums
//! and persisted values are exact. Arithmetic saturates at the i64 bounds
//! instead of wrapping or panicking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols accepted (and ignored) when parsing
const CURRENCY_SYMBOLS: &[char] = &['₽', '$'];

/// A monetary amount stored in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input: one trillion whole units.
    ///
    /// Far enough below `i64::MAX` that summing ninety thousand maximal
    /// amounts stays exact.
    pub const MAX_INPUT: Money = Money::from_major(1_000_000_000_000);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use family_budget::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.major(), 10);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use family_budget::models::Money;
    /// assert_eq!(Money::from_major(85000).minor(), 8_500_000);
    /// ```
    pub const fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(100))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// `self / other`, or `None` when `other` is zero
    pub fn ratio_to(&self, other: Money) -> Option<f64> {
        if other.is_zero() {
            None
        } else {
            Some(self.0 as f64 / other.0 as f64)
        }
    }

    /// Divide by a positive count, rounding half away from zero
    pub fn div_rounded(&self, divisor: u32) -> Self {
        let divisor = i64::from(divisor.max(1));
        let quotient = self.0 / divisor;
        let remainder = self.0 % divisor;
        if 2 * remainder.abs() >= divisor {
            Self(quotient + self.0.signum())
        } else {
            Self(quotient)
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "12500", "12500.50", "12500,5", "12 500", "-10", "₽100" and
    /// "100 ₽". More than two fraction digits are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest
            .trim_start_matches(CURRENCY_SYMBOLS)
            .trim_end_matches(CURRENCY_SYMBOLS);
        let digits: String = rest.chars().filter(|c| !is_group_separator(*c)).collect();

        let (whole, fraction) = match digits.split_once(|c: char| c == '.' || c == ',') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate the fraction to 2 digits
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let minor = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with digit grouping and a trailing currency symbol
    ///
    /// Whole amounts drop the fraction: `85 000 ₽`, `12 500,50 ₽`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let grouped = group_thousands(self.major().unsigned_abs());
        let number = if self.minor_part() == 0 {
            grouped
        } else {
            format!("{},{:02}", grouped, self.minor_part())
        };

        if symbol.is_empty() {
            format!("{}{}", sign, number)
        } else {
            format!("{}{} {}", sign, number, symbol)
        }
    }
}

fn is_group_separator(c: char) -> bool {
    c == ' ' || c == '\u{a0}' || c == '\u{202f}' || c == '_'
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(85000).minor(), 8_500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_major(85000).format_with_symbol("₽"), "85 000 ₽");
        assert_eq!(
            Money::from_minor(1_250_050).format_with_symbol("₽"),
            "12 500,50 ₽"
        );
        assert_eq!(Money::from_major(999).format_with_symbol("₽"), "999 ₽");
        assert_eq!(
            Money::from_major(-1_234_567).format_with_symbol(""),
            "-1 234 567"
        );
        assert_eq!(Money::zero().format_with_symbol("₽"), "0 ₽");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("10,5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse("12500").unwrap().minor(), 1_250_000);
        assert_eq!(Money::parse("12 500").unwrap().minor(), 1_250_000);
        assert_eq!(Money::parse("100 ₽").unwrap().minor(), 10_000);
        assert_eq!(Money::parse("$10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("0.05").unwrap().minor(), 5);
        assert_eq!(Money::parse(".5").unwrap().minor(), 50);
        assert_eq!(Money::parse("1.999").unwrap().minor(), 199);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("   ").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_div_rounded() {
        assert_eq!(Money::from_major(15700).div_rounded(30).minor(), 52_333);
        assert_eq!(Money::from_minor(5).div_rounded(2).minor(), 3);
        assert_eq!(Money::from_minor(4).div_rounded(3).minor(), 1);
        assert_eq!(Money::from_minor(-5).div_rounded(2).minor(), -3);
        assert_eq!(Money::zero().div_rounded(30), Money::zero());
    }

    #[test]
    fn test_ratio_to() {
        let expense = Money::from_major(15700);
        let income = Money::from_major(85000);
        let ratio = expense.ratio_to(income).unwrap();
        assert!((ratio - 0.184_705_882).abs() < 1e-6);
        assert!(expense.ratio_to(Money::zero()).is_none());
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::from_minor(100), Money::from_minor(200)]
            .into_iter()
            .sum();
        assert_eq!(total.minor(), 300);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max + Money::from_minor(1), max);
        let min = Money::from_minor(i64::MIN);
        assert_eq!(min - Money::from_minor(1), min);
        assert_eq!(-Money::from_minor(i64::MIN), max);

        let mut acc = max;
        acc += max;
        assert_eq!(acc, max);
    }

    #[test]
    fn test_sum_of_huge_amounts_saturates() {
        let huge = Money::parse("92233720368547758").unwrap();
        let total: Money = vec![huge, huge, huge].into_iter().sum();
        assert_eq!(total, Money::from_minor(i64::MAX));
        assert!(total.is_positive());
    }

    #[test]
    fn test_max_input_leaves_headroom() {
        let total: Money = std::iter::repeat(Money::MAX_INPUT).take(90_000).sum();
        assert_eq!(total.minor(), Money::MAX_INPUT.minor() * 90_000);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
