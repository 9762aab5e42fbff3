//! Money type for representing currency amounts
//!
//! Internally stores amounts in paise (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as paise (hundredths of a rupee)
///
/// Using i64 paise avoids floating-point precision issues in stored budgets.
/// Fractional computations (percentages, proportional shares) go through the
/// f64 helpers below and are floored back to whole paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paise
    ///
    /// # Examples
    /// ```
    /// use qbudget::models::Money;
    /// let amount = Money::from_paise(1050); // ₹10.50
    /// ```
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create a Money amount from whole rupees
    ///
    /// # Examples
    /// ```
    /// use qbudget::models::Money;
    /// let amount = Money::from_rupees(25000); // ₹25000.00
    /// ```
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a fractional rupee value, for prompts and chart scaling
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by an f64 factor, flooring the result to whole paise
    ///
    /// Flooring keeps "never take more than" bounds conservative: for any
    /// factor below 1 the result is strictly less than the original amount
    /// (when the amount is at least one paisa).
    pub fn mul_f64_floor(&self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).floor() as i64)
    }

    /// Take a percentage of this amount, flooring to whole paise
    ///
    /// `Money::from_rupees(25000).percent_floor(10.0)` is ₹2500.00.
    pub fn percent_floor(&self, percent: f64) -> Self {
        self.mul_f64_floor(percent / 100.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('₹').unwrap_or(s);

        // Parse based on format
        let paise = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let rupees: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate paise to 2 digits. Digits-only keeps the
            // byte slice below on char boundaries.
            let paise_str = parts[1];
            if !paise_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }
            let paise: i64 = match paise_str.len() {
                0 => 0,
                1 => {
                    paise_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => paise_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            rupees * 100 + paise
        } else {
            // Integer format - assume rupees
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -paise } else { paise }))
    }

    /// Format with a custom currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.rupees().abs(),
                self.paise_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.rupees(), self.paise_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-₹{}.{:02}", self.rupees().abs(), self.paise_part())
        } else {
            write!(f, "₹{}.{:02}", self.rupees(), self.paise_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
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
    fn test_from_paise() {
        let m = Money::from_paise(1050);
        assert_eq!(m.paise(), 1050);
        assert_eq!(m.rupees(), 10);
        assert_eq!(m.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees() {
        let m = Money::from_rupees(25000);
        assert_eq!(m.paise(), 2_500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1050)), "₹10.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
        assert_eq!(format!("{}", Money::from_paise(-1050)), "-₹10.50");
        assert_eq!(format!("{}", Money::from_paise(5)), "₹0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((-a).paise(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().paise(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().paise(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().paise(), -1050);
        assert_eq!(Money::parse("10").unwrap().paise(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().paise(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().paise(), 5);
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digit_fraction() {
        // Multibyte input after the dot must error, not panic on a byte slice
        assert!(Money::parse("1.₹5").is_err());
        assert!(Money::parse("1.５0").is_err());
        assert!(Money::parse("10.x5").is_err());
        assert!(Money::parse("10.5x").is_err());
        assert!(Money::parse("10.+5").is_err());
    }

    #[test]
    fn test_percent_floor() {
        // 10% of ₹25000 is exactly ₹2500
        let housing = Money::from_rupees(25000);
        assert_eq!(housing.percent_floor(10.0), Money::from_rupees(2500));
    }

    #[test]
    fn test_mul_f64_floor_never_zeroes() {
        // An 80% cap floored always leaves at least one paisa
        for paise in [1, 2, 5, 99, 100] {
            let m = Money::from_paise(paise);
            assert!(m.mul_f64_floor(0.8) < m);
        }
        assert_eq!(Money::from_paise(1).mul_f64_floor(0.8), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_paise(100),
            Money::from_paise(200),
            Money::from_paise(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.paise(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_paise(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
