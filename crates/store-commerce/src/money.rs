//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The content store
//! publishes prices as decimal numbers; [`decimal`] converts at the edge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies. The catalog publishes prices in US dollars only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD => 2,
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use store_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_units() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Add an amount in the same currency, clamping at the numeric bounds.
    ///
    /// The result keeps `self`'s currency; callers keep amounts in one
    /// currency (the catalog publishes a single one).
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Reduce by a percentage in 0..=100, fractions allowed, rounding to the
    /// nearest minor unit. Out-of-range values clamp; NaN takes nothing off.
    pub fn percent_off(&self, percent: f64) -> Money {
        if percent.is_nan() {
            return *self;
        }
        // basis points, 0..=10_000
        let off = (percent.clamp(0.0, 100.0) * 100.0).round() as i128;
        let kept = self.amount_cents as i128 * (10_000 - off);
        let rounded = (kept + 5_000).div_euclid(10_000);
        Money::new(rounded as i64, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Serde adapter for prices published as plain decimal numbers in the
/// catalog currency (USD).
///
/// Use with `#[serde(with = "crate::money::decimal")]`.
pub mod decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("price must be a finite number"));
        }
        Ok(Money::from_decimal(amount, Currency::USD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(1200.5, Currency::USD);
        assert_eq!(m.amount_cents, 120050);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(5, Currency::USD).to_string(), "$0.05");
        assert_eq!(Currency::USD.to_string(), "USD");
    }

    #[test]
    fn test_saturating_arithmetic() {
        let big = Money::new(i64::MAX - 1, Currency::USD);
        assert_eq!(big.saturating_mul(3).amount_cents, i64::MAX);
        assert_eq!(
            big.saturating_add(&Money::new(10, Currency::USD)).amount_cents,
            i64::MAX
        );
        assert_eq!(Money::new(250, Currency::USD).saturating_mul(4).amount_cents, 1000);
    }

    #[test]
    fn test_percent_off() {
        let m = Money::new(10000, Currency::USD);
        assert_eq!(m.percent_off(10.0).amount_cents, 9000);
        assert_eq!(m.percent_off(0.0), m);
        assert!(m.percent_off(100.0).is_zero());
        assert!(m.percent_off(250.0).is_zero());
        assert_eq!(m.percent_off(-5.0), m);
        assert_eq!(m.percent_off(f64::NAN), m);
        // 1999 * 0.85 = 1699.15
        assert_eq!(Money::new(1999, Currency::USD).percent_off(15.0).amount_cents, 1699);
    }

    #[test]
    fn test_fractional_percent_off() {
        // 10000 * 0.875
        assert_eq!(Money::new(10000, Currency::USD).percent_off(12.5).amount_cents, 8750);
        // 1999 * 0.875 = 1749.125
        assert_eq!(Money::new(1999, Currency::USD).percent_off(12.5).amount_cents, 1749);
        // 0.01% of 10000 cents is one cent
        assert_eq!(Money::new(10000, Currency::USD).percent_off(0.01).amount_cents, 9999);
    }

    #[test]
    fn test_decimal_adapter_rejects_non_numbers() {
        #[derive(Deserialize)]
        struct Priced {
            #[serde(with = "super::decimal")]
            price: Money,
        }

        let priced: Priced = serde_json::from_str(r#"{"price": 19.99}"#).unwrap();
        assert_eq!(priced.price.amount_cents, 1999);
        assert!(serde_json::from_str::<Priced>(r#"{"price": "free"}"#).is_err());
    }
}
