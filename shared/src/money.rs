//! ==============================================================================
//! money.rs - fixed-point amounts
//! ==============================================================================
//!
//! the backend sends prices and earnings as json floats (sometimes as
//! numeric strings). summing floats and rounding with `{:.2}` turns
//! 10.005 + 5.0 into "15.00", so amounts are held as ten-thousandths
//! and only rounded to cents when displayed.
//!
//! ==============================================================================

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// fractional units per whole currency unit
const SCALE: i64 = 10_000;

/// units per cent
const CENT: i64 = SCALE / 100;

/// monetary amount in ten-thousandths of a currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// build from a float, rounding to the nearest ten-thousandth.
    /// `None` for NaN, infinities and values outside the representable range.
    pub fn from_f64(value: f64) -> Option<Self> {
        let scaled = (value * SCALE as f64).round();
        if scaled.is_finite() && scaled.abs() < i64::MAX as f64 {
            Some(Amount(scaled as i64))
        } else {
            None
        }
    }

    pub fn from_cents(cents: i64) -> Self {
        Amount(cents * CENT)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// round half away from zero to whole cents
    pub fn cents(self) -> i64 {
        if self.0 >= 0 {
            self.0.saturating_add(CENT / 2) / CENT
        } else {
            self.0.saturating_sub(CENT / 2) / CENT
        }
    }
}

/// always two decimals, no currency sign
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// saturates at the representable range
impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

// ==============================================================================
// serde
// ==============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (value, raw) = match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => (Some(n), n.to_string()),
            RawAmount::Text(s) => (s.trim().parse::<f64>().ok(), s),
        };
        value
            .and_then(Amount::from_f64)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {raw:?}")))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

// ==============================================================================
// tests
// ==============================================================================
