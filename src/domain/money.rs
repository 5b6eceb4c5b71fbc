use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Non-negative currency amount read from a script, held at cent precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(pub Decimal);

impl Amount {
    pub const DECIMALS: u32 = 2;

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();

        if s.is_empty() {
            return None;
        }
        let value = Decimal::from_str(s).ok()?;
        if value < Decimal::ZERO {
            return None;
        }
        // tie -> bankers (round half to even)
        let rounded =
            value.round_dp_with_strategy(Self::DECIMALS, RoundingStrategy::MidpointNearestEven);
        Some(Self(rounded))
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid amount: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::Amount;

    #[test]
    fn bankers_round_half_even() {
        let v = Amount::from_decimal_str("1.005").unwrap();
        assert_eq!(format!("{}", v), "1.00");
        let v = Amount::from_decimal_str("1.015").unwrap();
        assert_eq!(format!("{}", v), "1.02");
        let v = Amount::from_decimal_str("2.675").unwrap();
        assert_eq!(format!("{}", v), "2.68");
    }

    #[test]
    fn whole_numbers_render_with_cents() {
        let v = Amount::from_decimal_str(" 800 ").unwrap();
        assert_eq!(format!("{}", v), "800.00");
        let v = Amount::from_decimal_str("0").unwrap();
        assert_eq!(format!("{}", v), "0.00");
    }

    #[test]
    fn rejects_negative_and_malformed() {
        assert!(Amount::from_decimal_str("-3").is_none());
        assert!(Amount::from_decimal_str("").is_none());
        assert!(Amount::from_decimal_str("1.2.3").is_none());
        assert!(Amount::from_decimal_str("abc").is_none());
    }
}
