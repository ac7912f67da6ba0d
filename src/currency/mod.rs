use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

const MINOR_UNITS_PER_UNIT: u64 = 100;

/// A non-negative monetary amount stored as minor units (cents).
///
/// Input accepts `,` or `.` as the decimal separator and is rounded to the
/// nearest cent on parse; every computation afterwards is integer-exact, so
/// totals never drift.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Builds an amount from a raw number of cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim();
        if text.is_empty() {
            return Err(LedgerError::Parse(input.to_string()));
        }
        let normalized = text.replace(',', ".");
        let value: f64 = normalized
            .parse()
            .map_err(|_| LedgerError::Parse(input.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(LedgerError::Parse(input.to_string()));
        }
        let cents = (value * MINOR_UNITS_PER_UNIT as f64).round() as u64;
        Ok(Self(cents))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_UNIT,
            self.0 % MINOR_UNITS_PER_UNIT
        )
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Amount) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, value| acc + value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_dot_separators_parse_identically() {
        let with_comma: Amount = "12,50".parse().expect("comma amount parses");
        let with_dot: Amount = "12.50".parse().expect("dot amount parses");
        assert_eq!(with_comma, with_dot);
        assert_eq!(with_comma.cents(), 1250);
    }

    #[test]
    fn whole_numbers_gain_two_decimals_on_display() {
        let amount: Amount = "7".parse().expect("integer amount parses");
        assert_eq!(amount.to_string(), "7.00");
    }

    #[test]
    fn zero_displays_as_two_decimals() {
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn rejects_text_that_is_not_a_number() {
        for input in ["abc", "", "  ", "1.2.3", "12,50,00"] {
            let err = input.parse::<Amount>().expect_err("input must be rejected");
            assert!(
                matches!(err, LedgerError::Parse(_)),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = "-1".parse::<Amount>().expect_err("negative must be rejected");
        assert!(matches!(err, LedgerError::Parse(_)));
    }

    #[test]
    fn sums_stay_exact() {
        let amounts: Vec<Amount> = ["10.00", "2,50", "0.05"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total.to_string(), "12.55");
    }
}
