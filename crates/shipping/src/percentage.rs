use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, DomainResult, ValueObject};

/// A non-negative percentage, stored as its face value (a 10% margin is `10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::validation("percentage cannot be negative"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Marks `amount` up by this percentage: `amount * (1 + value / 100)`.
    pub fn apply_to(&self, amount: Decimal) -> Decimal {
        amount * (Decimal::ONE + self.0 / Decimal::ONE_HUNDRED)
    }
}

impl ValueObject for Percentage {}

impl core::fmt::Display for Percentage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn ten_percent_on_one_hundred_is_one_hundred_ten() {
        let margin = Percentage::new(dec("10")).unwrap();
        assert_eq!(margin.apply_to(dec("100")), dec("110"));
    }

    #[test]
    fn zero_percent_is_identity() {
        let margin = Percentage::new(Decimal::ZERO).unwrap();
        assert_eq!(margin.apply_to(dec("42.42")), dec("42.42"));
    }

    #[test]
    fn rejects_negative_percentage() {
        let err = Percentage::new(dec("-5")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// `apply_to` is exactly `amount * (100 + margin) / 100`.
            #[test]
            fn apply_to_matches_markup_formula(
                margin in 0i64..=1_000,
                amount in 1i64..=1_000_000,
            ) {
                let pct = Percentage::new(Decimal::from(margin)).unwrap();
                let amount = Decimal::from(amount);
                let expected = amount * Decimal::from(100 + margin) / Decimal::ONE_HUNDRED;
                prop_assert_eq!(pct.apply_to(amount), expected);
            }

            /// Marking up never shrinks a positive amount.
            #[test]
            fn apply_to_is_monotone(
                margin in 0i64..=1_000,
                amount in 1i64..=1_000_000,
            ) {
                let pct = Percentage::new(Decimal::from(margin)).unwrap();
                let amount = Decimal::from(amount);
                prop_assert!(pct.apply_to(amount) >= amount);
            }
        }
    }
}
