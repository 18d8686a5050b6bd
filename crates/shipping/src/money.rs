use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, DomainResult, ValueObject};

use crate::currency::Currency;

/// An amount of money in a specific currency.
///
/// Amounts are exact decimals, strictly positive: a rate of zero is not a
/// price and negative charges have no meaning in a rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::validation("rate amount must be positive"));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
