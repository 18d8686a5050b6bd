use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, DomainResult, ValueObject};

/// A weight bracket in kilograms. Containment is inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRange {
    min: Decimal,
    max: Decimal,
}

impl WeightRange {
    pub fn new(min: Decimal, max: Decimal) -> DomainResult<Self> {
        if min < Decimal::ZERO {
            return Err(DomainError::validation("minimum weight must be non-negative"));
        }
        if max <= min {
            return Err(DomainError::validation(
                "maximum weight must be greater than minimum weight",
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    pub fn contains(&self, weight: Decimal) -> bool {
        weight >= self.min && weight <= self.max
    }
}

impl ValueObject for WeightRange {}
