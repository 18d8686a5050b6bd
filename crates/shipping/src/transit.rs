use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, DomainResult, ValueObject};

/// Estimated delivery window in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitTime {
    min: u32,
    max: u32,
}

impl TransitTime {
    pub fn new(min: u32, max: u32) -> DomainResult<Self> {
        if max < min {
            return Err(DomainError::validation(
                "maximum transit time must be greater than or equal to minimum transit time",
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl ValueObject for TransitTime {}
