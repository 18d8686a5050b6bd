use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, DomainResult, ValueObject};

/// Revision number of a price list, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u32);

impl Version {
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("version must be a positive integer"));
        }
        Ok(Self(value))
    }

    pub fn initial() -> Self {
        Self(1)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl ValueObject for Version {}

impl core::fmt::Display for Version {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_one() {
        assert_eq!(Version::initial().value(), 1);
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            Version::new(0).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// `next` is exactly one greater and always positive.
            #[test]
            fn next_increments_by_one(value in 1u32..1_000_000) {
                let version = Version::new(value).unwrap();
                let next = version.next();
                prop_assert_eq!(next.value(), value + 1);
                prop_assert!(next.value() > 0);
            }
        }
    }
}
