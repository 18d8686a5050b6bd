//! Strongly-typed identifiers used across the domain.
//!
//! All aggregate ids are random UUIDv4 values. Parsing is stricter than
//! `Uuid::from_str`: only the canonical hyphenated 8-4-4-4-12 form with
//! version nibble 4 and an RFC 4122 variant nibble is accepted.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

use crate::error::DomainError;

/// Identifier of a price list aggregate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceListId(Uuid);

/// Identifier of a margin rule set aggregate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarginRuleSetId(Uuid);

/// Identifier of a pricing profile aggregate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingProfileId(Uuid);

fn parse_canonical_v4(s: &str, name: &str) -> Result<Uuid, DomainError> {
    // Uuid::try_parse also accepts simple/braced/urn forms; only the
    // 36-char hyphenated rendering is canonical here.
    if s.len() != 36 {
        return Err(DomainError::invalid_id(format!(
            "{name}: expected canonical hyphenated UUID, got {s:?}"
        )));
    }
    let uuid =
        Uuid::try_parse(s).map_err(|e| DomainError::invalid_id(format!("{name}: {e}")))?;
    if uuid.get_version_num() != 4 {
        return Err(DomainError::invalid_id(format!(
            "{name}: expected UUID version 4, got version {}",
            uuid.get_version_num()
        )));
    }
    if uuid.get_variant() != Variant::RFC4122 {
        return Err(DomainError::invalid_id(format!(
            "{name}: expected RFC 4122 variant"
        )));
    }
    Ok(uuid)
}

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new random identifier.
            ///
            /// Prefer passing ids explicitly in tests for determinism.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_canonical_v4(s, $name).map(Self)
            }
        }
    };
}

impl_uuid_newtype!(PriceListId, "PriceListId");
impl_uuid_newtype!(MarginRuleSetId, "MarginRuleSetId");
impl_uuid_newtype!(PricingProfileId, "PricingProfileId");
