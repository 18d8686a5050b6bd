use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, DomainResult, Entity, ValueObject};
use ratecard_shipping::TransitTime;

/// Identifier of a zone within a single price list. Positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(u32);

impl ZoneId {
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("zone id must be a positive integer"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl ValueObject for ZoneId {}

impl core::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A named grouping of destination countries sharing one transit estimate.
///
/// Country codes are kept in the order supplied; duplicates and blank codes
/// are rejected at construction.
#[derive(Debug, Clone)]
pub struct Zone {
    id: ZoneId,
    destination_countries: Vec<String>,
    transit_time: TransitTime,
}

impl Zone {
    pub fn new(
        id: ZoneId,
        destination_countries: Vec<String>,
        transit_time: TransitTime,
    ) -> DomainResult<Self> {
        if destination_countries.is_empty() {
            return Err(DomainError::validation(
                "at least one destination country is required",
            ));
        }
        let mut seen = HashSet::new();
        for country in &destination_countries {
            if country.trim().is_empty() {
                return Err(DomainError::validation("destination country cannot be blank"));
            }
            if !seen.insert(country.as_str()) {
                return Err(DomainError::validation(format!(
                    "duplicate destination country: {country}"
                )));
            }
        }
        Ok(Self {
            id,
            destination_countries,
            transit_time,
        })
    }

    pub fn zone_id(&self) -> ZoneId {
        self.id
    }

    pub fn destination_countries(&self) -> &[String] {
        &self.destination_countries
    }

    pub fn transit_time(&self) -> TransitTime {
        self.transit_time
    }
}

impl Entity for Zone {
    type Id = ZoneId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// Identity equality: two snapshots of the same zone compare equal.
impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Zone {}

#[cfg(test)]
mod tests {
    use super::*;

    fn transit() -> TransitTime {
        TransitTime::new(2, 4).unwrap()
    }

    fn countries(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn constructs_with_ordered_countries() {
        let zone = Zone::new(ZoneId::new(1).unwrap(), countries(&["UK", "IE"]), transit()).unwrap();
        assert_eq!(zone.destination_countries(), ["UK", "IE"]);
        assert_eq!(zone.zone_id().value(), 1);
    }

    #[test]
    fn rejects_empty_country_list() {
        let err = Zone::new(ZoneId::new(1).unwrap(), vec![], transit()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_blank_country() {
        let err =
            Zone::new(ZoneId::new(1).unwrap(), countries(&["UK", "  "]), transit()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_duplicate_country_within_zone() {
        let err =
            Zone::new(ZoneId::new(1).unwrap(), countries(&["DE", "DE"]), transit()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zone_id_rejects_zero() {
        assert!(ZoneId::new(0).is_err());
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Zone::new(ZoneId::new(7).unwrap(), countries(&["FR"]), transit()).unwrap();
        let b = Zone::new(
            ZoneId::new(7).unwrap(),
            countries(&["ES", "PT"]),
            TransitTime::new(1, 9).unwrap(),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
