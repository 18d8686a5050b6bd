use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ratecard_core::{AggregateRoot, DomainError, DomainResult, Entity, PriceListId};
use ratecard_shipping::{Carrier, Currency, Money, Percentage, Service, WeightRange};

use crate::rate::Rate;
use crate::version::Version;
use crate::zone::{Zone, ZoneId};

/// Price-list lifecycle. Deactivation is one-way; there is no re-activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceListStatus {
    Active,
    Inactive,
}

/// Input bundle for [`PriceList::create`].
///
/// `created_at` is passed explicitly so callers own the clock.
#[derive(Debug, Clone)]
pub struct CreatePriceList {
    pub id: PriceListId,
    pub carrier: Carrier,
    pub service: Service,
    pub currency: Currency,
    pub version: Version,
    pub effective_date: DateTime<Utc>,
    pub default_margin: Percentage,
    pub created_by: String,
    pub origin_country: String,
    pub zones: Vec<Zone>,
    pub rates: Vec<Rate>,
    pub status: PriceListStatus,
    pub created_at: DateTime<Utc>,
}

/// Aggregate root: a carrier's rate card for one service and currency.
///
/// Every cross-entity invariant is checked inside [`PriceList::create`]; a
/// violation aborts construction, so an invalid price list is never
/// observable.
#[derive(Debug, Clone)]
pub struct PriceList {
    id: PriceListId,
    carrier: Carrier,
    service: Service,
    currency: Currency,
    version: Version,
    effective_date: DateTime<Utc>,
    default_margin: Percentage,
    created_by: String,
    origin_country: String,
    created_at: DateTime<Utc>,
    status: PriceListStatus,
    zones: Vec<Zone>,
    rates: Vec<Rate>,
}

impl PriceList {
    pub fn create(input: CreatePriceList) -> DomainResult<Self> {
        let CreatePriceList {
            id,
            carrier,
            service,
            currency,
            version,
            effective_date,
            default_margin,
            created_by,
            origin_country,
            zones,
            rates,
            status,
            created_at,
        } = input;

        if created_by.trim().is_empty() {
            return Err(DomainError::validation("created by is required"));
        }
        if origin_country.trim().is_empty() {
            return Err(DomainError::validation("origin country is required"));
        }
        if zones.is_empty() {
            return Err(DomainError::validation(
                "price list must have at least one zone",
            ));
        }
        if rates.is_empty() {
            return Err(DomainError::validation(
                "price list must have at least one rate",
            ));
        }

        Self::validate_zone_assignments(&zones)?;
        Self::validate_rate_zones(&zones, &rates)?;
        Self::validate_rate_currencies(&rates, currency)?;
        Self::validate_weight_brackets(&rates)?;

        Ok(Self {
            id,
            carrier,
            service,
            currency,
            version,
            effective_date,
            default_margin,
            created_by,
            origin_country,
            created_at,
            status,
            zones,
            rates,
        })
    }

    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn effective_date(&self) -> DateTime<Utc> {
        self.effective_date
    }

    pub fn default_margin(&self) -> Percentage {
        self.default_margin
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn origin_country(&self) -> &str {
        &self.origin_country
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> PriceListStatus {
        self.status
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    /// Applies the list's default margin to a base rate, yielding the sell
    /// price in the list currency: `amount * (1 + margin / 100)`.
    pub fn calculate_rate_with_default_margin(&self, rate: &Rate) -> DomainResult<Money> {
        let amount = self.default_margin.apply_to(rate.amount().amount());
        Money::new(amount, self.currency)
    }

    /// One-way transition; fails if the list is already inactive.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        if self.status == PriceListStatus::Inactive {
            return Err(DomainError::conflict("price list is already inactive"));
        }
        self.status = PriceListStatus::Inactive;
        Ok(())
    }

    /// Zone ids must be unique and no country may be served by two zones.
    fn validate_zone_assignments(zones: &[Zone]) -> DomainResult<()> {
        let mut zone_ids = HashSet::new();
        let mut assigned = HashSet::new();
        for zone in zones {
            if !zone_ids.insert(zone.zone_id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate zone id: {}",
                    zone.zone_id()
                )));
            }
            for country in zone.destination_countries() {
                if !assigned.insert(country.as_str()) {
                    return Err(DomainError::invariant(format!(
                        "country {country} cannot be assigned to multiple zones"
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_rate_zones(zones: &[Zone], rates: &[Rate]) -> DomainResult<()> {
        let known: HashSet<ZoneId> = zones.iter().map(Zone::zone_id).collect();
        let unknown: Vec<String> = rates
            .iter()
            .map(Rate::zone_id)
            .filter(|id| !known.contains(id))
            .map(|id| id.to_string())
            .collect();
        if !unknown.is_empty() {
            return Err(DomainError::invariant(format!(
                "rates reference unknown zone ids: {}",
                unknown.join(", ")
            )));
        }
        Ok(())
    }

    fn validate_rate_currencies(rates: &[Rate], currency: Currency) -> DomainResult<()> {
        if rates.iter().any(|r| r.amount().currency() != currency) {
            return Err(DomainError::invariant(
                "all rates must use the same currency as the price list",
            ));
        }
        Ok(())
    }

    /// Brackets within one zone must partition the weight axis: sorted by
    /// lower bound, a bracket may start where the previous one ends but not
    /// earlier.
    fn validate_weight_brackets(rates: &[Rate]) -> DomainResult<()> {
        let mut per_zone: HashMap<ZoneId, Vec<WeightRange>> = HashMap::new();
        for rate in rates {
            per_zone.entry(rate.zone_id()).or_default().push(rate.weight_range());
        }
        for (zone_id, mut brackets) in per_zone {
            brackets.sort_by_key(WeightRange::min);
            for pair in brackets.windows(2) {
                if pair[1].min() < pair[0].max() {
                    return Err(DomainError::invariant(format!(
                        "overlapping weight brackets in zone {zone_id}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Entity for PriceList {
    type Id = PriceListId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for PriceList {}

// Identity equality: a deactivated snapshot is still the same price list.
impl PartialEq for PriceList {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PriceList {}
