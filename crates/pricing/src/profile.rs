use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratecard_core::{AggregateRoot, DomainError, DomainResult, Entity, PricingProfileId};
use ratecard_shipping::{Carrier, Percentage};

use crate::margin_rule::MarginRule;
use crate::reference::{MarginRuleSetReference, RuleSetPurpose};

/// Profile lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Draft,
    Active,
    Inactive,
}

/// Input bundle for [`PricingProfile::create`].
///
/// `created_at` is the caller's clock reading; the effective date is
/// validated against it, never against a global clock.
#[derive(Debug, Clone)]
pub struct CreatePricingProfile {
    pub id: PricingProfileId,
    pub name: String,
    pub description: String,
    pub carrier: Carrier,
    pub rule_set_refs: Vec<MarginRuleSetReference>,
    pub status: ProfileStatus,
    pub created_by: String,
    pub effective_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate root: the policy selecting which margin rule sets apply for a
/// carrier over time.
#[derive(Debug, Clone)]
pub struct PricingProfile {
    id: PricingProfileId,
    name: String,
    description: String,
    carrier: Carrier,
    rule_set_refs: Vec<MarginRuleSetReference>,
    status: ProfileStatus,
    created_by: String,
    created_at: DateTime<Utc>,
    effective_date: DateTime<Utc>,
}

impl PricingProfile {
    pub fn create(input: CreatePricingProfile) -> DomainResult<Self> {
        let CreatePricingProfile {
            id,
            name,
            description,
            carrier,
            rule_set_refs,
            status,
            created_by,
            effective_date,
            created_at,
        } = input;

        if name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if created_by.trim().is_empty() {
            return Err(DomainError::validation("created by is required"));
        }
        if rule_set_refs.is_empty() {
            return Err(DomainError::validation(
                "at least one margin rule set reference is required",
            ));
        }
        if effective_date < created_at {
            return Err(DomainError::invariant(
                "effective date cannot be before creation date",
            ));
        }
        Self::validate_priorities(&rule_set_refs)?;
        Self::validate_purposes(&rule_set_refs)?;

        Ok(Self {
            id,
            name,
            description,
            carrier,
            rule_set_refs,
            status,
            created_by,
            created_at,
            effective_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    pub fn rule_set_refs(&self) -> &[MarginRuleSetReference] {
        &self.rule_set_refs
    }

    pub fn status(&self) -> ProfileStatus {
        self.status
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn effective_date(&self) -> DateTime<Utc> {
        self.effective_date
    }

    /// Ranks the profile's references for `date`.
    ///
    /// A reference is applicable once the profile's effective date has
    /// passed; the referenced set's own status and validity window are the
    /// caller's concern after dereferencing. Highest priority wins, earliest
    /// reference first on ties.
    pub fn find_applicable_rule_set(&self, date: DateTime<Utc>) -> Option<&MarginRuleSetReference> {
        if date < self.effective_date {
            return None;
        }
        let mut best: Option<&MarginRuleSetReference> = None;
        for reference in &self.rule_set_refs {
            let wins = best.is_none_or(|current| reference.priority() > current.priority());
            if wins {
                best = Some(reference);
            }
        }
        best
    }

    /// Resolves a margin from an externally dereferenced rule set.
    ///
    /// `margin_rules` is the rule collection the caller loaded for
    /// `_rule_set`; resolution itself only needs the rules. Returns the
    /// highest-priority matching rule's margin, earliest rule first on ties.
    pub fn calculate_margin(
        &self,
        country: &str,
        weight: Decimal,
        _rule_set: &MarginRuleSetReference,
        margin_rules: &[MarginRule],
    ) -> Option<Percentage> {
        let mut best: Option<&MarginRule> = None;
        for rule in margin_rules {
            if !rule.applies_to(country, weight) {
                continue;
            }
            let wins = best.is_none_or(|current| rule.priority() > current.priority());
            if wins {
                best = Some(rule);
            }
        }
        best.map(MarginRule::margin)
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.status == ProfileStatus::Active {
            return Err(DomainError::conflict("profile is already active"));
        }
        self.status = ProfileStatus::Active;
        Ok(())
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        if self.status == ProfileStatus::Inactive {
            return Err(DomainError::conflict("profile is already inactive"));
        }
        self.status = ProfileStatus::Inactive;
        Ok(())
    }

    fn validate_priorities(refs: &[MarginRuleSetReference]) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for reference in refs {
            if !seen.insert(reference.priority()) {
                return Err(DomainError::invariant(
                    "duplicate rule set priorities are not allowed",
                ));
            }
        }
        Ok(())
    }

    fn validate_purposes(refs: &[MarginRuleSetReference]) -> DomainResult<()> {
        let base_count = refs
            .iter()
            .filter(|r| r.purpose() == RuleSetPurpose::Base)
            .count();
        match base_count {
            0 => Err(DomainError::invariant("a base rule set reference is required")),
            1 => Ok(()),
            _ => Err(DomainError::invariant(
                "only one base rule set reference is allowed",
            )),
        }
    }
}

impl Entity for PricingProfile {
    type Id = PricingProfileId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for PricingProfile {}

impl PartialEq for PricingProfile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PricingProfile {}
