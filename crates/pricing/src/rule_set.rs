use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratecard_core::{AggregateRoot, DomainError, DomainResult, Entity, MarginRuleSetId};
use ratecard_shipping::DateRange;

use crate::margin_rule::MarginRule;

/// Rule-set lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetStatus {
    Draft,
    Active,
    Inactive,
}

/// Input bundle for [`MarginRuleSet::create`].
#[derive(Debug, Clone)]
pub struct CreateMarginRuleSet {
    pub id: MarginRuleSetId,
    pub name: String,
    pub description: String,
    pub margin_rules: Vec<MarginRule>,
    pub validity_period: Option<DateRange>,
    pub status: RuleSetStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate root: a named, time-bounded collection of margin rules.
#[derive(Debug, Clone)]
pub struct MarginRuleSet {
    id: MarginRuleSetId,
    name: String,
    description: String,
    margin_rules: Vec<MarginRule>,
    validity_period: Option<DateRange>,
    status: RuleSetStatus,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl MarginRuleSet {
    pub fn create(input: CreateMarginRuleSet) -> DomainResult<Self> {
        let CreateMarginRuleSet {
            id,
            name,
            description,
            margin_rules,
            validity_period,
            status,
            created_by,
            created_at,
        } = input;

        if name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if created_by.trim().is_empty() {
            return Err(DomainError::validation("created by is required"));
        }
        if margin_rules.is_empty() {
            return Err(DomainError::validation("at least one margin rule is required"));
        }

        Ok(Self {
            id,
            name,
            description,
            margin_rules,
            validity_period,
            status,
            created_by,
            created_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn margin_rules(&self) -> &[MarginRule] {
        &self.margin_rules
    }

    pub fn validity_period(&self) -> Option<DateRange> {
        self.validity_period
    }

    pub fn status(&self) -> RuleSetStatus {
        self.status
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.status == RuleSetStatus::Active {
            return Err(DomainError::conflict("rule set is already active"));
        }
        self.status = RuleSetStatus::Active;
        Ok(())
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        if self.status == RuleSetStatus::Inactive {
            return Err(DomainError::conflict("rule set is already inactive"));
        }
        self.status = RuleSetStatus::Inactive;
        Ok(())
    }

    /// Active status plus, when a validity window exists, containment of
    /// `date` in the window.
    pub fn is_active(&self, date: DateTime<Utc>) -> bool {
        if self.status != RuleSetStatus::Active {
            return false;
        }
        self.validity_period.is_none_or(|window| window.is_active(date))
    }

    /// Resolves the best-matching rule for a (country, weight) query.
    ///
    /// Highest priority wins among matching rules; on a tie the earliest
    /// rule in list order stays.
    pub fn find_applicable_rule(&self, country: &str, weight: Decimal) -> Option<&MarginRule> {
        let mut best: Option<&MarginRule> = None;
        for rule in &self.margin_rules {
            if !rule.applies_to(country, weight) {
                continue;
            }
            let wins = best.is_none_or(|current| rule.priority() > current.priority());
            if wins {
                best = Some(rule);
            }
        }
        best
    }
}

impl Entity for MarginRuleSet {
    type Id = MarginRuleSetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for MarginRuleSet {}

impl PartialEq for MarginRuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MarginRuleSet {}
