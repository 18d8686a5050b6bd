use serde::{Deserialize, Serialize};

use ratecard_core::{MarginRuleSetId, ValueObject};

/// Why a rule set participates in a profile.
///
/// Exactly one reference per profile carries `Base`: the default/fallback
/// tier. Other purposes layer on top via priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetPurpose {
    Base,
    Promotional,
    Seasonal,
}

/// A profile's pointer to a margin rule set.
///
/// The profile never dereferences the id; loading the rule set itself is
/// repository territory, outside the domain core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginRuleSetReference {
    margin_rule_set_id: MarginRuleSetId,
    priority: u32,
    purpose: RuleSetPurpose,
}

impl MarginRuleSetReference {
    pub fn new(margin_rule_set_id: MarginRuleSetId, priority: u32, purpose: RuleSetPurpose) -> Self {
        Self {
            margin_rule_set_id,
            priority,
            purpose,
        }
    }

    pub fn margin_rule_set_id(&self) -> MarginRuleSetId {
        self.margin_rule_set_id
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn purpose(&self) -> RuleSetPurpose {
        self.purpose
    }
}

impl ValueObject for MarginRuleSetReference {}
