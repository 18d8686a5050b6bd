//! Pricing-profile side of the domain: margin rules and their resolution.
//!
//! A `PricingProfile` ranks references to `MarginRuleSet`s by date and
//! priority; a rule set resolves the single best-matching `MarginRule` for a
//! (country, weight) query. Rule-set storage and retrieval stay outside this
//! crate; profiles hold opaque ids only.

pub mod margin_rule;
pub mod profile;
pub mod reference;
pub mod rule_set;
pub mod zone_group;

pub use margin_rule::MarginRule;
pub use profile::{CreatePricingProfile, PricingProfile, ProfileStatus};
pub use reference::{MarginRuleSetReference, RuleSetPurpose};
pub use rule_set::{CreateMarginRuleSet, MarginRuleSet, RuleSetStatus};
pub use zone_group::ZoneGroup;
