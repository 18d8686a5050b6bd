use rust_decimal::Decimal;
use uuid::Uuid;

use ratecard_core::Entity;
use ratecard_shipping::{Percentage, WeightRange};

use crate::zone_group::ZoneGroup;

/// A margin percentage conditioned on a zone group and a weight bracket.
///
/// Precedence between rules is the author's explicit `priority` number; the
/// engine never infers "more specific wins".
#[derive(Debug, Clone)]
pub struct MarginRule {
    id: String,
    zone_group: ZoneGroup,
    margin: Percentage,
    weight_range: WeightRange,
    priority: u32,
}

impl MarginRule {
    pub fn new(
        zone_group: ZoneGroup,
        margin: Percentage,
        weight_range: WeightRange,
        priority: u32,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            zone_group,
            margin,
            weight_range,
            priority,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        zone_group: ZoneGroup,
        margin: Percentage,
        weight_range: WeightRange,
        priority: u32,
    ) -> Self {
        Self {
            id: id.into(),
            zone_group,
            margin,
            weight_range,
            priority,
        }
    }

    pub fn zone_group(&self) -> &ZoneGroup {
        &self.zone_group
    }

    pub fn margin(&self) -> Percentage {
        self.margin
    }

    pub fn weight_range(&self) -> WeightRange {
        self.weight_range
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// True when the group contains `country` and `weight` lies within the
    /// bracket, inclusive at both ends.
    pub fn applies_to(&self, country: &str, weight: Decimal) -> bool {
        self.zone_group.includes_country(country) && self.weight_range.contains(weight)
    }
}

impl Entity for MarginRule {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for MarginRule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MarginRule {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn dach_rule(priority: u32) -> MarginRule {
        let group = ZoneGroup::new(
            "DACH",
            vec!["DE".to_string(), "AT".to_string()],
            "",
        )
        .unwrap();
        MarginRule::new(
            group,
            Percentage::new(dec("5")).unwrap(),
            WeightRange::new(dec("0"), dec("5")).unwrap(),
            priority,
        )
    }

    #[test]
    fn applies_when_country_and_weight_match() {
        let rule = dach_rule(1);
        assert!(rule.applies_to("DE", dec("3")));
        assert!(rule.applies_to("at", dec("0")));
        assert!(rule.applies_to("DE", dec("5")));
    }

    #[test]
    fn does_not_apply_outside_group_or_bracket() {
        let rule = dach_rule(1);
        assert!(!rule.applies_to("FR", dec("3")));
        assert!(!rule.applies_to("DE", dec("5.5")));
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = dach_rule(1);
        let b = dach_rule(99);
        assert_ne!(a, b);

        let group = a.zone_group().clone();
        let clone = MarginRule::with_id(
            a.id().clone(),
            group,
            Percentage::new(dec("50")).unwrap(),
            WeightRange::new(dec("0"), dec("1")).unwrap(),
            7,
        );
        assert_eq!(a, clone);
    }
}
