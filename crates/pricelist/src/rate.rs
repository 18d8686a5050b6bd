use serde::{Deserialize, Serialize};

use ratecard_core::ValueObject;
use ratecard_shipping::{Money, WeightRange};

use crate::zone::ZoneId;

/// The price for one zone at one weight bracket.
///
/// A plain value record: many rates legitimately share a zone id, so a rate
/// compares by its full payload rather than carrying an identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    zone_id: ZoneId,
    weight_range: WeightRange,
    amount: Money,
}

impl Rate {
    pub fn new(zone_id: ZoneId, weight_range: WeightRange, amount: Money) -> Self {
        Self {
            zone_id,
            weight_range,
            amount,
        }
    }

    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }

    pub fn weight_range(&self) -> WeightRange {
        self.weight_range
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl ValueObject for Rate {}
