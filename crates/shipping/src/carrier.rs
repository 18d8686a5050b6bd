use core::str::FromStr;
use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, ValueObject};

/// A shipping company operating one or more services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    Ups,
    Tnt,
    QuickShipper,
    YouParcel,
    Fedex,
    Ptt,
    Turpex,
    Dhl,
    Pts,
    ShipStationForUsps,
    Exelot,
    Aramex,
    Asendia,
    Widect,
}

impl Carrier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Carrier::Ups => "ups",
            Carrier::Tnt => "tnt",
            Carrier::QuickShipper => "quickshipper",
            Carrier::YouParcel => "youparcel",
            Carrier::Fedex => "fedex",
            Carrier::Ptt => "ptt",
            Carrier::Turpex => "turpex",
            Carrier::Dhl => "dhl",
            Carrier::Pts => "pts",
            Carrier::ShipStationForUsps => "shipstationforusps",
            Carrier::Exelot => "exelot",
            Carrier::Aramex => "aramex",
            Carrier::Asendia => "asendia",
            Carrier::Widect => "widect",
        }
    }
}

impl ValueObject for Carrier {}

impl core::fmt::Display for Carrier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Carrier {
    type Err = DomainError;

    /// Case-insensitive; unknown names are format errors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ups" => Ok(Carrier::Ups),
            "tnt" => Ok(Carrier::Tnt),
            "quickshipper" => Ok(Carrier::QuickShipper),
            "youparcel" => Ok(Carrier::YouParcel),
            "fedex" => Ok(Carrier::Fedex),
            "ptt" => Ok(Carrier::Ptt),
            "turpex" => Ok(Carrier::Turpex),
            "dhl" => Ok(Carrier::Dhl),
            "pts" => Ok(Carrier::Pts),
            "shipstationforusps" => Ok(Carrier::ShipStationForUsps),
            "exelot" => Ok(Carrier::Exelot),
            "aramex" => Ok(Carrier::Aramex),
            "asendia" => Ok(Carrier::Asendia),
            "widect" => Ok(Carrier::Widect),
            other => Err(DomainError::validation(format!(
                "invalid carrier name: {other}"
            ))),
        }
    }
}
