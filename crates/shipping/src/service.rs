use core::str::FromStr;
use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, ValueObject};

/// A carrier's shipping service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Express,
    EcoExpress,
    UnregisteredPackage,
    RegisteredSmallPackage,
    RegisteredPackageSurface,
    RegisteredPackageAir,
    AmazonSeaway,
    Expedited,
    UpsStandart,
    AbdEcoEtgb,
    IntEco,
    Uspm,
    Exps,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Express => "express",
            Service::EcoExpress => "ecoexpress",
            Service::UnregisteredPackage => "unregisteredpackage",
            Service::RegisteredSmallPackage => "registeredsmallpackage",
            Service::RegisteredPackageSurface => "registeredpackagesurface",
            Service::RegisteredPackageAir => "registeredpackageair",
            Service::AmazonSeaway => "amazonseaway",
            Service::Expedited => "expedited",
            Service::UpsStandart => "upsstandart",
            Service::AbdEcoEtgb => "abdecoetgb",
            Service::IntEco => "inteco",
            Service::Uspm => "uspm",
            Service::Exps => "exps",
        }
    }
}

impl ValueObject for Service {}

impl core::fmt::Display for Service {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "express" => Ok(Service::Express),
            "ecoexpress" => Ok(Service::EcoExpress),
            "unregisteredpackage" => Ok(Service::UnregisteredPackage),
            "registeredsmallpackage" => Ok(Service::RegisteredSmallPackage),
            "registeredpackagesurface" => Ok(Service::RegisteredPackageSurface),
            "registeredpackageair" => Ok(Service::RegisteredPackageAir),
            "amazonseaway" => Ok(Service::AmazonSeaway),
            "expedited" => Ok(Service::Expedited),
            "upsstandart" => Ok(Service::UpsStandart),
            "abdecoetgb" => Ok(Service::AbdEcoEtgb),
            "inteco" => Ok(Service::IntEco),
            "uspm" => Ok(Service::Uspm),
            "exps" => Ok(Service::Exps),
            other => Err(DomainError::validation(format!(
                "invalid service type: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_services() {
        assert_eq!("Express".parse::<Service>().unwrap(), Service::Express);
        assert_eq!("ECOEXPRESS".parse::<Service>().unwrap(), Service::EcoExpress);
    }

    #[test]
    fn rejects_unknown_service() {
        assert!(matches!(
            "teleport".parse::<Service>().unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
