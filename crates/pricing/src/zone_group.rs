use uuid::Uuid;

use ratecard_core::{DomainError, DomainResult, Entity};

/// A named set of countries used to target margin rules.
///
/// Distinct from a price list's `Zone`: the two share no identity and a
/// zone group may cut across zone boundaries.
#[derive(Debug, Clone)]
pub struct ZoneGroup {
    id: String,
    name: String,
    countries: Vec<String>,
    description: String,
}

impl ZoneGroup {
    pub fn new(
        name: impl Into<String>,
        countries: Vec<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_id(Uuid::new_v4().to_string(), name, countries, description)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        countries: Vec<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if countries.is_empty() {
            return Err(DomainError::validation("at least one country is required"));
        }
        let invalid: Vec<&str> = countries
            .iter()
            .filter(|code| !is_iso_country_code(code))
            .map(String::as_str)
            .collect();
        if !invalid.is_empty() {
            return Err(DomainError::validation(format!(
                "invalid country codes: {}",
                invalid.join(", ")
            )));
        }
        Ok(Self {
            id: id.into(),
            name,
            countries,
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive membership test.
    pub fn includes_country(&self, country: &str) -> bool {
        let needle = country.to_uppercase();
        self.countries.iter().any(|code| *code == needle)
    }
}

fn is_iso_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase())
}

impl Entity for ZoneGroup {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for ZoneGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ZoneGroup {}
