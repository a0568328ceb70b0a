//! Pricing Rule Table - Static reference rates used by the cost calculator.
//!
//! The built-in standard table is the authoritative rate sheet. Deployments
//! may load a differently versioned table from YAML; any code missing from a
//! table falls back to the documented default for that lookup.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::codes::{AddOnService, CateringType, City, VenueType};

/// Version tag of the built-in rate sheet.
pub const STANDARD_RULES_VERSION: &str = "standard-v1";

/// Multiplier used for cities missing from the table.
pub const DEFAULT_CITY_MULTIPLIER: f64 = 1.0;

/// Base rental rate used for venue types missing from the table.
pub const DEFAULT_VENUE_RATE: f64 = 1000.0;

/// Per-attendee rate used for catering styles missing from the table.
pub const DEFAULT_CATERING_RATE: f64 = 0.0;

/// Flat rate used for add-on services missing from the table.
pub const DEFAULT_SERVICE_RATE: f64 = 0.0;

static STANDARD_RULES: Lazy<Arc<PricingRuleTable>> = Lazy::new(|| {
    let cities = [
        (City::NewYork, 1.5),
        (City::LosAngeles, 1.4),
        (City::SanDiego, 1.3),
        (City::Chicago, 1.1),
        (City::Philadelphia, 1.1),
        (City::Houston, 0.9),
        (City::Dallas, 0.9),
        (City::Phoenix, 0.8),
        (City::SanAntonio, 0.8),
        (City::Austin, 1.0),
    ];
    let venues = [
        (VenueType::HotelBallroom, 2000.0),
        (VenueType::ConferenceCenter, 1500.0),
        (VenueType::Restaurant, 1200.0),
        (VenueType::OutdoorVenue, 800.0),
        (VenueType::CommunityCenter, 500.0),
        (VenueType::UniversityHall, 600.0),
        (VenueType::BanquetHall, 1000.0),
        (VenueType::RooftopVenue, 1800.0),
    ];
    let catering = [
        (CateringType::FullService, 85.0),
        (CateringType::Buffet, 45.0),
        (CateringType::Cocktail, 35.0),
        (CateringType::PlatedDinner, 75.0),
        (CateringType::BoxLunch, 25.0),
        (CateringType::CoffeeBreak, 15.0),
        (CateringType::NoCatering, 0.0),
    ];
    let services = [
        (AddOnService::AvEquipment, 800.0),
        (AddOnService::Photography, 1200.0),
        (AddOnService::Music, 600.0),
        (AddOnService::Flowers, 400.0),
        (AddOnService::Security, 300.0),
        (AddOnService::Parking, 200.0),
        (AddOnService::Registration, 150.0),
        (AddOnService::Transportation, 500.0),
    ];

    Arc::new(PricingRuleTable {
        version: STANDARD_RULES_VERSION.to_string(),
        city_multipliers: cities
            .iter()
            .map(|(c, v)| (c.as_str().to_string(), *v))
            .collect(),
        venue_rates: venues
            .iter()
            .map(|(c, v)| (c.as_str().to_string(), *v))
            .collect(),
        catering_rates: catering
            .iter()
            .map(|(c, v)| (c.as_str().to_string(), *v))
            .collect(),
        service_rates: services
            .iter()
            .map(|(c, v)| (c.as_str().to_string(), *v))
            .collect(),
    })
});

/// Errors raised while loading or checking a custom rule table.
#[derive(Debug, Error)]
pub enum RuleTableError {
    #[error("Failed to read rule table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rule table: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Rule table version cannot be empty")]
    EmptyVersion,

    #[error("Rate for '{code}' in {table} must be a finite, non-negative number, got {value}")]
    InvalidRate {
        table: &'static str,
        code: String,
        value: f64,
    },
}

/// Lookup tables keyed by kebab-case code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRuleTable {
    pub version: String,
    #[serde(default)]
    pub city_multipliers: BTreeMap<String, f64>,
    #[serde(default)]
    pub venue_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub catering_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub service_rates: BTreeMap<String, f64>,
}

impl PricingRuleTable {
    /// Returns the shared built-in rate sheet.
    pub fn standard() -> Arc<PricingRuleTable> {
        Arc::clone(&*STANDARD_RULES)
    }

    /// Parses and checks a rule table from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleTableError> {
        let table: PricingRuleTable = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// Reads, parses and checks a rule table from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RuleTableError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| RuleTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_yaml_str(&yaml)?;
        tracing::info!(version = %table.version, path = %path.display(), "Loaded pricing rule table");
        Ok(table)
    }

    /// Checks that the version is set and every rate is usable.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        if self.version.trim().is_empty() {
            return Err(RuleTableError::EmptyVersion);
        }

        let tables: [(&'static str, &BTreeMap<String, f64>); 4] = [
            ("city multipliers", &self.city_multipliers),
            ("venue rates", &self.venue_rates),
            ("catering rates", &self.catering_rates),
            ("service rates", &self.service_rates),
        ];
        for (table, rates) in tables {
            if let Some((code, value)) = rates
                .iter()
                .find(|(_, v)| !v.is_finite() || **v < 0.0)
            {
                return Err(RuleTableError::InvalidRate {
                    table,
                    code: code.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }

    /// Regional multiplier for a city; unknown cities get 1.0.
    pub fn city_multiplier(&self, city: &City) -> f64 {
        lookup(&self.city_multipliers, city.as_str(), DEFAULT_CITY_MULTIPLIER)
    }

    /// Base rental rate for a venue type; unknown venues get 1000.
    pub fn venue_rate(&self, venue: &VenueType) -> f64 {
        lookup(&self.venue_rates, venue.as_str(), DEFAULT_VENUE_RATE)
    }

    /// Per-attendee rate for a catering style; unknown styles get 0.
    pub fn catering_rate(&self, catering: &CateringType) -> f64 {
        lookup(&self.catering_rates, catering.as_str(), DEFAULT_CATERING_RATE)
    }

    /// Flat rate for an add-on service; unknown services get 0.
    pub fn service_rate(&self, service: &AddOnService) -> f64 {
        lookup(&self.service_rates, service.as_str(), DEFAULT_SERVICE_RATE)
    }
}

impl Default for PricingRuleTable {
    fn default() -> Self {
        (**STANDARD_RULES).clone()
    }
}

fn lookup(rates: &BTreeMap<String, f64>, code: &str, fallback: f64) -> f64 {
    match rates.get(code) {
        Some(rate) => *rate,
        None => {
            tracing::debug!(code, fallback, "No rate for code, using fallback");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn standard_city_multipliers() {
        let rules = PricingRuleTable::standard();
        assert_eq!(rules.city_multiplier(&City::NewYork), 1.5);
        assert_eq!(rules.city_multiplier(&City::LosAngeles), 1.4);
        assert_eq!(rules.city_multiplier(&City::SanDiego), 1.3);
        assert_eq!(rules.city_multiplier(&City::Chicago), 1.1);
        assert_eq!(rules.city_multiplier(&City::Philadelphia), 1.1);
        assert_eq!(rules.city_multiplier(&City::Houston), 0.9);
        assert_eq!(rules.city_multiplier(&City::Dallas), 0.9);
        assert_eq!(rules.city_multiplier(&City::Phoenix), 0.8);
        assert_eq!(rules.city_multiplier(&City::SanAntonio), 0.8);
        assert_eq!(rules.city_multiplier(&City::Austin), 1.0);
    }

    #[test]
    fn standard_venue_rates() {
        let rules = PricingRuleTable::standard();
        assert_eq!(rules.venue_rate(&VenueType::HotelBallroom), 2000.0);
        assert_eq!(rules.venue_rate(&VenueType::ConferenceCenter), 1500.0);
        assert_eq!(rules.venue_rate(&VenueType::Restaurant), 1200.0);
        assert_eq!(rules.venue_rate(&VenueType::OutdoorVenue), 800.0);
        assert_eq!(rules.venue_rate(&VenueType::CommunityCenter), 500.0);
        assert_eq!(rules.venue_rate(&VenueType::UniversityHall), 600.0);
        assert_eq!(rules.venue_rate(&VenueType::BanquetHall), 1000.0);
        assert_eq!(rules.venue_rate(&VenueType::RooftopVenue), 1800.0);
    }

    #[test]
    fn standard_catering_and_service_rates() {
        let rules = PricingRuleTable::standard();
        assert_eq!(rules.catering_rate(&CateringType::FullService), 85.0);
        assert_eq!(rules.catering_rate(&CateringType::CoffeeBreak), 15.0);
        assert_eq!(rules.catering_rate(&CateringType::NoCatering), 0.0);
        assert_eq!(rules.service_rate(&AddOnService::Photography), 1200.0);
        assert_eq!(rules.service_rate(&AddOnService::Registration), 150.0);
    }

    #[test]
    fn every_known_code_has_a_standard_rate() {
        let rules = PricingRuleTable::standard();
        assert!(City::ALL.iter().all(|c| rules.city_multipliers.contains_key(c.as_str())));
        assert!(VenueType::ALL.iter().all(|v| rules.venue_rates.contains_key(v.as_str())));
        assert!(CateringType::ALL
            .iter()
            .all(|c| rules.catering_rates.contains_key(c.as_str())));
        assert!(AddOnService::ALL
            .iter()
            .all(|s| rules.service_rates.contains_key(s.as_str())));
    }

    #[test]
    fn unknown_codes_use_fallbacks() {
        let rules = PricingRuleTable::standard();
        assert_eq!(rules.city_multiplier(&City::from("toronto")), 1.0);
        assert_eq!(rules.venue_rate(&VenueType::from("castle")), 1000.0);
        assert_eq!(rules.catering_rate(&CateringType::from("bbq")), 0.0);
        assert_eq!(rules.service_rate(&AddOnService::from("fireworks")), 0.0);
    }

    #[test]
    fn yaml_table_loads_and_falls_back_for_missing_sections() {
        let yaml = r#"
version: "regional-2025"
cityMultipliers:
  austin: 1.2
venueRates:
  restaurant: 900
"#;
        let rules = PricingRuleTable::from_yaml_str(yaml).unwrap();
        assert_eq!(rules.version, "regional-2025");
        assert_eq!(rules.city_multiplier(&City::Austin), 1.2);
        assert_eq!(rules.city_multiplier(&City::NewYork), 1.0);
        assert_eq!(rules.venue_rate(&VenueType::Restaurant), 900.0);
        assert_eq!(rules.catering_rate(&CateringType::Buffet), 0.0);
    }

    #[test]
    fn yaml_table_rejects_negative_rate() {
        let yaml = "version: bad\nserviceRates:\n  music: -5\n";
        let result = PricingRuleTable::from_yaml_str(yaml);
        assert!(matches!(
            result,
            Err(RuleTableError::InvalidRate { table: "service rates", .. })
        ));
    }

    #[test]
    fn yaml_table_rejects_empty_version() {
        let result = PricingRuleTable::from_yaml_str("version: \"  \"\n");
        assert!(matches!(result, Err(RuleTableError::EmptyVersion)));
    }

    #[test]
    fn yaml_table_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "version: file-v2\ncateringRates:\n  buffet: 50").unwrap();

        let rules = PricingRuleTable::from_yaml_file(file.path()).unwrap();
        assert_eq!(rules.version, "file-v2");
        assert_eq!(rules.catering_rate(&CateringType::Buffet), 50.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PricingRuleTable::from_yaml_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(RuleTableError::Io { .. })));
    }

    #[test]
    fn standard_table_roundtrips_through_yaml() {
        let yaml = serde_yaml::to_string(PricingRuleTable::standard().as_ref()).unwrap();
        let parsed = PricingRuleTable::from_yaml_str(&yaml).unwrap();
        assert_eq!(&parsed, PricingRuleTable::standard().as_ref());
    }
}
