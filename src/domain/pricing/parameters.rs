//! Event parameters - the immutable input to a cost calculation.

use serde::{Deserialize, Serialize};

use super::codes::{AddOnService, CateringType, City, VenueType};
use crate::domain::foundation::ValidationError;

/// Setup hours assumed when none are given.
pub const DEFAULT_SETUP_HOURS: f64 = 2.0;

/// Cleanup hours assumed when none are given.
pub const DEFAULT_CLEANUP_HOURS: f64 = 1.0;

/// Event length assumed when none is given.
pub const DEFAULT_DURATION_HOURS: f64 = 4.0;

/// Longest duration, setup or cleanup accepted: one year.
pub const MAX_EVENT_HOURS: f64 = 8760.0;

/// Everything a planner enters about an event.
///
/// Only `city`, `event_type` and `venue_type` are required for pricing; an
/// empty string counts as missing. `event_type` and `special_requirements`
/// are informational and never change a rate, with one exception: the permit
/// fee keys off `event_type` (see the calculator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParameters {
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default)]
    pub audience_size: u32,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub venue_type: Option<VenueType>,
    #[serde(default)]
    pub catering_type: Option<CateringType>,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_setup_time")]
    pub setup_time: f64,
    #[serde(default = "default_cleanup_time")]
    pub cleanup_time: f64,
    #[serde(default)]
    pub additional_services: Vec<AddOnService>,
    #[serde(default)]
    pub special_requirements: String,
}

impl EventParameters {
    /// Creates parameters with the three required fields set.
    pub fn new(
        city: impl Into<City>,
        event_type: impl Into<String>,
        venue_type: impl Into<VenueType>,
    ) -> Self {
        Self {
            city: Some(city.into()),
            event_type: Some(event_type.into()),
            venue_type: Some(venue_type.into()),
            ..Self::default()
        }
    }

    pub fn with_audience_size(mut self, audience_size: u32) -> Self {
        self.audience_size = audience_size;
        self
    }

    pub fn with_catering(mut self, catering_type: impl Into<CateringType>) -> Self {
        self.catering_type = Some(catering_type.into());
        self
    }

    pub fn with_duration(mut self, hours: f64) -> Self {
        self.duration = hours;
        self
    }

    pub fn with_setup_time(mut self, hours: f64) -> Self {
        self.setup_time = hours;
        self
    }

    pub fn with_cleanup_time(mut self, hours: f64) -> Self {
        self.cleanup_time = hours;
        self
    }

    /// Adds an add-on service; repeats are ignored.
    pub fn with_service(mut self, service: impl Into<AddOnService>) -> Self {
        let service = service.into();
        if !self.additional_services.contains(&service) {
            self.additional_services.push(service);
        }
        self
    }

    pub fn with_special_requirements(mut self, text: impl Into<String>) -> Self {
        self.special_requirements = text.into();
        self
    }

    /// Returns true when city, event type and venue type are all present.
    pub fn is_complete(&self) -> bool {
        present(self.city.as_ref().map(City::as_str))
            && present(self.event_type.as_deref())
            && present(self.venue_type.as_ref().map(VenueType::as_str))
    }

    /// Add-on services in entry order with repeats removed.
    pub fn unique_services(&self) -> Vec<&AddOnService> {
        let mut seen: Vec<&AddOnService> = Vec::with_capacity(self.additional_services.len());
        for service in &self.additional_services {
            if !seen.contains(&service) {
                seen.push(service);
            }
        }
        seen
    }

    /// Checks the numeric fields a form could get wrong.
    ///
    /// Hours must be finite, not negative and at most [`MAX_EVENT_HOURS`]. An audience of zero is allowed;
    /// per-guest figures guard against it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_hours("duration", self.duration)?;
        check_hours("setupTime", self.setup_time)?;
        check_hours("cleanupTime", self.cleanup_time)?;
        Ok(())
    }
}

impl Default for EventParameters {
    fn default() -> Self {
        Self {
            city: None,
            audience_size: 0,
            event_type: None,
            venue_type: None,
            catering_type: None,
            duration: DEFAULT_DURATION_HOURS,
            setup_time: DEFAULT_SETUP_HOURS,
            cleanup_time: DEFAULT_CLEANUP_HOURS,
            additional_services: Vec::new(),
            special_requirements: String::new(),
        }
    }
}

fn present(value: Option<&str>) -> bool {
    value.map(|v| !v.is_empty()).unwrap_or(false)
}

fn check_hours(field: &str, hours: f64) -> Result<(), ValidationError> {
    if !hours.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if hours < 0.0 {
        return Err(ValidationError::negative(field, hours));
    }
    if hours > MAX_EVENT_HOURS {
        return Err(ValidationError::too_large(field, MAX_EVENT_HOURS, hours));
    }
    Ok(())
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_HOURS
}

fn default_setup_time() -> f64 {
    DEFAULT_SETUP_HOURS
}

fn default_cleanup_time() -> f64 {
    DEFAULT_CLEANUP_HOURS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_defaults() {
        let params = EventParameters::default();
        assert_eq!(params.setup_time, 2.0);
        assert_eq!(params.cleanup_time, 1.0);
        assert_eq!(params.duration, 4.0);
        assert!(params.additional_services.is_empty());
        assert!(!params.is_complete());
    }

    #[test]
    fn new_sets_required_fields() {
        let params = EventParameters::new("austin", "corporate", "restaurant");
        assert_eq!(params.city, Some(City::Austin));
        assert_eq!(params.event_type.as_deref(), Some("corporate"));
        assert_eq!(params.venue_type, Some(VenueType::Restaurant));
        assert!(params.is_complete());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let mut params = EventParameters::new("austin", "", "restaurant");
        assert!(!params.is_complete());

        params.event_type = Some("wedding".to_string());
        params.city = Some(City::from(""));
        assert!(!params.is_complete());
    }

    #[test]
    fn with_service_ignores_repeats() {
        let params = EventParameters::default()
            .with_service("music")
            .with_service("parking")
            .with_service("music");
        assert_eq!(
            params.additional_services,
            vec![AddOnService::Music, AddOnService::Parking]
        );
    }

    #[test]
    fn unique_services_keeps_first_occurrence() {
        let mut params = EventParameters::default();
        params.additional_services = vec![
            AddOnService::Flowers,
            AddOnService::Security,
            AddOnService::Flowers,
        ];
        let unique = params.unique_services();
        assert_eq!(unique, vec![&AddOnService::Flowers, &AddOnService::Security]);
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "city": "chicago",
            "audienceSize": 120,
            "eventType": "conference",
            "venueType": "hotel-ballroom",
            "cateringType": "plated-dinner",
            "duration": 6,
            "additionalServices": ["photography", "av-equipment"]
        }"#;
        let params: EventParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.city, Some(City::Chicago));
        assert_eq!(params.audience_size, 120);
        assert_eq!(params.duration, 6.0);
        assert_eq!(params.setup_time, 2.0);
        assert_eq!(params.cleanup_time, 1.0);
        assert_eq!(params.additional_services.len(), 2);
        assert!(params.special_requirements.is_empty());
    }

    #[test]
    fn validate_rejects_negative_hours() {
        let params = EventParameters::new("austin", "party", "restaurant").with_setup_time(-1.0);
        assert_eq!(
            params.validate(),
            Err(ValidationError::negative("setupTime", -1.0))
        );
    }

    #[test]
    fn validate_rejects_non_finite_duration() {
        let params = EventParameters::new("austin", "party", "restaurant").with_duration(f64::NAN);
        assert_eq!(params.validate(), Err(ValidationError::not_finite("duration")));
    }

    #[test]
    fn validate_rejects_hours_beyond_a_year() {
        let params =
            EventParameters::new("austin", "corporate", "conference-center").with_duration(1e30);
        assert_eq!(
            params.validate(),
            Err(ValidationError::too_large("duration", MAX_EVENT_HOURS, 1e30))
        );

        let params = EventParameters::new("austin", "corporate", "restaurant")
            .with_cleanup_time(MAX_EVENT_HOURS + 1.0);
        assert_eq!(
            params.validate().map_err(|e| e.field().to_string()),
            Err("cleanupTime".to_string())
        );
    }

    #[test]
    fn validate_accepts_a_full_year() {
        let params = EventParameters::new("austin", "corporate", "restaurant")
            .with_duration(MAX_EVENT_HOURS);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_accepts_zero_hours() {
        let params = EventParameters::new("austin", "party", "restaurant")
            .with_setup_time(0.0)
            .with_cleanup_time(0.0);
        assert!(params.validate().is_ok());
    }
}
