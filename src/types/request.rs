use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Trip parameters collected from the caller before any planning happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Destination city or region (e.g., "Udaipur")
    pub location: String,
    /// Number of travelers the plan is designed for
    pub number_of_people: u32,
    /// Trip length, in hours or days
    pub duration: TripDuration,
    /// Ordered activity preferences (e.g., "cultural", "outdoor")
    pub preferences: Vec<String>,
    /// How aggressively rainy forecasts suppress outdoor placement
    #[serde(default)]
    pub rain_tolerance: RainTolerance,
    /// Persona used when prompting the generator
    #[serde(default)]
    pub traveler_type: TravelerType,
}

/// Trip length with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TripDuration {
    pub unit: DurationUnit,
    pub value: f64,
}

/// Unit for [`TripDuration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Hours,
    Days,
}

/// User-selected policy for rainy-day handling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainTolerance {
    /// Rainy days must be fully indoor
    #[default]
    Strict,
    /// Rainy days may carry at most one outdoor activity plus an indoor backup
    Flexible,
    /// Forecasts do not influence the plan
    Ignore,
}

/// Fixed persona set used for prompt construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelerType {
    #[default]
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

impl TripRequest {
    /// Check the request before any external call is made.
    pub fn validate(&self) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(PlannerError::Validation(
                "location must not be empty".to_string(),
            ));
        }
        if self.number_of_people == 0 {
            return Err(PlannerError::Validation(
                "numberOfPeople must be at least 1".to_string(),
            ));
        }
        if self.preferences.iter().all(|p| p.trim().is_empty()) {
            return Err(PlannerError::Validation(
                "at least one preference is required".to_string(),
            ));
        }
        if self.duration.value <= 0.0 {
            return Err(PlannerError::Validation(
                "duration value must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of calendar days the plan should cover.
    ///
    /// Hour-scoped trips plan a single day.
    pub fn requested_days(&self) -> usize {
        match self.duration.unit {
            DurationUnit::Days => (self.duration.value.ceil() as usize).max(1),
            DurationUnit::Hours => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            location: "Udaipur".to_string(),
            number_of_people: 4,
            duration: TripDuration {
                unit: DurationUnit::Days,
                value: 3.0,
            },
            preferences: vec!["cultural".to_string()],
            rain_tolerance: RainTolerance::default(),
            traveler_type: TravelerType::default(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_location() {
        let mut req = request();
        req.location = "   ".to_string();
        let err = req.validate().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_rejects_empty_preferences() {
        let mut req = request();
        req.preferences = vec![String::new()];
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_nonpositive_duration() {
        let mut req = request();
        req.duration.value = 0.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_requested_days() {
        let mut req = request();
        assert_eq!(req.requested_days(), 3);
        req.duration.value = 2.5;
        assert_eq!(req.requested_days(), 3);
        req.duration = TripDuration {
            unit: DurationUnit::Hours,
            value: 6.0,
        };
        assert_eq!(req.requested_days(), 1);
    }

    #[test]
    fn test_defaults_from_json() {
        let req: TripRequest = serde_json::from_str(
            r#"{
                "location": "Jaipur",
                "numberOfPeople": 2,
                "duration": {"unit": "days", "value": 2},
                "preferences": ["historic"]
            }"#,
        )
        .unwrap();
        assert_eq!(req.rain_tolerance, RainTolerance::Strict);
        assert_eq!(req.traveler_type, TravelerType::Solo);
    }
}
