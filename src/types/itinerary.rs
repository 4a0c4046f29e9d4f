use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::request::TripDuration;

/// Structured day-by-day plan assembled from generated text.
///
/// This is also the exact schema the tweak flow demands back from the
/// generator, so it derives [`JsonSchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Itinerary {
    /// Trip length echoed from the originating request
    pub duration: TripDuration,
    /// Days ordered by `day_number`, renumbered 1..N after reassignment
    pub days: Vec<Day>,
}

/// One planned day and its activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// 1-based position within the itinerary
    pub day_number: u32,
    pub activities: Vec<Activity>,
    /// Forecast flag for display; derived, never authoritative input
    #[serde(default)]
    pub weather: Weather,
}

/// A single activity line parsed out of the generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub description: String,
    /// Optional scheduling tag carried in the generated text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
}

/// Scheduling tag attached to an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    IndoorBackup,
}

/// Per-day forecast flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Rainy,
    #[default]
    Clear,
}

/// Full success payload of the planning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTrip {
    pub itinerary: Itinerary,
    /// Deduplicated "more suggestions" extracted from the generated text
    pub suggestions: Vec<String>,
}

impl Activity {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            time_of_day: None,
        }
    }

    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }
}
