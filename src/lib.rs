//! trip-planner-rs: a weather-aware, LLM-backed travel itinerary planner
//!
//! This library turns trip parameters into a structured day-by-day
//! itinerary: it prompts a text-generation collaborator, parses the
//! semi-structured reply into typed days and activities, classifies
//! activities as indoor or outdoor, and reorders days so that rainy
//! forecast days receive itineraries compatible with the traveler's
//! rain tolerance.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{Planner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = Planner::from_env()?;
//!
//!     let request: TripRequest = serde_json::from_str(
//!         r#"{
//!             "location": "Udaipur",
//!             "numberOfPeople": 4,
//!             "duration": {"unit": "days", "value": 3},
//!             "preferences": ["cultural", "relaxed"],
//!             "rainTolerance": "flexible"
//!         }"#,
//!     )?;
//!
//!     let planned = planner.plan(&request).await?;
//!     for day in &planned.itinerary.days {
//!         println!("Day {}: {} activities", day.day_number, day.activities.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod schemas;
pub(crate) mod services;
pub mod types;

pub use crate::core::{
    extract_suggestions, parse_itinerary_text, rainy_dates, rainy_slot_numbers, reassign_days,
    trip_dates, OutdoorKeywords, ParsedItinerary, Planner,
};
pub use error::{PlannerError, Result};
pub use schemas::{deserialize_itinerary, itinerary_schema, validate_itinerary_payload};
pub use types::{
    Activity, Day, DurationUnit, ForecastResponse, Itinerary, PlannedTrip, RainTolerance,
    TimeOfDay, TravelerType, TripDuration, TripRequest, Weather,
};

#[cfg(feature = "cli")]
pub mod cli;
