pub mod forecast;
pub mod itinerary;
pub mod request;

pub use forecast::{ForecastEntry, ForecastResponse, WeatherCondition};
pub use itinerary::{Activity, Day, Itinerary, PlannedTrip, TimeOfDay, Weather};
pub use request::{DurationUnit, RainTolerance, TravelerType, TripDuration, TripRequest};
