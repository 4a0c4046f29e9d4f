pub mod validation;

pub use validation::{deserialize_itinerary, itinerary_schema, validate_itinerary_payload};
