use std::sync::OnceLock;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::error::{PlannerError, Result};
use crate::types::Itinerary;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Process-wide JSON schema for [`Itinerary`], derived once.
pub fn itinerary_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        serde_json::to_value(schemars::schema_for!(Itinerary))
            .unwrap_or_else(|err| panic!("failed to serialize Itinerary schema: {err}"))
    })
}

/// Validate a generator payload against the [`Itinerary`] schema.
///
/// Generator output is checked, never trusted: schema violations become
/// [`PlannerError::MalformedOutput`] with up to three path-labelled
/// details.
pub fn validate_itinerary_payload(payload: &Value) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(itinerary_schema())
        .map_err(|err| {
            PlannerError::Config(format!("Failed to prepare itinerary schema: {err}"))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::MalformedOutput(format!(
            "payload does not match the itinerary schema: {detail_str}"
        )));
    }

    Ok(())
}

/// Deserialize a schema-validated payload, pointing at the failing path
/// on mismatch.
pub fn deserialize_itinerary(payload: &Value) -> Result<Itinerary> {
    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::MalformedOutput(format!(
            "failed to deserialize itinerary at {location}: {err}"
        ))
    })
}
