use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::core::calendar;
use crate::core::classify::OutdoorKeywords;
use crate::core::parser::parse_itinerary_text;
use crate::core::reassign::reassign_days;
use crate::core::suggest::extract_suggestions;
use crate::error::{PlannerError, Result};
use crate::schemas::{deserialize_itinerary, validate_itinerary_payload};
use crate::services::forecast::ForecastClient;
use crate::services::generation::GenerationClient;
use crate::services::prompts::{
    build_itinerary_prompt, build_tweak_prompt, PersonaCatalog, PLANNER_SYSTEM_PROMPT,
    TWEAK_SYSTEM_PROMPT,
};
use crate::types::{Itinerary, PlannedTrip, TripRequest};

const GENERATION_TEMPERATURE: f64 = 0.7;
const TWEAK_TEMPERATURE: f64 = 0.4;

/// Main planner
///
/// Owns the external collaborators and the read-only persona/keyword
/// tables; each request runs the full pipeline on request-scoped data,
/// so a single planner can serve concurrent requests without locking.
#[derive(Debug)]
pub struct Planner {
    generation: GenerationClient,
    forecast: ForecastClient,
    personas: PersonaCatalog,
    keywords: OutdoorKeywords,
    timeout: Duration,
    trip_start: Option<NaiveDate>,
}

impl Planner {
    pub fn new(generation_api_key: String, forecast_api_key: Option<String>) -> Self {
        Self {
            generation: GenerationClient::new(generation_api_key),
            forecast: ForecastClient::new(forecast_api_key),
            personas: PersonaCatalog::default(),
            keywords: OutdoorKeywords::default(),
            timeout: Duration::from_secs(60),
            trip_start: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.generation.set_model(model);
        self
    }

    pub fn with_generation_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.generation.set_base_url(base_url);
        self
    }

    pub fn with_forecast_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.forecast.set_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pin the calendar origin instead of resolving "today" per request.
    pub fn with_trip_start(mut self, start: NaiveDate) -> Self {
        self.trip_start = Some(start);
        self
    }

    pub fn with_outdoor_keywords(mut self, keywords: OutdoorKeywords) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn from_env() -> Result<Self> {
        let generation_api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            PlannerError::Config(
                "GROQ_API_KEY environment variable must be set before creating a Planner"
                    .to_string(),
            )
        })?;
        let forecast_api_key = std::env::var("OPENWEATHER_API_KEY").ok();

        let mut planner = Self::new(generation_api_key, forecast_api_key);
        if let Ok(base_url) = std::env::var("GROQ_BASE_URL") {
            planner.generation.set_base_url(base_url);
        }
        if let Ok(base_url) = std::env::var("OPENWEATHER_BASE_URL") {
            planner.forecast.set_base_url(base_url);
        }
        Ok(planner)
    }

    /// Produce a structured, weather-adjusted itinerary for a request.
    ///
    /// Either the whole pipeline succeeds or the request fails; no
    /// partial itinerary accompanies an error. A forecast failure is the
    /// one internal exception: it degrades to weather-blind planning.
    pub async fn plan(&self, request: &TripRequest) -> Result<PlannedTrip> {
        request.validate()?;

        let day_count = request.requested_days();
        let start = self.trip_start.unwrap_or_else(|| Utc::now().date_naive());
        let dates = calendar::trip_dates(start, day_count);

        info!(location = %request.location, days = day_count, "planning itinerary");

        let rainy_slots = match self.forecast.fetch(&request.location, self.timeout).await {
            Ok(forecast) => {
                let rainy = calendar::rainy_dates(&forecast);
                calendar::rainy_slot_numbers(&dates, &rainy)
            }
            Err(err) => {
                // Fail-open: weather-awareness degrades to ignore-mode.
                warn!(error = %err, "forecast unavailable, planning without weather");
                BTreeSet::new()
            }
        };
        debug!(?rainy_slots, "rainy slots resolved");

        let rainy_dates: Vec<NaiveDate> = rainy_slots
            .iter()
            .filter_map(|&slot| dates.get(slot as usize - 1).copied())
            .collect();

        let prompt = build_itinerary_prompt(request, &rainy_dates, &self.personas);
        let text = self
            .generation
            .complete(PLANNER_SYSTEM_PROMPT, &prompt, GENERATION_TEMPERATURE, self.timeout)
            .await?;

        let parsed = parse_itinerary_text(&text);
        debug!(days = parsed.days.len(), "itinerary text parsed");

        let days = reassign_days(
            parsed.days,
            &rainy_slots,
            request.rain_tolerance,
            &self.keywords,
        );

        let suggestions = extract_suggestions(&parsed.raw_descriptions);
        info!(days = days.len(), suggestions = suggestions.len(), "itinerary ready");

        Ok(PlannedTrip {
            itinerary: Itinerary {
                duration: request.duration,
                days,
            },
            suggestions,
        })
    }

    /// Revise an itinerary according to a free-text instruction.
    ///
    /// The generator must answer with JSON conforming to the
    /// [`Itinerary`] schema; the reply is schema-validated before it
    /// replaces anything.
    pub async fn tweak(
        &self,
        itinerary: &Itinerary,
        request: &TripRequest,
        instruction: &str,
    ) -> Result<Itinerary> {
        request.validate()?;
        if instruction.trim().is_empty() {
            return Err(PlannerError::Validation(
                "tweak instruction must not be empty".to_string(),
            ));
        }

        info!(location = %request.location, "tweaking itinerary");

        let prompt = build_tweak_prompt(itinerary, request, instruction);
        let reply = self
            .generation
            .complete(TWEAK_SYSTEM_PROMPT, &prompt, TWEAK_TEMPERATURE, self.timeout)
            .await?;

        let payload: serde_json::Value = serde_json::from_str(strip_code_fences(&reply))
            .map_err(|err| {
                PlannerError::MalformedOutput(format!("reply is not valid JSON: {err}"))
            })?;

        validate_itinerary_payload(&payload)?;
        deserialize_itinerary(&payload)
    }
}

/// Strip a surrounding Markdown code fence from a generator reply.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
