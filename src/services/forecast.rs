use std::time::Duration;

use crate::error::{PlannerError, Result};
use crate::types::ForecastResponse;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the multi-day forecast collaborator (OpenWeatherMap
/// 5-day/3-hour endpoint).
///
/// Errors from this client are recoverable: the planner degrades to
/// weather-blind planning instead of failing the request.
#[derive(Clone, Debug)]
pub struct ForecastClient {
    api_key: Option<String>,
    base_url: String,
}

impl ForecastClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Fetch the periodic forecast for a location.
    pub async fn fetch(&self, location: &str, timeout: Duration) -> Result<ForecastResponse> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            PlannerError::Forecast("no forecast API key configured".to_string())
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PlannerError::Forecast(format!("Failed to build HTTP client: {err}")))?;

        let url = format!("{}/data/2.5/forecast", self.base_url.trim_end_matches('/'));
        let response = client
            .get(url)
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|err| PlannerError::Forecast(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::Forecast(format!(
                "HTTP {} error from forecast endpoint",
                status
            )));
        }

        response
            .json::<ForecastResponse>()
            .await
            .map_err(|err| PlannerError::Forecast(format!("Failed to parse forecast: {err}")))
    }
}
