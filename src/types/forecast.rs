use serde::{Deserialize, Serialize};

/// Subset of the OpenWeatherMap 5-day/3-hour forecast response consumed
/// by the weather calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour forecast sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Sample timestamp, "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub weather: Vec<WeatherCondition>,
}

/// Condition descriptor attached to a forecast sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Condition group, e.g. "Rain", "Clouds", "Clear"
    pub main: String,
}
