use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};

use crate::types::ForecastResponse;

/// Minimum rain-reporting forecast samples for a date to count as rainy.
const RAINY_SAMPLE_THRESHOLD: usize = 2;

/// The next `days` calendar dates starting from (and including) `start`.
pub fn trip_dates(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days as i64).map(|offset| start + Duration::days(offset)).collect()
}

/// Reduce a forecast to the set of dates with at least two rain-bearing
/// samples.
///
/// Samples whose timestamp does not carry a parseable date are skipped.
pub fn rainy_dates(forecast: &ForecastResponse) -> BTreeSet<NaiveDate> {
    let mut samples_per_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for entry in &forecast.list {
        let Some(date) = entry
            .dt_txt
            .split_whitespace()
            .next()
            .and_then(|text| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
        else {
            continue;
        };

        let reports_rain = entry
            .weather
            .iter()
            .any(|condition| condition.main.to_lowercase().contains("rain"));
        let counter = samples_per_date.entry(date).or_insert(0);
        if reports_rain {
            *counter += 1;
        }
    }

    samples_per_date
        .into_iter()
        .filter(|(_, rainy_samples)| *rainy_samples >= RAINY_SAMPLE_THRESHOLD)
        .map(|(date, _)| date)
        .collect()
}

/// Map rainy calendar dates onto 1-based trip slot numbers.
pub fn rainy_slot_numbers(dates: &[NaiveDate], rainy: &BTreeSet<NaiveDate>) -> BTreeSet<u32> {
    dates
        .iter()
        .enumerate()
        .filter(|(_, date)| rainy.contains(date))
        .map(|(index, _)| index as u32 + 1)
        .collect()
}
