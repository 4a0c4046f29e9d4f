use std::collections::BTreeSet;

use crate::core::classify::OutdoorKeywords;
use crate::types::{Day, RainTolerance, Weather};

/// Most outdoor activities a day may carry and still qualify for a rainy
/// slot under flexible tolerance (one outdoor plus an indoor backup).
const FLEXIBLE_OUTDOOR_LIMIT: usize = 1;

/// Reorder parsed days across the trip's slots so that low-outdoor days
/// land on forecast-rainy slots.
///
/// `rainy_slots` holds 1-based output slot numbers; entries outside
/// `1..=days.len()` are inert. The result is always a permutation of the
/// input days renumbered `1..=N`, with `weather` tagged from final slot
/// membership. The placement is a best-effort heuristic: under flexible
/// tolerance the fill pass may still put an outdoor-heavy day on a rainy
/// slot when no qualified day is left.
pub fn reassign_days(
    days: Vec<Day>,
    rainy_slots: &BTreeSet<u32>,
    tolerance: RainTolerance,
    keywords: &OutdoorKeywords,
) -> Vec<Day> {
    let total = days.len();
    let rainy: BTreeSet<usize> = rainy_slots
        .iter()
        .filter(|&&number| number >= 1 && number as usize <= total)
        .map(|&number| number as usize - 1)
        .collect();

    if tolerance == RainTolerance::Ignore || rainy.is_empty() {
        return renumber(days.into_iter().map(Some).collect(), &rainy);
    }

    let outdoor_counts: Vec<usize> = days.iter().map(|day| keywords.outdoor_count(day)).collect();

    // Lowest outdoor exposure first; stable sort keeps document order on ties.
    let mut ranked: Vec<usize> = (0..total).collect();
    ranked.sort_by_key(|&index| outdoor_counts[index]);

    let mut pool: Vec<Option<Day>> = days.into_iter().map(Some).collect();
    let mut slots: Vec<Option<Day>> = (0..total).map(|_| None).collect();

    for &day_index in &ranked {
        let qualifies = match tolerance {
            RainTolerance::Strict => true,
            RainTolerance::Flexible => outdoor_counts[day_index] <= FLEXIBLE_OUTDOOR_LIMIT,
            RainTolerance::Ignore => false,
        };

        let target = if qualifies {
            first_empty(&slots, &rainy, Some(true)).or_else(|| first_empty(&slots, &rainy, Some(false)))
        } else {
            first_empty(&slots, &rainy, Some(false))
        };

        if let Some(slot_index) = target {
            slots[slot_index] = pool[day_index].take();
        }
    }

    // Fill pass: anything still unplaced takes the first empty slot.
    for &day_index in &ranked {
        if pool[day_index].is_some() {
            if let Some(slot_index) = first_empty(&slots, &rainy, None) {
                slots[slot_index] = pool[day_index].take();
            }
        }
    }

    renumber(slots, &rainy)
}

/// First empty slot in ascending order; `want_rainy` restricts the scan
/// to rainy or clear slots when set.
fn first_empty(
    slots: &[Option<Day>],
    rainy: &BTreeSet<usize>,
    want_rainy: Option<bool>,
) -> Option<usize> {
    slots.iter().enumerate().position(|(index, slot)| {
        slot.is_none() && want_rainy.map_or(true, |wanted| rainy.contains(&index) == wanted)
    })
}

fn renumber(slots: Vec<Option<Day>>, rainy: &BTreeSet<usize>) -> Vec<Day> {
    slots
        .into_iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            slot.map(|mut day| {
                day.day_number = index as u32 + 1;
                day.weather = if rainy.contains(&index) {
                    Weather::Rainy
                } else {
                    Weather::Clear
                };
                day
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Activity;

    fn day(day_number: u32, descriptions: &[&str]) -> Day {
        Day {
            day_number,
            activities: descriptions.iter().copied().map(Activity::new).collect(),
            weather: Weather::Clear,
        }
    }

    fn descriptions(day: &Day) -> Vec<String> {
        day.activities.iter().map(|a| a.description.clone()).collect()
    }

    fn slot_set(numbers: &[u32]) -> BTreeSet<u32> {
        numbers.iter().copied().collect()
    }

    #[test]
    fn test_strict_prefers_low_outdoor_day_for_rainy_slot() {
        let days = vec![
            day(1, &["Visit City Palace for a tour.", "Boat ride on Lake Pichola."]),
            day(2, &["Indoor cooking class."]),
        ];
        let result = reassign_days(
            days,
            &slot_set(&[1]),
            RainTolerance::Strict,
            &OutdoorKeywords::default(),
        );

        assert_eq!(result[0].day_number, 1);
        assert_eq!(descriptions(&result[0]), vec!["Indoor cooking class."]);
        assert_eq!(result[0].weather, Weather::Rainy);
        assert_eq!(result[1].day_number, 2);
        assert_eq!(
            descriptions(&result[1]),
            vec!["Visit City Palace for a tour.", "Boat ride on Lake Pichola."]
        );
        assert_eq!(result[1].weather, Weather::Clear);
    }

    #[test]
    fn test_out_of_range_rainy_slots_are_inert() {
        let days = vec![
            day(1, &["Fort visit."]),
            day(2, &["Lake cruise."]),
            day(3, &["Cooking class."]),
        ];
        let result = reassign_days(
            days.clone(),
            &slot_set(&[5]),
            RainTolerance::Strict,
            &OutdoorKeywords::default(),
        );

        assert_eq!(result.len(), 3);
        for (index, out) in result.iter().enumerate() {
            assert_eq!(out.day_number, index as u32 + 1);
            assert_eq!(out.weather, Weather::Clear);
            assert_eq!(descriptions(out), descriptions(&days[index]));
        }
    }

    #[test]
    fn test_ignore_mode_only_renumbers_and_tags() {
        let days = vec![
            day(4, &["Sunset trek to the ridge."]),
            day(9, &["Indoor cooking class."]),
        ];
        let result = reassign_days(
            days,
            &slot_set(&[1]),
            RainTolerance::Ignore,
            &OutdoorKeywords::default(),
        );

        assert_eq!(result[0].day_number, 1);
        assert_eq!(descriptions(&result[0]), vec!["Sunset trek to the ridge."]);
        assert_eq!(result[0].weather, Weather::Rainy);
        assert_eq!(result[1].day_number, 2);
        assert_eq!(result[1].weather, Weather::Clear);
    }

    #[test]
    fn test_empty_rainy_set_is_a_no_op() {
        let days = vec![day(2, &["Lake cruise."]), day(1, &["Cooking class."])];
        let result = reassign_days(
            days,
            &BTreeSet::new(),
            RainTolerance::Strict,
            &OutdoorKeywords::default(),
        );
        assert_eq!(descriptions(&result[0]), vec!["Lake cruise."]);
        assert_eq!(result[0].day_number, 1);
        assert_eq!(result[1].day_number, 2);
    }

    #[test]
    fn test_flexible_places_qualified_day_on_rainy_slot() {
        let days = vec![
            day(1, &["Trek to the falls.", "Kayak on the lake.", "Forest camp."]),
            day(2, &["Garden stroll.", "Pottery workshop."]),
            day(3, &["Cooking class.", "Folk art museum."]),
        ];
        let result = reassign_days(
            days,
            &slot_set(&[2]),
            RainTolerance::Flexible,
            &OutdoorKeywords::default(),
        );

        // Day 3 (zero outdoor) takes the rainy slot; the outdoor-heavy day
        // never lands on it while a clear slot remains.
        assert_eq!(descriptions(&result[1])[0], "Cooking class.");
        assert_eq!(result[1].weather, Weather::Rainy);
        assert_eq!(descriptions(&result[0])[0], "Garden stroll.");
        assert_eq!(descriptions(&result[2])[0], "Trek to the falls.");
    }

    #[test]
    fn test_flexible_fill_pass_covers_unqualified_days() {
        // Every day is outdoor-heavy and every slot is rainy: nothing
        // qualifies, so the fill pass must still produce full coverage.
        let days = vec![
            day(1, &["Trek one.", "Hike one."]),
            day(2, &["Trek two.", "Hike two."]),
        ];
        let result = reassign_days(
            days,
            &slot_set(&[1, 2]),
            RainTolerance::Flexible,
            &OutdoorKeywords::default(),
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].day_number, 1);
        assert_eq!(result[1].day_number, 2);
        assert!(result.iter().all(|d| d.weather == Weather::Rainy));
        let mut firsts: Vec<String> = result.iter().map(|d| descriptions(d)[0].clone()).collect();
        firsts.sort();
        assert_eq!(firsts, vec!["Trek one.", "Trek two."]);
    }

    #[test]
    fn test_reassignment_is_a_bijection() {
        let days = vec![
            day(7, &["Boat ride on Lake Pichola.", "Palace tour."]),
            day(2, &[]),
            day(5, &["Indoor cooking class."]),
            day(1, &["Sunset trek.", "Wildlife safari.", "Camp dinner."]),
        ];
        for tolerance in [
            RainTolerance::Strict,
            RainTolerance::Flexible,
            RainTolerance::Ignore,
        ] {
            let result = reassign_days(
                days.clone(),
                &slot_set(&[1, 3, 9]),
                tolerance,
                &OutdoorKeywords::default(),
            );

            let numbers: Vec<u32> = result.iter().map(|d| d.day_number).collect();
            assert_eq!(numbers, vec![1, 2, 3, 4]);

            let mut expected: Vec<Vec<String>> = days.iter().map(descriptions).collect();
            let mut actual: Vec<Vec<String>> = result.iter().map(descriptions).collect();
            expected.sort();
            actual.sort();
            assert_eq!(expected, actual);
        }
    }
}
