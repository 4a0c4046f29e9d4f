use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Activity, Day, TimeOfDay, Weather};

/// Parser output: structured days plus the flat activity text in
/// document order (feeds the suggestion extractor).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedItinerary {
    pub days: Vec<Day>,
    pub raw_descriptions: Vec<String>,
}

fn day_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*{0,2}\s*Day\s+(\d+)\s*:?\s*\*{0,2}$").unwrap())
}

fn list_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\d+[.)]|[-*•])\s+(.*)$").unwrap())
}

fn time_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\(\s*(morning|afternoon|evening|indoor backup)\s*\)\s*$").unwrap()
    })
}

/// Parse one block of generated text into ordered days.
///
/// Generated text follows a loose `Day N` / numbered-line convention, so
/// anything that is neither a day header nor a list item is dropped
/// rather than treated as an error. Day numbers are kept exactly as they
/// appeared; the reassignment stage renumbers. A repeated header starts a
/// fresh day rather than merging into the earlier one.
pub fn parse_itinerary_text(text: &str) -> ParsedItinerary {
    let mut parsed = ParsedItinerary::default();

    let mut current_number: u32 = 0;
    let mut current_activities: Vec<Activity> = Vec::new();
    let mut seen_header = false;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(caps) = day_header_re().captures(line) {
            if let Ok(number) = caps[1].parse::<u32>() {
                if seen_header || !current_activities.is_empty() {
                    parsed.days.push(Day {
                        day_number: current_number,
                        activities: std::mem::take(&mut current_activities),
                        weather: Weather::Clear,
                    });
                }
                current_number = number;
                seen_header = true;
                continue;
            }
        }

        if let Some(caps) = list_item_re().captures(line) {
            let activity = parse_activity_line(caps[1].trim());
            if !activity.description.is_empty() {
                parsed.raw_descriptions.push(activity.description.clone());
                current_activities.push(activity);
            }
        }
        // Stray prose around the list is ignored.
    }

    if seen_header || !current_activities.is_empty() {
        parsed.days.push(Day {
            day_number: current_number,
            activities: current_activities,
            weather: Weather::Clear,
        });
    }

    parsed
}

/// Split an optional trailing `(morning|afternoon|evening|indoor backup)`
/// tag off a de-bulleted activity line.
fn parse_activity_line(text: &str) -> Activity {
    if let Some(caps) = time_tag_re().captures(text) {
        let tag = match caps[1].to_lowercase().as_str() {
            "morning" => TimeOfDay::Morning,
            "afternoon" => TimeOfDay::Afternoon,
            "evening" => TimeOfDay::Evening,
            _ => TimeOfDay::IndoorBackup,
        };
        let end = caps.get(0).map(|m| m.start()).unwrap_or(text.len());
        return Activity::new(text[..end].trim()).with_time_of_day(tag);
    }

    Activity::new(text)
}
