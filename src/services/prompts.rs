use chrono::NaiveDate;

use crate::types::{DurationUnit, Itinerary, RainTolerance, TravelerType, TripRequest};

/// System prompt for the itinerary-generation call
pub const PLANNER_SYSTEM_PROMPT: &str =
    "You are a highly detailed and structured day-wise itinerary generator for travelers.";

/// System prompt for the tweak call
pub const TWEAK_SYSTEM_PROMPT: &str =
    "You are a meticulous and professional travel itinerary editor.";

/// Immutable traveler-persona table used for prompt construction.
///
/// Built once at startup and passed by reference; never mutated.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    entries: Vec<(TravelerType, String)>,
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self {
            entries: [
                (
                    TravelerType::Solo,
                    "a solo traveler who enjoys flexible pacing and immersive local experiences",
                ),
                (
                    TravelerType::Couple,
                    "a couple looking for a balance of romantic highlights and shared discoveries",
                ),
                (
                    TravelerType::Family,
                    "a family with children who need accessible, engaging activities and gentle pacing",
                ),
                (
                    TravelerType::Friends,
                    "a group of friends who favor social, lively, and memorable group activities",
                ),
                (
                    TravelerType::Business,
                    "a business group that wants polished, time-boxed activities near the city center",
                ),
            ]
            .into_iter()
            .map(|(traveler_type, text)| (traveler_type, text.to_string()))
            .collect(),
        }
    }
}

impl PersonaCatalog {
    pub fn text(&self, traveler_type: TravelerType) -> &str {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == traveler_type)
            .map(|(_, text)| text.as_str())
            .unwrap_or("a traveler exploring the destination")
    }
}

/// Build the day-wise generation prompt for a trip request.
///
/// The output contract matches what the parser expects: `Day N` headers,
/// numbered activities, trailing time-of-day tags, no surrounding prose.
pub fn build_itinerary_prompt(
    request: &TripRequest,
    rainy_dates: &[NaiveDate],
    personas: &PersonaCatalog,
) -> String {
    let mut prompt = format!(
        "You are an expert travel planner creating a detailed day-wise itinerary.\n\
         Plan for {persona}.\n\n\
         ---\n\
         **Trip Input:**\n\
         * **Location:** {location}\n\
         * **Number of People:** {people}\n\
         * **Duration:** {value} {unit}\n\
         * **Preferences:** {preferences}\n",
        persona = personas.text(request.traveler_type),
        location = request.location,
        people = request.number_of_people,
        value = request.duration.value,
        unit = unit_label(request.duration.unit),
        preferences = request.preferences.join(", "),
    );

    prompt.push_str(&weather_instructions(request.rain_tolerance, rainy_dates));

    prompt.push_str(
        "\n---\n\
         **Instructions for Output:**\n\
         Provide the itinerary as plain text, structured day-wise. For each day, list exactly 3 \
         suitable activities or places, and end every activity line with a parenthesized tag: \
         (morning), (afternoon), (evening), or (indoor backup).\n\
         The output must ONLY contain the itinerary, formatted as follows, without any \
         introductory or concluding sentences.\n\n\
         **Example Output Format for a 2-day trip:**\n\
         Day 1\n\
         1. Visit City Palace for a historic tour and panoramic views. (morning)\n\
         2. Experience a serene boat ride on Lake Pichola. (afternoon)\n\
         3. Attend a cultural folk music and dance performance at Bagore Ki Haveli. (evening)\n\
         Day 2\n\
         1. Explore Sajjangarh Monsoon Palace for breathtaking sunset views. (morning)\n\
         2. Participate in a traditional Rajasthani cooking workshop. (afternoon)\n\
         3. Enjoy a dinner at a luxury lakeside restaurant. (evening)\n",
    );

    prompt
}

fn unit_label(unit: DurationUnit) -> &'static str {
    match unit {
        DurationUnit::Days => "days",
        DurationUnit::Hours => "hours",
    }
}

fn weather_instructions(tolerance: RainTolerance, rainy_dates: &[NaiveDate]) -> String {
    let mut section = String::new();

    if tolerance != RainTolerance::Ignore && !rainy_dates.is_empty() {
        let dates: Vec<String> = rainy_dates.iter().map(|date| date.to_string()).collect();
        section.push_str(&format!(
            "* **Forecast:** rain is expected on {}\n",
            dates.join(", ")
        ));
    }

    match tolerance {
        RainTolerance::Strict => section.push_str(
            "* **Weather policy:** the travelers avoid all outdoor activities on rainy days; \
             keep rainy days fully indoor.\n",
        ),
        RainTolerance::Flexible => section.push_str(
            "* **Weather policy:** on rainy days schedule at most one light outdoor activity \
             and include an indoor backup.\n",
        ),
        RainTolerance::Ignore => {}
    }

    section
}

/// Build the revision prompt for the tweak flow.
///
/// The generator must answer with JSON conforming exactly to the
/// [`Itinerary`] schema; the reply is validated, never trusted blindly.
pub fn build_tweak_prompt(
    itinerary: &Itinerary,
    request: &TripRequest,
    instruction: &str,
) -> String {
    let itinerary_json =
        serde_json::to_string_pretty(itinerary).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are a professional travel planner. Based on the user's request, revise the \
         following itinerary while preserving structure and realism.\n\n\
         ---\n\
         **User Request:**\n\
         {instruction}\n\n\
         **Trip Input:**\n\
         Location: {location}\n\
         People: {people}\n\
         Duration: {value} {unit}\n\
         Preferences: {preferences}\n\n\
         **Original Itinerary JSON:**\n\
         {itinerary_json}\n\n\
         ---\n\
         **Instructions:**\n\
         - Output valid JSON only, with no commentary and no code fences.\n\
         - Only update relevant days or activities based on the request.\n\
         - Do not rewrite the entire itinerary unless required.\n\
         - Maintain this exact schema:\n\
         {{\n\
           \"duration\": {{ \"unit\": \"days\", \"value\": 3 }},\n\
           \"days\": [\n\
             {{\n\
               \"dayNumber\": 1,\n\
               \"activities\": [\n\
                 {{ \"description\": \"...\", \"timeOfDay\": \"morning\" }}\n\
               ],\n\
               \"weather\": \"clear\"\n\
             }}\n\
           ]\n\
         }}\n",
        instruction = instruction,
        location = request.location,
        people = request.number_of_people,
        value = request.duration.value,
        unit = unit_label(request.duration.unit),
        preferences = request.preferences.join(", "),
        itinerary_json = itinerary_json,
    )
}
