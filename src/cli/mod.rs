use clap::{Arg, ArgAction, Command};
use std::env;
use tracing::{error, info};

use crate::types::{
    DurationUnit, RainTolerance, TravelerType, TripDuration, TripRequest, Weather,
};
use crate::Planner;

/// CLI entry point for the trip-planner tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("A weather-aware travel itinerary planner backed by LLM text generation")
        .arg(
            Arg::new("location")
                .help("Destination city or region")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("people")
                .short('p')
                .long("people")
                .value_name("COUNT")
                .help("Number of travelers")
                .default_value("1"),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip length in days")
                .conflicts_with("hours")
                .default_value("3"),
        )
        .arg(
            Arg::new("hours")
                .long("hours")
                .value_name("HOURS")
                .help("Trip length in hours (plans a single day)"),
        )
        .arg(
            Arg::new("prefer")
                .long("prefer")
                .value_name("PREFERENCE")
                .help("Activity preference; repeat for several")
                .action(ArgAction::Append)
                .default_value("sightseeing"),
        )
        .arg(
            Arg::new("rain-tolerance")
                .long("rain-tolerance")
                .value_name("MODE")
                .help("Rainy-day policy: strict, flexible, or ignore")
                .default_value("strict"),
        )
        .arg(
            Arg::new("traveler-type")
                .long("traveler-type")
                .value_name("TYPE")
                .help("Persona: solo, couple, family, friends, or business")
                .default_value("solo"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The chat-completion model to use"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Generation API key (or set GROQ_API_KEY env var)"),
        )
        .arg(
            Arg::new("weather-api-key")
                .long("weather-api-key")
                .value_name("KEY")
                .help("Forecast API key (or set OPENWEATHER_API_KEY; omit to plan weather-blind)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Generation base URL (or set GROQ_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("60"),
        )
        .arg(
            Arg::new("tweak")
                .long("tweak")
                .value_name("INSTRUCTION")
                .help("Revise the generated itinerary with a free-text instruction"),
        )
        .get_matches();

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GROQ_API_KEY").ok())
        .ok_or("Generation API key is required. Set GROQ_API_KEY environment variable or use --api-key")?;

    let weather_api_key = matches
        .get_one::<String>("weather-api-key")
        .cloned()
        .or_else(|| env::var("OPENWEATHER_API_KEY").ok());

    let duration = match matches.get_one::<String>("hours") {
        Some(hours) => TripDuration {
            unit: DurationUnit::Hours,
            value: hours.parse()?,
        },
        None => TripDuration {
            unit: DurationUnit::Days,
            value: matches.get_one::<String>("days").unwrap().parse()?,
        },
    };

    let request = TripRequest {
        location: matches.get_one::<String>("location").unwrap().clone(),
        number_of_people: matches.get_one::<String>("people").unwrap().parse()?,
        duration,
        preferences: matches
            .get_many::<String>("prefer")
            .unwrap()
            .cloned()
            .collect(),
        rain_tolerance: parse_rain_tolerance(matches.get_one::<String>("rain-tolerance").unwrap())?,
        traveler_type: parse_traveler_type(matches.get_one::<String>("traveler-type").unwrap())?,
    };

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;

    let mut planner = Planner::new(api_key, weather_api_key)
        .with_timeout(std::time::Duration::from_secs(timeout_seconds));
    if let Some(model) = matches.get_one::<String>("model") {
        planner = planner.with_model(model.as_str());
    }
    if let Some(base_url) = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("GROQ_BASE_URL").ok())
    {
        planner = planner.with_generation_base_url(base_url);
    }

    info!("Planning trip to {}", request.location);

    let planned = match planner.plan(&request).await {
        Ok(planned) => planned,
        Err(e) => {
            error!("Planning failed: {}", e);
            return Err(e.into());
        }
    };

    let mut itinerary = planned.itinerary;
    if let Some(instruction) = matches.get_one::<String>("tweak") {
        info!("Applying tweak: {}", instruction);
        match planner.tweak(&itinerary, &request, instruction).await {
            Ok(revised) => itinerary = revised,
            Err(e) => {
                error!("Tweak failed: {}", e);
                return Err(e.into());
            }
        }
    }

    print_itinerary(&itinerary, &planned.suggestions);
    Ok(())
}

fn parse_rain_tolerance(text: &str) -> Result<RainTolerance, String> {
    match text.to_lowercase().as_str() {
        "strict" => Ok(RainTolerance::Strict),
        "flexible" => Ok(RainTolerance::Flexible),
        "ignore" => Ok(RainTolerance::Ignore),
        other => Err(format!(
            "Unknown rain tolerance `{other}`; expected strict, flexible, or ignore"
        )),
    }
}

fn parse_traveler_type(text: &str) -> Result<TravelerType, String> {
    match text.to_lowercase().as_str() {
        "solo" => Ok(TravelerType::Solo),
        "couple" => Ok(TravelerType::Couple),
        "family" => Ok(TravelerType::Family),
        "friends" => Ok(TravelerType::Friends),
        "business" => Ok(TravelerType::Business),
        other => Err(format!(
            "Unknown traveler type `{other}`; expected solo, couple, family, friends, or business"
        )),
    }
}

fn print_itinerary(itinerary: &crate::types::Itinerary, suggestions: &[String]) {
    println!("\nItinerary:");
    for day in &itinerary.days {
        let weather = match day.weather {
            Weather::Rainy => " (rainy)",
            Weather::Clear => "",
        };
        println!("\nDay {}{}", day.day_number, weather);
        for activity in &day.activities {
            match activity.time_of_day {
                Some(time_of_day) => println!(
                    "  - {} [{}]",
                    activity.description,
                    serde_json::to_string(&time_of_day)
                        .unwrap_or_default()
                        .trim_matches('"')
                ),
                None => println!("  - {}", activity.description),
            }
        }
    }

    if !suggestions.is_empty() {
        println!("\nMore suggestions:");
        for suggestion in suggestions {
            println!("  * {suggestion}");
        }
    }
}
