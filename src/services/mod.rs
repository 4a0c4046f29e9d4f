pub mod forecast;
pub mod generation;
pub mod prompts;

pub use forecast::ForecastClient;
pub use generation::GenerationClient;
pub use prompts::{build_itinerary_prompt, build_tweak_prompt, PersonaCatalog};
