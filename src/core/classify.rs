use crate::types::Day;

/// Keyword terms that flag an activity as outdoor.
///
/// The set is a stable, documented heuristic: lowercase substring terms
/// matched against lowercased descriptions. It is read-only after
/// construction and shared by reference across the pipeline.
const DEFAULT_OUTDOOR_TERMS: &[&str] = &[
    "trek", "beach", "boat", "walk", "hike", "garden", "outdoor", "forest", "camp", "sunset",
    "lake", "photography", "wildlife", "park", "open-air", "safari", "kayak", "cycling", "picnic",
    "trail",
];

/// Immutable outdoor-keyword table backing the activity classifier.
#[derive(Debug, Clone)]
pub struct OutdoorKeywords {
    terms: Vec<String>,
}

impl Default for OutdoorKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_OUTDOOR_TERMS.iter().copied())
    }
}

impl OutdoorKeywords {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(|t| t.into().to_lowercase()).collect(),
        }
    }

    /// Classify an activity description as outdoor or not.
    ///
    /// Case-insensitive, deterministic, and tolerant: empty or malformed
    /// input is simply non-outdoor.
    pub fn is_outdoor(&self, description: &str) -> bool {
        let lowered = description.to_lowercase();
        self.terms.iter().any(|term| lowered.contains(term.as_str()))
    }

    /// Count of outdoor-classified activities within a day.
    pub fn outdoor_count(&self, day: &Day) -> usize {
        day.activities
            .iter()
            .filter(|activity| self.is_outdoor(&activity.description))
            .count()
    }
}
