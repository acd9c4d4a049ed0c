//! In-domain classifier for chat messages.
//!
//! Membership is lower-cased substring containment, not whole-word:
//! "stressed" matches "stress". That over-match is intentional; the
//! gate errs toward letting health-adjacent phrasing through.

/// Fixed domain vocabulary.
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "stress",
    "anxiety",
    "depression",
    "mental health",
    "cbt",
    "dbt",
    "symptoms",
    "headache",
    "insomnia",
    "mood",
    "therapy",
    "counseling",
    "meditation",
    "well-being",
    "emotions",
];

#[derive(Debug, Clone)]
pub struct TopicGate {
    keywords: Vec<String>,
}

impl TopicGate {
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    pub fn is_in_domain(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

impl Default for TopicGate {
    fn default() -> Self {
        Self::new(DOMAIN_KEYWORDS.iter().copied())
    }
}
