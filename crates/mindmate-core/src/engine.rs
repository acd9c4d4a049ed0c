//! Keyword-driven recommendation engine.
//!
//! Rules live in an ordered table; the first matching rule wins and no
//! advisories are combined. Keeping the table as data (rather than
//! nested conditionals) makes the priority order auditable in isolation.
//! All matching is case-insensitive.

use mindmate_schema::Context;
use serde::{Deserialize, Serialize};

/// Predicate over the mood/symptoms/behaviors triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Match {
    /// Trimmed, lower-cased mood equals this value exactly.
    MoodEquals(String),
    MoodContains(String),
    SymptomsContain(String),
    BehaviorsContain(String),
    /// Every inner predicate must hold.
    All(Vec<Match>),
}

impl Match {
    pub fn matches(&self, ctx: &Context) -> bool {
        match self {
            Self::MoodEquals(value) => {
                ctx.mood.trim().to_lowercase() == value.to_lowercase()
            }
            Self::MoodContains(value) => contains_ci(&ctx.mood, value),
            Self::SymptomsContain(value) => contains_ci(&ctx.symptoms, value),
            Self::BehaviorsContain(value) => contains_ci(&ctx.behaviors, value),
            Self::All(inner) => inner.iter().all(|m| m.matches(ctx)),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    pub when: Match,
    pub advice: String,
}

impl Rule {
    pub fn new(when: Match, advice: impl Into<String>) -> Self {
        Self {
            when,
            advice: advice.into(),
        }
    }
}

/// Ordered rule table plus a fallback advisory. Pure and total:
/// `recommend` never fails and has no side effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEngine {
    rules: Vec<Rule>,
    fallback: String,
}

pub const ADVICE_SAD: &str = "Consider talking to a mental health professional or practicing mindfulness techniques such as meditation.";
pub const ADVICE_ANXIOUS: &str =
    "Try breathing exercises or consider reaching out to a counselor to discuss your anxiety.";
pub const ADVICE_HEADACHE: &str =
    "Ensure you are hydrated and have enough rest. If it persists, consult a doctor.";
pub const ADVICE_INSOMNIA: &str = "Establish a regular sleep schedule and avoid screen time before bed. If it continues, see a healthcare provider.";
pub const ADVICE_DEFAULT: &str =
    "Keep tracking your symptoms and consider speaking with a professional if needed.";

const ADVICE_SAD_INSOMNIA: &str = "Low mood and poor sleep often feed each other. Keep a fixed wake-up time, get daylight early in the day, and consider discussing both with a mental health professional.";
const ADVICE_ANXIOUS_HEADACHE: &str = "Tension headaches often track anxiety. Try slow breathing and short screen breaks, stay hydrated, and raise both with a counselor or doctor if they persist.";

impl RecommendationEngine {
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The simple per-field table: one advisory per mood/symptom cue,
    /// evaluated top to bottom.
    pub fn baseline() -> Self {
        Self::new(
            vec![
                Rule::new(Match::MoodEquals("sad".into()), ADVICE_SAD),
                Rule::new(Match::MoodContains("anxious".into()), ADVICE_ANXIOUS),
                Rule::new(Match::SymptomsContain("headache".into()), ADVICE_HEADACHE),
                Rule::new(Match::SymptomsContain("insomnia".into()), ADVICE_INSOMNIA),
            ],
            ADVICE_DEFAULT,
        )
    }

    /// Richer variant: conjunctive mood+symptom rules take priority,
    /// then the baseline per-field rules apply. Same evaluation path,
    /// different table.
    pub fn conjunctive() -> Self {
        let mut rules = vec![
            Rule::new(
                Match::All(vec![
                    Match::MoodContains("sad".into()),
                    Match::SymptomsContain("insomnia".into()),
                ]),
                ADVICE_SAD_INSOMNIA,
            ),
            Rule::new(
                Match::All(vec![
                    Match::MoodContains("anxious".into()),
                    Match::SymptomsContain("headache".into()),
                ]),
                ADVICE_ANXIOUS_HEADACHE,
            ),
        ];
        rules.extend(Self::baseline().rules);
        Self::new(rules, ADVICE_DEFAULT)
    }

    /// First matching rule wins; the fallback applies when none match.
    pub fn recommend(&self, ctx: &Context) -> &str {
        for rule in &self.rules {
            if rule.when.matches(ctx) {
                return &rule.advice;
            }
        }
        &self.fallback
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::baseline()
    }
}
