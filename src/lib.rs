//! MBI-SS: Maslach Burnout Inventory - Student Survey
//!
//! Scores the three MBI-SS subscales from 0-6 ratings, classifies the
//! respondent with the threshold rule of the active questionnaire variant and
//! appends the outcome to a local result table.

pub mod config;
pub mod error;
pub mod form;
pub mod questionnaire;
pub mod reporter;
pub mod scoring;
pub mod store;
pub mod submission;

pub use error::{Result, SurveyError};
pub use scoring::{classify, Scorer, ScoringProfile, ThresholdConfig};

use serde::{Deserialize, Serialize};

/// Lowest rating a question accepts ("Never")
pub const MIN_RATING: i32 = 0;
/// Highest rating a question accepts ("Always")
pub const MAX_RATING: i32 = 6;

/// One of the three measured dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subscale {
    EmotionalExhaustion,
    Cynicism,
    AcademicEfficacy,
}

impl Subscale {
    /// All subscales in questionnaire order
    pub const ALL: [Subscale; 3] = [
        Subscale::EmotionalExhaustion,
        Subscale::Cynicism,
        Subscale::AcademicEfficacy,
    ];

    /// Human-readable name, also used as the result table column header
    pub fn label(self) -> &'static str {
        match self {
            Subscale::EmotionalExhaustion => "Emotional Exhaustion",
            Subscale::Cynicism => "Cynicism",
            Subscale::AcademicEfficacy => "Academic Efficacy",
        }
    }
}

impl std::fmt::Display for Subscale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw ratings for one submission, one per question, grouped by subscale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default)]
    pub emotional_exhaustion: Vec<i32>,
    #[serde(default)]
    pub cynicism: Vec<i32>,
    #[serde(default)]
    pub academic_efficacy: Vec<i32>,
}

impl Response {
    pub fn new(
        emotional_exhaustion: Vec<i32>,
        cynicism: Vec<i32>,
        academic_efficacy: Vec<i32>,
    ) -> Self {
        Self {
            emotional_exhaustion,
            cynicism,
            academic_efficacy,
        }
    }

    pub fn ratings(&self, subscale: Subscale) -> &[i32] {
        match subscale {
            Subscale::EmotionalExhaustion => &self.emotional_exhaustion,
            Subscale::Cynicism => &self.cynicism,
            Subscale::AcademicEfficacy => &self.academic_efficacy,
        }
    }

    pub fn ratings_mut(&mut self, subscale: Subscale) -> &mut Vec<i32> {
        match subscale {
            Subscale::EmotionalExhaustion => &mut self.emotional_exhaustion,
            Subscale::Cynicism => &mut self.cynicism,
            Subscale::AcademicEfficacy => &mut self.academic_efficacy,
        }
    }
}

/// Subscale totals derived from a validated response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    pub emotional_exhaustion: u32,
    pub cynicism: u32,
    /// Reverse-scored when the active profile says so
    pub academic_efficacy: u32,
}

impl ScoreSet {
    pub fn get(&self, subscale: Subscale) -> u32 {
        match subscale {
            Subscale::EmotionalExhaustion => self.emotional_exhaustion,
            Subscale::Cynicism => self.cynicism,
            Subscale::AcademicEfficacy => self.academic_efficacy,
        }
    }
}

/// Burnout label. The binary rule yields the first two, the tiered rule the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Burned Out")]
    BurnedOut,
    #[serde(rename = "Not Burned Out")]
    NotBurnedOut,
    #[serde(rename = "High Burnout")]
    HighBurnout,
    #[serde(rename = "Moderate Burnout")]
    ModerateBurnout,
    #[serde(rename = "Low Burnout")]
    LowBurnout,
    #[serde(rename = "Borderline Burnout")]
    BorderlineBurnout,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::BurnedOut => "Burned Out",
            Classification::NotBurnedOut => "Not Burned Out",
            Classification::HighBurnout => "High Burnout",
            Classification::ModerateBurnout => "Moderate Burnout",
            Classification::LowBurnout => "Low Burnout",
            Classification::BorderlineBurnout => "Borderline Burnout",
        }
    }

    /// Whether this label signals burnout risk worth highlighting
    pub fn is_elevated(self) -> bool {
        matches!(
            self,
            Classification::BurnedOut | Classification::HighBurnout
        )
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scores and label for one response; never returned partially
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub scores: ScoreSet,
    pub classification: Classification,
}
