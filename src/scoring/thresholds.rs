//! Threshold rules that turn a score set into a burnout label

use crate::{Classification, ScoreSet};
use serde::{Deserialize, Serialize};

/// Inclusive numeric band, written as `[min, max]` in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Band {
    pub min: u32,
    pub max: u32,
}

impl Band {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl From<[u32; 2]> for Band {
    fn from([min, max]: [u32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Band> for [u32; 2] {
    fn from(band: Band) -> Self {
        [band.min, band.max]
    }
}

/// Two-way rule: burned out when exhaustion and cynicism are both high,
/// or when academic efficacy is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryThresholds {
    /// Minimum EE total counted as high
    pub emotional_exhaustion: u32,
    /// Minimum CY total counted as high
    pub cynicism: u32,
    /// Maximum AE total counted as low
    pub academic_efficacy: u32,
}

impl Default for BinaryThresholds {
    fn default() -> Self {
        Self {
            emotional_exhaustion: 14,
            cynicism: 6,
            academic_efficacy: 18,
        }
    }
}

impl BinaryThresholds {
    pub fn classify(&self, scores: &ScoreSet) -> Classification {
        let exhausted = scores.emotional_exhaustion >= self.emotional_exhaustion;
        let cynical = scores.cynicism >= self.cynicism;
        let inefficacious = scores.academic_efficacy <= self.academic_efficacy;

        if (exhausted && cynical) || inefficacious {
            Classification::BurnedOut
        } else {
            Classification::NotBurnedOut
        }
    }
}

/// Four-way rule. Bands overlap, so checks run in a fixed order and the
/// first match wins: high, moderate, low, then borderline for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieredBands {
    pub high_emotional_exhaustion_above: u32,
    pub high_cynicism_above: u32,
    pub high_academic_efficacy_below: u32,
    pub moderate_emotional_exhaustion: Band,
    pub moderate_cynicism: Band,
    pub low_emotional_exhaustion_below: u32,
    pub low_cynicism_below: u32,
    pub low_academic_efficacy_above: u32,
}

impl Default for TieredBands {
    fn default() -> Self {
        Self {
            high_emotional_exhaustion_above: 20,
            high_cynicism_above: 17,
            high_academic_efficacy_below: 18,
            moderate_emotional_exhaustion: Band::new(15, 20),
            moderate_cynicism: Band::new(13, 17),
            low_emotional_exhaustion_below: 15,
            low_cynicism_below: 12,
            low_academic_efficacy_above: 20,
        }
    }
}

impl TieredBands {
    /// `scores.academic_efficacy` is expected to be reverse-scored.
    pub fn classify(&self, scores: &ScoreSet) -> Classification {
        let ee = scores.emotional_exhaustion;
        let cy = scores.cynicism;
        let ae = scores.academic_efficacy;

        if ee > self.high_emotional_exhaustion_above
            && cy > self.high_cynicism_above
            && ae < self.high_academic_efficacy_below
        {
            return Classification::HighBurnout;
        }

        if self.moderate_emotional_exhaustion.contains(ee) || self.moderate_cynicism.contains(cy) {
            return Classification::ModerateBurnout;
        }

        if ee < self.low_emotional_exhaustion_below
            && cy < self.low_cynicism_below
            && ae > self.low_academic_efficacy_above
        {
            return Classification::LowBurnout;
        }

        Classification::BorderlineBurnout
    }
}

/// The classification rule of the active variant. Exactly one is ever in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum ThresholdConfig {
    Binary(BinaryThresholds),
    Tiered(TieredBands),
}

impl ThresholdConfig {
    pub fn classify(&self, scores: &ScoreSet) -> Classification {
        match self {
            ThresholdConfig::Binary(t) => t.classify(scores),
            ThresholdConfig::Tiered(t) => t.classify(scores),
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            ThresholdConfig::Binary(_) => RuleKind::Binary,
            ThresholdConfig::Tiered(_) => RuleKind::Tiered,
        }
    }
}

/// Which family of labels a rule produces. Labels of different kinds never
/// share a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Binary,
    Tiered,
}

impl RuleKind {
    /// Labels this rule can produce, in display order
    pub fn outcomes(self) -> &'static [Classification] {
        match self {
            RuleKind::Binary => &[Classification::BurnedOut, Classification::NotBurnedOut],
            RuleKind::Tiered => &[
                Classification::HighBurnout,
                Classification::ModerateBurnout,
                Classification::LowBurnout,
                Classification::BorderlineBurnout,
            ],
        }
    }

    /// The rule that produced `label`
    pub fn of(label: Classification) -> Self {
        if RuleKind::Binary.outcomes().contains(&label) {
            RuleKind::Binary
        } else {
            RuleKind::Tiered
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Binary => write!(f, "binary"),
            RuleKind::Tiered => write!(f, "tiered"),
        }
    }
}
