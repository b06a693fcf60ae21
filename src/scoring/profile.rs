//! Scoring profile: everything a scorer needs, fixed at construction time

use super::thresholds::{BinaryThresholds, ThresholdConfig, TieredBands};
use crate::questionnaire::{Questionnaire, Variant};
use tracing::warn;

/// Immutable configuration for one questionnaire variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringProfile {
    pub questionnaire: Questionnaire,
    /// Score Academic Efficacy items as `6 - v`
    pub reverse_academic_efficacy: bool,
    pub thresholds: ThresholdConfig,
    /// Whether an image may be attached to a submission
    pub accepts_media: bool,
    /// Whether the respondent must acknowledge consent before submitting
    pub requires_consent: bool,
}

impl ScoringProfile {
    /// Raw efficacy totals under the binary rule
    pub fn standard() -> Self {
        Self {
            questionnaire: Questionnaire::for_variant(Variant::Standard),
            reverse_academic_efficacy: false,
            thresholds: ThresholdConfig::Binary(BinaryThresholds::default()),
            accepts_media: false,
            requires_consent: false,
        }
    }

    /// Revised questionnaire: reverse-scored efficacy, tiered rule
    pub fn extended() -> Self {
        Self {
            questionnaire: Questionnaire::for_variant(Variant::Extended),
            reverse_academic_efficacy: true,
            thresholds: ThresholdConfig::Tiered(TieredBands::default()),
            accepts_media: true,
            requires_consent: true,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Standard => Self::standard(),
            Variant::Extended => Self::extended(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.questionnaire.variant
    }

    /// Replace the threshold values. The rule kind is fixed by the variant, so
    /// a config of the other kind is ignored and the current one kept.
    pub fn with_thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        if thresholds.kind() != self.thresholds.kind() {
            warn!(
                variant = %self.variant(),
                expected = %self.thresholds.kind(),
                got = %thresholds.kind(),
                "ignoring thresholds for the wrong rule"
            );
            return self;
        }
        self.thresholds = thresholds;
        self
    }
}
