//! Config schema and deserialization

use crate::questionnaire::Variant;
use crate::scoring::{Band, BinaryThresholds, ScoringProfile, ThresholdConfig, TieredBands};
use crate::store::{default_results_filename, DEFAULT_MEDIA_DIR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Partial override of the binary rule's cutoffs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryOverride {
    #[serde(default)]
    pub emotional_exhaustion: Option<u32>,
    #[serde(default)]
    pub cynicism: Option<u32>,
    #[serde(default)]
    pub academic_efficacy: Option<u32>,
}

impl BinaryOverride {
    fn apply(&self, mut base: BinaryThresholds) -> BinaryThresholds {
        if let Some(v) = self.emotional_exhaustion {
            base.emotional_exhaustion = v;
        }
        if let Some(v) = self.cynicism {
            base.cynicism = v;
        }
        if let Some(v) = self.academic_efficacy {
            base.academic_efficacy = v;
        }
        base
    }

    fn merge_from(&mut self, base: BinaryOverride) {
        self.emotional_exhaustion = self.emotional_exhaustion.or(base.emotional_exhaustion);
        self.cynicism = self.cynicism.or(base.cynicism);
        self.academic_efficacy = self.academic_efficacy.or(base.academic_efficacy);
    }
}

/// Partial override of the tiered rule's bands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieredOverride {
    #[serde(default)]
    pub high_emotional_exhaustion_above: Option<u32>,
    #[serde(default)]
    pub high_cynicism_above: Option<u32>,
    #[serde(default)]
    pub high_academic_efficacy_below: Option<u32>,
    #[serde(default)]
    pub moderate_emotional_exhaustion: Option<Band>,
    #[serde(default)]
    pub moderate_cynicism: Option<Band>,
    #[serde(default)]
    pub low_emotional_exhaustion_below: Option<u32>,
    #[serde(default)]
    pub low_cynicism_below: Option<u32>,
    #[serde(default)]
    pub low_academic_efficacy_above: Option<u32>,
}

impl TieredOverride {
    fn apply(&self, base: TieredBands) -> TieredBands {
        TieredBands {
            high_emotional_exhaustion_above: self
                .high_emotional_exhaustion_above
                .unwrap_or(base.high_emotional_exhaustion_above),
            high_cynicism_above: self.high_cynicism_above.unwrap_or(base.high_cynicism_above),
            high_academic_efficacy_below: self
                .high_academic_efficacy_below
                .unwrap_or(base.high_academic_efficacy_below),
            moderate_emotional_exhaustion: self
                .moderate_emotional_exhaustion
                .unwrap_or(base.moderate_emotional_exhaustion),
            moderate_cynicism: self.moderate_cynicism.unwrap_or(base.moderate_cynicism),
            low_emotional_exhaustion_below: self
                .low_emotional_exhaustion_below
                .unwrap_or(base.low_emotional_exhaustion_below),
            low_cynicism_below: self.low_cynicism_below.unwrap_or(base.low_cynicism_below),
            low_academic_efficacy_above: self
                .low_academic_efficacy_above
                .unwrap_or(base.low_academic_efficacy_above),
        }
    }

    fn merge_from(&mut self, base: TieredOverride) {
        self.high_emotional_exhaustion_above = self
            .high_emotional_exhaustion_above
            .or(base.high_emotional_exhaustion_above);
        self.high_cynicism_above = self.high_cynicism_above.or(base.high_cynicism_above);
        self.high_academic_efficacy_below = self
            .high_academic_efficacy_below
            .or(base.high_academic_efficacy_below);
        self.moderate_emotional_exhaustion = self
            .moderate_emotional_exhaustion
            .or(base.moderate_emotional_exhaustion);
        self.moderate_cynicism = self.moderate_cynicism.or(base.moderate_cynicism);
        self.low_emotional_exhaustion_below = self
            .low_emotional_exhaustion_below
            .or(base.low_emotional_exhaustion_below);
        self.low_cynicism_below = self.low_cynicism_below.or(base.low_cynicism_below);
        self.low_academic_efficacy_above = self
            .low_academic_efficacy_above
            .or(base.low_academic_efficacy_above);
    }
}

/// Threshold overrides per rule. Only the block for the active variant's rule is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdOverrides {
    #[serde(default)]
    pub binary: BinaryOverride,
    #[serde(default)]
    pub tiered: TieredOverride,
}

/// Root config structure for .mbissrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Active questionnaire. Default: standard
    #[serde(default)]
    pub variant: Option<Variant>,

    /// Result table path. Default: mbi_results.csv, or
    /// mbi_results_extended.csv for the extended variant
    #[serde(default)]
    pub results_file: Option<PathBuf>,

    /// Directory for uploaded images. Default: uploaded_images
    #[serde(default)]
    pub media_dir: Option<PathBuf>,

    #[serde(default)]
    pub thresholds: ThresholdOverrides,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        variant: Option<Variant>,
        results_file: Option<&Path>,
        media_dir: Option<&Path>,
    ) -> Self {
        if variant.is_some() {
            self.variant = variant;
        }
        if let Some(p) = results_file {
            self.results_file = Some(p.to_path_buf());
        }
        if let Some(p) = media_dir {
            self.media_dir = Some(p.to_path_buf());
        }
        self
    }

    /// Merge another config into this one (for extends). This config wins.
    pub fn merge_from(&mut self, base: Config) {
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.variant.is_none() {
            self.variant = base.variant;
        }
        if self.results_file.is_none() {
            self.results_file = base.results_file;
        }
        if self.media_dir.is_none() {
            self.media_dir = base.media_dir;
        }
        self.thresholds.binary.merge_from(base.thresholds.binary);
        self.thresholds.tiered.merge_from(base.thresholds.tiered);
    }

    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    pub fn results_file(&self) -> PathBuf {
        self.results_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_results_filename(self.variant())))
    }

    pub fn media_dir(&self) -> PathBuf {
        self.media_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR))
    }

    /// Profile for the active variant with this config's threshold overrides applied
    pub fn scoring_profile(&self) -> ScoringProfile {
        let profile = ScoringProfile::for_variant(self.variant());
        let thresholds = match profile.thresholds {
            ThresholdConfig::Binary(t) => ThresholdConfig::Binary(self.thresholds.binary.apply(t)),
            ThresholdConfig::Tiered(t) => ThresholdConfig::Tiered(self.thresholds.tiered.apply(t)),
        };
        profile.with_thresholds(thresholds)
    }
}
