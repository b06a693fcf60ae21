//! Scorer/classifier core

mod profile;
mod scorer;
pub mod thresholds;

pub use profile::ScoringProfile;
pub use scorer::Scorer;
pub use thresholds::{Band, BinaryThresholds, RuleKind, ThresholdConfig, TieredBands};

use crate::{Assessment, Response};

/// Score and classify a response against a profile, without keeping a scorer around
pub fn classify(response: &Response, profile: &ScoringProfile) -> crate::Result<Assessment> {
    Scorer::new(profile.clone()).assess(response)
}
