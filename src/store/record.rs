//! Persisted row for one completed submission

use crate::{Assessment, Classification, ScoreSet};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the `Timestamp` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const COL_TIMESTAMP: &str = "Timestamp";
pub const COL_EMOTIONAL_EXHAUSTION: &str = "Emotional Exhaustion";
pub const COL_CYNICISM: &str = "Cynicism";
pub const COL_ACADEMIC_EFFICACY: &str = "Academic Efficacy";
pub const COL_CLASSIFICATION: &str = "Classification";
pub const COL_IMAGE_PROVIDED: &str = "ImageProvided";

/// Immutable once created; the stores only ever append these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Emotional Exhaustion")]
    pub emotional_exhaustion: u32,
    #[serde(rename = "Cynicism")]
    pub cynicism: u32,
    #[serde(rename = "Academic Efficacy")]
    pub academic_efficacy: u32,
    #[serde(rename = "Classification")]
    pub classification: Classification,
    /// Only tracked by variants that accept media
    #[serde(rename = "ImageProvided", default, skip_serializing_if = "Option::is_none")]
    pub image_provided: Option<bool>,
}

impl SubmissionRecord {
    pub fn new(at: NaiveDateTime, assessment: &Assessment, image_provided: Option<bool>) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            emotional_exhaustion: assessment.scores.emotional_exhaustion,
            cynicism: assessment.scores.cynicism,
            academic_efficacy: assessment.scores.academic_efficacy,
            classification: assessment.classification,
            image_provided,
        }
    }

    pub fn scores(&self) -> ScoreSet {
        ScoreSet {
            emotional_exhaustion: self.emotional_exhaustion,
            cynicism: self.cynicism,
            academic_efficacy: self.academic_efficacy,
        }
    }

    /// Column values in table order
    pub(crate) fn to_row(&self, with_image_column: bool) -> Vec<String> {
        let mut row = vec![
            self.timestamp.clone(),
            self.emotional_exhaustion.to_string(),
            self.cynicism.to_string(),
            self.academic_efficacy.to_string(),
            self.classification.label().to_string(),
        ];
        if with_image_column {
            row.push(
                self.image_provided
                    .map(|b| b.to_string())
                    .unwrap_or_default(),
            );
        }
        row
    }
}

pub(crate) fn header(with_image_column: bool) -> Vec<&'static str> {
    let mut cols = vec![
        COL_TIMESTAMP,
        COL_EMOTIONAL_EXHAUSTION,
        COL_CYNICISM,
        COL_ACADEMIC_EFFICACY,
        COL_CLASSIFICATION,
    ];
    if with_image_column {
        cols.push(COL_IMAGE_PROVIDED);
    }
    cols
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap()
    }

    fn assessment() -> Assessment {
        Assessment {
            scores: ScoreSet {
                emotional_exhaustion: 21,
                cynicism: 18,
                academic_efficacy: 0,
            },
            classification: Classification::HighBurnout,
        }
    }

    #[test]
    fn new_formats_timestamp() {
        let record = SubmissionRecord::new(at(), &assessment(), Some(true));
        assert_eq!(record.timestamp, "2025-03-14 09:26:53");
        assert_eq!(record.scores(), assessment().scores);
    }

    #[test]
    fn row_matches_header_width() {
        let record = SubmissionRecord::new(at(), &assessment(), None);
        assert_eq!(record.to_row(false).len(), header(false).len());
        let row = record.to_row(true);
        assert_eq!(row.len(), header(true).len());
        assert_eq!(row[4], "High Burnout");
        assert_eq!(row[5], "");
    }
}
