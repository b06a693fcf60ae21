//! Aggregate view over stored submissions

use super::record::SubmissionRecord;
use crate::Classification;
use serde::Serialize;

/// Mean subscale totals across stored rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeanScores {
    pub emotional_exhaustion: f64,
    pub cynicism: f64,
    pub academic_efficacy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    pub classification: Classification,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub submissions: usize,
    /// Labels in first-seen order
    pub by_classification: Vec<LabelCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_scores: Option<MeanScores>,
    pub images_provided: usize,
}

impl StoreSummary {
    pub fn from_records(records: &[SubmissionRecord]) -> Self {
        let mut by_classification: Vec<LabelCount> = Vec::new();
        for record in records {
            match by_classification
                .iter_mut()
                .find(|c| c.classification == record.classification)
            {
                Some(entry) => entry.count += 1,
                None => by_classification.push(LabelCount {
                    classification: record.classification,
                    count: 1,
                }),
            }
        }

        let mean_scores = if records.is_empty() {
            None
        } else {
            let n = records.len() as f64;
            let mean = |f: fn(&SubmissionRecord) -> u32| {
                records.iter().map(|r| f(r) as f64).sum::<f64>() / n
            };
            Some(MeanScores {
                emotional_exhaustion: mean(|r| r.emotional_exhaustion),
                cynicism: mean(|r| r.cynicism),
                academic_efficacy: mean(|r| r.academic_efficacy),
            })
        };

        Self {
            submissions: records.len(),
            by_classification,
            mean_scores,
            images_provided: records
                .iter()
                .filter(|r| r.image_provided == Some(true))
                .count(),
        }
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.by_classification
            .iter()
            .find(|c| c.classification == classification)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ee: u32, cy: u32, ae: u32, c: Classification, image: Option<bool>) -> SubmissionRecord {
        SubmissionRecord {
            timestamp: "2025-01-01 00:00:00".to_string(),
            emotional_exhaustion: ee,
            cynicism: cy,
            academic_efficacy: ae,
            classification: c,
            image_provided: image,
        }
    }

    #[test]
    fn empty_store_has_no_means() {
        let summary = StoreSummary::from_records(&[]);
        assert_eq!(summary.submissions, 0);
        assert!(summary.mean_scores.is_none());
        assert!(summary.by_classification.is_empty());
    }

    #[test]
    fn counts_labels_and_images() {
        let records = vec![
            row(10, 4, 20, Classification::BurnedOut, None),
            row(20, 8, 30, Classification::NotBurnedOut, Some(true)),
            row(30, 0, 10, Classification::BurnedOut, Some(false)),
        ];
        let summary = StoreSummary::from_records(&records);
        assert_eq!(summary.submissions, 3);
        assert_eq!(summary.count(Classification::BurnedOut), 2);
        assert_eq!(summary.count(Classification::NotBurnedOut), 1);
        assert_eq!(summary.count(Classification::HighBurnout), 0);
        assert_eq!(summary.by_classification[0].classification, Classification::BurnedOut);
        assert_eq!(summary.images_provided, 1);

        let means = summary.mean_scores.unwrap();
        assert_eq!(means.emotional_exhaustion, 20.0);
        assert_eq!(means.cynicism, 4.0);
        assert_eq!(means.academic_efficacy, 20.0);
    }
}
