//! JSON reporter for machine-readable output

use crate::questionnaire::Questionnaire;
use crate::scoring::{ScoringProfile, ThresholdConfig};
use crate::store::{StoreSummary, SubmissionRecord};
use crate::submission::SubmissionOutcome;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// A completed submission with the rule that classified it
    pub fn report(&self, profile: &ScoringProfile, outcome: &SubmissionOutcome) -> String {
        self.render(&JsonSubmission {
            variant: profile.variant().to_string(),
            reverse_scored_academic_efficacy: profile.reverse_academic_efficacy,
            thresholds: &profile.thresholds,
            outcome,
        })
    }

    pub fn report_questions(&self, questionnaire: &Questionnaire) -> String {
        self.render(questionnaire)
    }

    pub fn report_summary(&self, records: &[SubmissionRecord], summary: &StoreSummary) -> String {
        self.render(&JsonResults { records, summary })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSubmission<'a> {
    variant: String,
    reverse_scored_academic_efficacy: bool,
    thresholds: &'a ThresholdConfig,
    #[serde(flatten)]
    outcome: &'a SubmissionOutcome,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResults<'a> {
    records: &'a [SubmissionRecord],
    summary: &'a StoreSummary,
}
