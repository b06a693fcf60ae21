//! Console reporter with colored output

use crate::questionnaire::Questionnaire;
use crate::scoring::{ScoringProfile, ThresholdConfig};
use crate::store::{StoreSummary, SubmissionRecord};
use crate::submission::SubmissionOutcome;
use crate::{Classification, Subscale};
use colored::Colorize;
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to list individual rows in store summaries
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn report(&self, profile: &ScoringProfile, outcome: &SubmissionOutcome) {
        print!("{}", self.render(profile, outcome));
    }

    /// One line per submission
    pub fn report_quiet(&self, outcome: &SubmissionOutcome) {
        let scores = &outcome.assessment.scores;
        println!(
            "EE {} | CY {} | AE {} => {}",
            scores.emotional_exhaustion,
            scores.cynicism,
            scores.academic_efficacy,
            self.colorize_label(outcome.assessment.classification)
        );
    }

    pub fn report_questions(&self, questionnaire: &Questionnaire) {
        print!("{}", self.render_questions(questionnaire));
    }

    pub fn report_summary(&self, records: &[SubmissionRecord], summary: &StoreSummary) {
        print!("{}", self.render_summary(records, summary));
    }

    /// Scores next to their thresholds, then the label
    pub fn render(&self, profile: &ScoringProfile, outcome: &SubmissionOutcome) -> String {
        let mut out = String::new();
        let scores = &outcome.assessment.scores;

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bold("Results"));
        for subscale in Subscale::ALL {
            let _ = writeln!(
                out,
                "   {} Score: {} ({})",
                subscale,
                self.bold(&scores.get(subscale).to_string()),
                threshold_hint(&profile.thresholds, subscale)
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "   Burnout Classification: {}",
            self.colorize_label(outcome.assessment.classification)
        );
        if let Some(ref path) = outcome.image_path {
            let _ = writeln!(out, "   Image saved to {}", path.display());
        }
        let _ = writeln!(out);
        out
    }

    pub fn render_questions(&self, questionnaire: &Questionnaire) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.bold(&questionnaire.title));
        let _ = writeln!(out, "{}", questionnaire.instructions);
        for section in &questionnaire.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.bold(section.subscale.label()));
            for (i, question) in section.questions.iter().enumerate() {
                let _ = writeln!(out, "  {:>2}. {}", i + 1, question);
            }
        }
        out
    }

    pub fn render_summary(&self, records: &[SubmissionRecord], summary: &StoreSummary) -> String {
        let mut out = String::new();
        if summary.submissions == 0 {
            let _ = writeln!(out, "No submissions stored yet.");
            return out;
        }

        if self.verbose {
            for r in records {
                let _ = writeln!(
                    out,
                    "{}  EE {:>2}  CY {:>2}  AE {:>2}  {}",
                    r.timestamp,
                    r.emotional_exhaustion,
                    r.cynicism,
                    r.academic_efficacy,
                    r.classification
                );
            }
            let _ = writeln!(out, "{}", "-".repeat(60));
        }

        let _ = writeln!(out, "{}", self.bold(&format!("Submissions: {}", summary.submissions)));
        for entry in &summary.by_classification {
            let pct = entry.count as f64 * 100.0 / summary.submissions as f64;
            let _ = writeln!(
                out,
                "   {:<20} {:>4} ({:.0}%)",
                entry.classification.label(),
                entry.count,
                pct
            );
        }
        if let Some(means) = summary.mean_scores {
            let _ = writeln!(
                out,
                "   Mean scores: EE {:.1} | CY {:.1} | AE {:.1}",
                means.emotional_exhaustion, means.cynicism, means.academic_efficacy
            );
        }
        if summary.images_provided > 0 {
            let _ = writeln!(out, "   Images provided: {}", summary.images_provided);
        }
        out
    }

    fn bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn colorize_label(&self, label: Classification) -> String {
        let text = label.label();
        if !self.use_colors {
            return text.to_string();
        }
        if label.is_elevated() {
            return text.red().bold().to_string();
        }
        match label {
            Classification::ModerateBurnout | Classification::BorderlineBurnout => {
                text.yellow().bold().to_string()
            }
            _ => text.green().bold().to_string(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Short description of the cutoffs that apply to a subscale
pub fn threshold_hint(thresholds: &ThresholdConfig, subscale: Subscale) -> String {
    match thresholds {
        ThresholdConfig::Binary(t) => match subscale {
            Subscale::EmotionalExhaustion => format!("Threshold: ≥{}", t.emotional_exhaustion),
            Subscale::Cynicism => format!("Threshold: ≥{}", t.cynicism),
            Subscale::AcademicEfficacy => format!("Threshold: ≤{}", t.academic_efficacy),
        },
        ThresholdConfig::Tiered(t) => match subscale {
            Subscale::EmotionalExhaustion => format!(
                "High: >{}, Moderate: {}-{}, Low: <{}",
                t.high_emotional_exhaustion_above,
                t.moderate_emotional_exhaustion.min,
                t.moderate_emotional_exhaustion.max,
                t.low_emotional_exhaustion_below
            ),
            Subscale::Cynicism => format!(
                "High: >{}, Moderate: {}-{}, Low: <{}",
                t.high_cynicism_above,
                t.moderate_cynicism.min,
                t.moderate_cynicism.max,
                t.low_cynicism_below
            ),
            Subscale::AcademicEfficacy => format!(
                "reverse-scored; High burnout: <{}, Low burnout: >{}",
                t.high_academic_efficacy_below, t.low_academic_efficacy_above
            ),
        },
    }
}
