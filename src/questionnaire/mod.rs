//! Questionnaire variants and their question banks

mod bank;

use crate::{Subscale, MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};

/// Which questionnaire is active. Selects wording, scoring polarity and rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Published MBI-SS wording scored with the binary burned-out rule
    #[default]
    Standard,
    /// Revised wording scored with the four-band rule. Academic Efficacy is
    /// reverse-scored and submissions need consent.
    Extended,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Standard => write!(f, "standard"),
            Variant::Extended => write!(f, "extended"),
        }
    }
}

/// Prompts for one subscale, in presentation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub subscale: Subscale,
    pub questions: Vec<String>,
}

/// Immutable set of prompts for a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub variant: Variant,
    pub title: String,
    pub instructions: String,
    pub sections: Vec<Section>,
}

impl Questionnaire {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Standard => Self::build(
                variant,
                "MBI-SS Burnout Assessment",
                [
                    bank::STANDARD_EMOTIONAL_EXHAUSTION,
                    bank::STANDARD_CYNICISM,
                    bank::STANDARD_ACADEMIC_EFFICACY,
                ],
            ),
            Variant::Extended => Self::build(
                variant,
                "MBI-SS Student Burnout Survey",
                [
                    bank::EXTENDED_EMOTIONAL_EXHAUSTION,
                    bank::EXTENDED_CYNICISM,
                    bank::EXTENDED_ACADEMIC_EFFICACY,
                ],
            ),
        }
    }

    fn build(variant: Variant, title: &str, banks: [&[&str]; 3]) -> Self {
        let sections = Subscale::ALL
            .iter()
            .zip(banks)
            .map(|(&subscale, bank)| Section {
                subscale,
                questions: bank.iter().map(|q| q.to_string()).collect(),
            })
            .collect();

        Self {
            variant,
            title: title.to_string(),
            instructions: format!(
                "Please respond to the following questions based on how often you feel this way. ({} = Never, {} = Always)",
                MIN_RATING, MAX_RATING
            ),
            sections,
        }
    }

    /// Prompts for a subscale (empty if the subscale has no section)
    pub fn questions(&self, subscale: Subscale) -> &[String] {
        self.sections
            .iter()
            .find(|s| s.subscale == subscale)
            .map(|s| s.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn question_count(&self, subscale: Subscale) -> usize {
        self.questions(subscale).len()
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_share_shape() {
        let standard = Questionnaire::for_variant(Variant::Standard);
        let extended = Questionnaire::for_variant(Variant::Extended);
        for subscale in Subscale::ALL {
            assert_eq!(
                standard.question_count(subscale),
                extended.question_count(subscale),
                "{} count differs",
                subscale
            );
        }
        assert_eq!(standard.question_count(Subscale::EmotionalExhaustion), 5);
        assert_eq!(standard.question_count(Subscale::Cynicism), 4);
        assert_eq!(standard.question_count(Subscale::AcademicEfficacy), 6);
        assert_eq!(standard.total_questions(), 15);
    }

    #[test]
    fn variants_differ_in_wording() {
        let standard = Questionnaire::for_variant(Variant::Standard);
        let extended = Questionnaire::for_variant(Variant::Extended);
        assert_ne!(
            standard.questions(Subscale::Cynicism),
            extended.questions(Subscale::Cynicism)
        );
    }

    #[test]
    fn sections_follow_subscale_order() {
        let q = Questionnaire::for_variant(Variant::Standard);
        let order: Vec<Subscale> = q.sections.iter().map(|s| s.subscale).collect();
        assert_eq!(order, Subscale::ALL.to_vec());
        assert!(q.instructions.contains("0 = Never"));
        assert!(q.instructions.contains("6 = Always"));
    }

    #[test]
    fn variant_parses_lowercase() {
        let v: Variant = serde_json::from_str("\"extended\"").unwrap();
        assert_eq!(v, Variant::Extended);
        assert_eq!(Variant::default(), Variant::Standard);
        assert_eq!(Variant::Extended.to_string(), "extended");
    }
}
