//! Validation, subscale totals and classification

use super::profile::ScoringProfile;
use crate::error::{Result, SurveyError};
use crate::{Assessment, Response, ScoreSet, Subscale, MAX_RATING, MIN_RATING};

/// Pure scorer bound to one profile. Holds no per-submission state.
#[derive(Debug, Clone)]
pub struct Scorer {
    profile: ScoringProfile,
}

impl Scorer {
    pub fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Check every subscale has one in-range rating per question
    pub fn validate(&self, response: &Response) -> Result<()> {
        let questionnaire = &self.profile.questionnaire;
        for subscale in Subscale::ALL {
            let ratings = response.ratings(subscale);
            let expected = questionnaire.question_count(subscale);
            if ratings.len() != expected {
                return Err(SurveyError::validation(
                    subscale,
                    format!(
                        "expected {} ratings, got {}",
                        expected,
                        ratings.len()
                    ),
                ));
            }
            if let Some((index, value)) = ratings
                .iter()
                .enumerate()
                .find(|(_, v)| !(MIN_RATING..=MAX_RATING).contains(*v))
            {
                return Err(SurveyError::validation(
                    subscale,
                    format!(
                        "question {} has rating {}, expected {}-{}",
                        index + 1,
                        value,
                        MIN_RATING,
                        MAX_RATING
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Validate, then total each subscale
    pub fn score(&self, response: &Response) -> Result<ScoreSet> {
        self.validate(response)?;
        Ok(ScoreSet {
            emotional_exhaustion: sum(response.ratings(Subscale::EmotionalExhaustion)),
            cynicism: sum(response.ratings(Subscale::Cynicism)),
            academic_efficacy: if self.profile.reverse_academic_efficacy {
                reverse_sum(response.ratings(Subscale::AcademicEfficacy))
            } else {
                sum(response.ratings(Subscale::AcademicEfficacy))
            },
        })
    }

    /// Score and classify in one step
    pub fn assess(&self, response: &Response) -> Result<Assessment> {
        let scores = self.score(response)?;
        let classification = self.profile.thresholds.classify(&scores);
        Ok(Assessment {
            scores,
            classification,
        })
    }
}

// Callers validate first, so every rating is within 0..=6.
fn sum(ratings: &[i32]) -> u32 {
    ratings.iter().map(|&v| v as u32).sum()
}

fn reverse_sum(ratings: &[i32]) -> u32 {
    ratings.iter().map(|&v| (MAX_RATING - v) as u32).sum()
}
