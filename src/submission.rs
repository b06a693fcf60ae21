//! Submission pipeline: consent, scoring, media, then the result table
//!
//! A submission either completes fully or leaves no trace: validation runs
//! before anything is written, and an image saved ahead of a failed table
//! append is removed again.

use crate::error::{Result, SurveyError};
use crate::store::{ImageUpload, MediaStore, ResultStore, SubmissionRecord};
use crate::{Assessment, Response, Scorer};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// What the form hands over on submit
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub response: Response,
    pub image: Option<ImageUpload>,
    /// Respondent acknowledged the consent statement
    pub consent: bool,
}

impl Submission {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_consent(mut self) -> Self {
        self.consent = true;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub assessment: Assessment,
    pub record: SubmissionRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,
}

/// Binds a scorer to its stores. One instance serves submissions one at a time.
pub struct SurveySession<S: ResultStore> {
    scorer: Scorer,
    store: S,
    media: Option<MediaStore>,
}

impl<S: ResultStore> SurveySession<S> {
    pub fn new(scorer: Scorer, store: S) -> Self {
        Self {
            scorer,
            store,
            media: None,
        }
    }

    pub fn with_media(mut self, media: MediaStore) -> Self {
        self.media = Some(media);
        self
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn submit(&mut self, submission: &Submission, at: NaiveDateTime) -> Result<SubmissionOutcome> {
        let profile = self.scorer.profile();
        if profile.requires_consent && !submission.consent {
            return Err(SurveyError::ConsentRequired);
        }

        let assessment = self.scorer.assess(&submission.response)?;
        debug!(
            ee = assessment.scores.emotional_exhaustion,
            cy = assessment.scores.cynicism,
            ae = assessment.scores.academic_efficacy,
            classification = %assessment.classification,
            "scored submission"
        );

        let image_path = match (&submission.image, profile.accepts_media) {
            (None, _) => None,
            (Some(_), false) => {
                return Err(SurveyError::MediaRejected {
                    message: format!(
                        "the {} questionnaire does not accept images",
                        profile.variant()
                    ),
                })
            }
            (Some(image), true) => {
                let media = self.media.as_ref().ok_or_else(|| SurveyError::MediaRejected {
                    message: "no media directory configured".to_string(),
                })?;
                Some(media.save(image, at)?)
            }
        };

        let image_provided = profile
            .accepts_media
            .then_some(submission.image.is_some());
        let record = SubmissionRecord::new(at, &assessment, image_provided);

        if let Err(e) = self.store.append(record.clone()) {
            if let Some(path) = &image_path {
                if let Err(rm) = std::fs::remove_file(path) {
                    warn!(path = %path.display(), error = %rm, "could not remove image after failed append");
                }
            }
            return Err(e);
        }

        Ok(SubmissionOutcome {
            assessment,
            record,
            image_path,
        })
    }
}
