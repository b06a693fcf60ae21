//! Error taxonomy for survey scoring and persistence

use crate::Subscale;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scorer, the submission pipeline and the stores
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Malformed or out-of-range response. Raised before any scoring happens.
    #[error("Validation error ({subscale}): {message}")]
    Validation { subscale: Subscale, message: String },

    /// Result store or media store could not be read or written
    #[error("Store unavailable: {}: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result table exists but could not be parsed, or holds results the
    /// new row must not be mixed with. The file is left as it was.
    #[error("Result table unusable: {}: {message}", path.display())]
    StoreCorrupt { path: PathBuf, message: String },

    /// Supplied image was not accepted by the media store
    #[error("Media rejected: {message}")]
    MediaRejected { message: String },

    /// The active questionnaire requires consent before submitting
    #[error("Consent is required before submitting this questionnaire")]
    ConsentRequired,
}

impl SurveyError {
    pub(crate) fn validation(subscale: Subscale, message: impl Into<String>) -> Self {
        SurveyError::Validation {
            subscale,
            message: message.into(),
        }
    }

    pub(crate) fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SurveyError::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    /// True when the submitter, not the environment, caused the failure
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SurveyError::Validation { .. }
                | SurveyError::MediaRejected { .. }
                | SurveyError::ConsentRequired
        )
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_subscale() {
        let err = SurveyError::validation(Subscale::Cynicism, "rating 7 is outside 0-6");
        assert_eq!(
            err.to_string(),
            "Validation error (Cynicism): rating 7 is outside 0-6"
        );
        assert!(err.is_rejection());
    }

    #[test]
    fn store_error_is_not_a_rejection() {
        let err = SurveyError::store(
            "mbi_results.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("mbi_results.csv"));
        assert!(!err.is_rejection());
    }
}
