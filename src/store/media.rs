//! Directory of uploaded images, one file per submission

use crate::error::{Result, SurveyError};
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_MEDIA_DIR: &str = "uploaded_images";

/// Suffixed names tried before giving up on a timestamp
const MAX_NAME_ATTEMPTS: usize = 100;

/// Image types a submission may attach
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// An image supplied alongside a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Lowercased extension, one of [`ACCEPTED_EXTENSIONS`]
    extension: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Validate extension and content
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(SurveyError::MediaRejected {
                message: format!(
                    "{}: unsupported image type (expected one of: {})",
                    file_name,
                    ACCEPTED_EXTENSIONS.join(", ")
                ),
            });
        }
        if bytes.is_empty() {
            return Err(SurveyError::MediaRejected {
                message: format!("{}: file is empty", file_name),
            });
        }
        Ok(Self { extension, bytes })
    }

    /// Read an image from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| SurveyError::MediaRejected {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::new(&path.to_string_lossy(), bytes)
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Writes uploads into `dir`, named after the submission timestamp
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: PathBuf,
}

impl MediaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic file name for an upload made at `at`
    pub fn file_name(at: NaiveDateTime, extension: &str) -> String {
        format!("image_{}.{}", at.format("%Y%m%d_%H%M%S"), extension)
    }

    /// Write the blob into a new file, creating the directory if needed.
    /// Never overwrites: a name already taken gets a `_1`, `_2`, ... suffix.
    /// Returns the path written, which belongs to this upload alone.
    pub fn save(&self, upload: &ImageUpload, at: NaiveDateTime) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| SurveyError::store(&self.dir, e))?;
        let stem = format!("image_{}", at.format("%Y%m%d_%H%M%S"));

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = match attempt {
                0 => Self::file_name(at, upload.extension()),
                n => format!("{}_{}.{}", stem, n, upload.extension()),
            };
            let path = self.dir.join(name);
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(f) => f,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "image name taken");
                    continue;
                }
                Err(e) => return Err(SurveyError::store(&path, e)),
            };
            if let Err(e) = file.write_all(&upload.bytes) {
                drop(file);
                let _ = fs::remove_file(&path);
                return Err(SurveyError::store(&path, e));
            }
            info!(path = %path.display(), bytes = upload.len(), "saved uploaded image");
            return Ok(path);
        }

        Err(SurveyError::MediaRejected {
            message: format!("too many images uploaded at {}", at.format("%Y-%m-%d %H:%M:%S")),
        })
    }
}
