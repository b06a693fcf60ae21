//! Result table persisted as a CSV file

use super::record::{header, SubmissionRecord, COL_IMAGE_PROVIDED};
use super::ResultStore;
use crate::error::{Result, SurveyError};
use crate::questionnaire::Variant;
use crate::scoring::RuleKind;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_RESULTS_FILENAME: &str = "mbi_results.csv";
/// Default table for the extended variant, kept apart because its efficacy
/// totals are reverse-scored
pub const EXTENDED_RESULTS_FILENAME: &str = "mbi_results_extended.csv";

/// Table a variant writes to when no path is configured
pub fn default_results_filename(variant: Variant) -> &'static str {
    match variant {
        Variant::Standard => DEFAULT_RESULTS_FILENAME,
        Variant::Extended => EXTENDED_RESULTS_FILENAME,
    }
}

/// Rows already in the table plus the header shape they were written with
struct Table {
    has_image_column: bool,
    records: Vec<SubmissionRecord>,
}

/// CSV-backed store. Every append reads the existing rows, adds one and
/// rewrites the file through a sibling temp file, so prior rows survive a
/// failed write. Assumes a single writer at a time.
#[derive(Debug, Clone)]
pub struct CsvResultStore {
    path: PathBuf,
    with_image_column: bool,
}

impl CsvResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            with_image_column: false,
        }
    }

    /// Include the `ImageProvided` column
    pub fn with_image_column(mut self) -> Self {
        self.with_image_column = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_table(
        &self,
        path: &Path,
        records: &[SubmissionRecord],
        with_image_column: bool,
    ) -> io::Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(header(with_image_column))?;
        for record in records {
            writer.write_record(record.to_row(with_image_column))?;
        }
        writer.flush()
    }

    fn corrupt(&self, message: String) -> SurveyError {
        SurveyError::StoreCorrupt {
            path: self.path.clone(),
            message,
        }
    }

    fn read_table(&self) -> Result<Table> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no result table yet, starting empty");
                return Ok(Table {
                    has_image_column: false,
                    records: Vec::new(),
                });
            }
            Err(e) => return Err(SurveyError::store(&self.path, e)),
        };

        let mut reader = csv::Reader::from_reader(file);
        let has_image_column = reader
            .headers()
            .map_err(|e| self.corrupt(format!("header: {}", e)))?
            .iter()
            .any(|col| col == COL_IMAGE_PROVIDED);

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<SubmissionRecord>().enumerate() {
            let record = row.map_err(|e| self.corrupt(format!("row {}: {}", i + 1, e)))?;
            records.push(record);
        }
        Ok(Table {
            has_image_column,
            records,
        })
    }
}

impl ResultStore for CsvResultStore {
    fn load(&self) -> Result<Vec<SubmissionRecord>> {
        Ok(self.read_table()?.records)
    }

    fn append(&mut self, record: SubmissionRecord) -> Result<()> {
        let Table {
            has_image_column,
            mut records,
        } = self.read_table()?;

        let new_rule = RuleKind::of(record.classification);
        if let Some(existing) = records
            .iter()
            .map(|r| RuleKind::of(r.classification))
            .find(|rule| *rule != new_rule)
        {
            return Err(self.corrupt(format!(
                "table holds {} results; refusing to add a {} result",
                existing, new_rule
            )));
        }

        records.push(record);
        let with_image_column = self.with_image_column || has_image_column;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SurveyError::store(parent, e))?;
        }

        let tmp = self.temp_path();
        if let Err(e) = self.write_table(&tmp, &records, with_image_column) {
            let _ = fs::remove_file(&tmp);
            return Err(SurveyError::store(&self.path, e));
        }
        fs::rename(&tmp, &self.path).map_err(|e| SurveyError::store(&self.path, e))?;

        info!(path = %self.path.display(), rows = records.len(), "appended submission");
        Ok(())
    }
}
