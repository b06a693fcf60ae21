//! Persistence collaborators: result table and media directory

mod csv_table;
mod media;
mod memory;
mod record;
mod summary;

pub use csv_table::{
    default_results_filename, CsvResultStore, DEFAULT_RESULTS_FILENAME, EXTENDED_RESULTS_FILENAME,
};
pub use media::{ImageUpload, MediaStore, ACCEPTED_EXTENSIONS, DEFAULT_MEDIA_DIR};
pub use memory::MemoryResultStore;
pub use record::{SubmissionRecord, TIMESTAMP_FORMAT};
pub use summary::{LabelCount, MeanScores, StoreSummary};

use crate::error::Result;

/// Append-only sink for submission records
pub trait ResultStore {
    /// All stored records in submission order. A store that does not exist yet is empty.
    fn load(&self) -> Result<Vec<SubmissionRecord>>;

    /// Add one record after the existing ones; never rewrites their content
    fn append(&mut self, record: SubmissionRecord) -> Result<()>;
}
