//! In-process result store for embedding and tests

use super::record::SubmissionRecord;
use super::ResultStore;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryResultStore {
    records: Vec<SubmissionRecord>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }
}

impl ResultStore for MemoryResultStore {
    fn load(&self) -> Result<Vec<SubmissionRecord>> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: SubmissionRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }
}
