//! Record source contracts.

use super::load::{load_dataset, DatasetResult};
use crate::model::emperor::EmperorRecord;
use std::path::PathBuf;

/// Supplies the full record collection for one computation pass.
pub trait RecordSource {
    fn load_records(&self) -> DatasetResult<Vec<EmperorRecord>>;
}

/// Source backed by a JSON file on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load_records(&self) -> DatasetResult<Vec<EmperorRecord>> {
        load_dataset(&self.path)
    }
}

/// Source over records already in memory, e.g. passed in by a UI layer.
pub struct InMemorySource {
    records: Vec<EmperorRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<EmperorRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn load_records(&self) -> DatasetResult<Vec<EmperorRecord>> {
        Ok(self.records.clone())
    }
}
