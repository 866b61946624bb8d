use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Record;
use crate::repository::{
    RawRecord, RecordReader, RepositoryError, RepositoryResult, clean_records,
};

/// Reads records from a JSON array of spreadsheet rows.
pub struct JsonRecordRepository {
    path: PathBuf,
}

impl JsonRecordRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordReader for JsonRecordRepository {
    fn list_records(&self) -> RepositoryResult<Vec<Record>> {
        let contents = fs::read_to_string(&self.path)?;
        let rows: Vec<RawRecord> = serde_json::from_str(&contents)?;

        let (records, dropped) = clean_records(rows);
        if dropped > 0 {
            log::warn!(
                "Dropped {dropped} rows without a major or job from {}",
                self.path.display()
            );
        }
        if records.is_empty() {
            return Err(RepositoryError::Empty);
        }

        log::info!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
