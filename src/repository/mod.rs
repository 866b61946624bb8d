use serde::Deserialize;
use thiserror::Error;

use crate::domain::Record;

pub mod json;

pub use json::JsonRecordRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no usable records")]
    Empty,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Source of cleaned [`Record`]s for the build phase.
pub trait RecordReader {
    fn list_records(&self) -> RepositoryResult<Vec<Record>>;
}

/// A spreadsheet row as exported, before cleaning.
///
/// Aliases accept the spreadsheet column headers.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "专业名称")]
    pub major: Option<String>,
    #[serde(default, alias = "职业名称")]
    pub job: Option<String>,
    #[serde(default, alias = "院校类型")]
    pub category: Option<String>,
}

/// Trim the key fields and drop rows missing a major or a job.
///
/// Returns the cleaned records and the number of rows dropped.
pub fn clean_records(raw: Vec<RawRecord>) -> (Vec<Record>, usize) {
    let total = raw.len();
    let records: Vec<Record> = raw
        .into_iter()
        .filter_map(|row| {
            let major = row.major?.trim().to_string();
            let job = row.job?.trim().to_string();
            if major.is_empty() || job.is_empty() {
                return None;
            }
            Some(Record {
                major,
                job,
                category: row.category.unwrap_or_default(),
            })
        })
        .collect();
    let dropped = total - records.len();
    (records, dropped)
}

#[cfg(test)]
mod tests {
    use super::{RawRecord, clean_records};

    fn raw(major: Option<&str>, job: Option<&str>, category: Option<&str>) -> RawRecord {
        RawRecord {
            major: major.map(str::to_string),
            job: job.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn clean_records_trims_and_drops_incomplete_rows() {
        let rows = vec![
            raw(Some("  计算机科学 "), Some(" 软件工程师"), Some("普通本科")),
            raw(None, Some("会计"), Some("职教专科")),
            raw(Some("金融学"), Some("   "), Some("普通本科")),
            raw(Some("护理"), Some("护士"), None),
        ];

        let (records, dropped) = clean_records(rows);

        assert_eq!(dropped, 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].major, "计算机科学");
        assert_eq!(records[0].job, "软件工程师");
        assert_eq!(records[1].category, "");
    }

    #[test]
    fn raw_record_accepts_source_headers() {
        let row: RawRecord =
            serde_json::from_str(r#"{"专业名称": "护理", "职业名称": "护士", "院校类型": "职教中职"}"#)
                .expect("row should parse");

        assert_eq!(row.major.as_deref(), Some("护理"));
        assert_eq!(row.job.as_deref(), Some("护士"));
        assert_eq!(row.category.as_deref(), Some("职教中职"));
    }
}
