use serde::{Deserialize, Serialize};

/// A single cleaned row linking a major to a job title within a category.
///
/// `major` and `job` are trimmed and never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub major: String,
    pub job: String,
    pub category: String,
}

impl Record {
    pub fn new(major: &str, job: &str, category: &str) -> Self {
        Self {
            major: major.to_string(),
            job: job.to_string(),
            category: category.to_string(),
        }
    }
}

/// A recommendable `(job, category)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JobDescriptor {
    pub job: String,
    pub category: String,
}

impl JobDescriptor {
    /// Text shown to users and fed to the embedding model: `"{job} ({category})"`.
    pub fn render(&self) -> String {
        format!("{} ({})", self.job, self.category)
    }
}

impl From<&Record> for JobDescriptor {
    fn from(record: &Record) -> Self {
        Self {
            job: record.job.clone(),
            category: record.category.clone(),
        }
    }
}
