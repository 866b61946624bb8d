use std::collections::HashMap;

use crate::domain::Record;

/// Maps each major to the distinct jobs recorded for it, in first-seen order.
///
/// Lookups are case-sensitive and do no normalization.
#[derive(Debug, Clone, Default)]
pub struct ExactMatchIndex {
    jobs_by_major: HashMap<String, Vec<String>>,
}

impl ExactMatchIndex {
    pub fn from_records(records: &[Record]) -> Self {
        let mut jobs_by_major: HashMap<String, Vec<String>> = HashMap::new();
        for record in records {
            let jobs = jobs_by_major.entry(record.major.clone()).or_default();
            if !jobs.contains(&record.job) {
                jobs.push(record.job.clone());
            }
        }
        Self { jobs_by_major }
    }

    /// Jobs known for `major`; empty when the major is unknown.
    pub fn lookup(&self, major: &str) -> &[String] {
        self.jobs_by_major
            .get(major)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
