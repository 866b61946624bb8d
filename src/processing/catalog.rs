use std::collections::HashSet;

use crate::domain::{JobDescriptor, Record};

/// Distinct majors and job descriptors, in first-occurrence order.
#[derive(Debug, Clone)]
pub struct Catalog {
    record_count: usize,
    unique_majors: Vec<String>,
    unique_jobs: Vec<JobDescriptor>,
}

/// Counts printed when the system starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub records: usize,
    pub majors: usize,
    pub jobs: usize,
}

impl Catalog {
    pub fn from_records(records: &[Record]) -> Self {
        let mut seen_majors = HashSet::new();
        let mut seen_jobs = HashSet::new();
        let mut unique_majors = Vec::new();
        let mut unique_jobs = Vec::new();

        for record in records {
            if seen_majors.insert(record.major.as_str()) {
                unique_majors.push(record.major.clone());
            }
            let descriptor = JobDescriptor::from(record);
            if !seen_jobs.contains(&descriptor) {
                seen_jobs.insert(descriptor.clone());
                unique_jobs.push(descriptor);
            }
        }

        Self {
            record_count: records.len(),
            unique_majors,
            unique_jobs,
        }
    }

    pub fn unique_jobs(&self) -> &[JobDescriptor] {
        &self.unique_jobs
    }

    /// Distinct categories, in the order they first appear among job descriptors.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.unique_jobs
            .iter()
            .map(|descriptor| descriptor.category.as_str())
            .filter(|category| !category.is_empty() && seen.insert(*category))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            records: self.record_count,
            majors: self.unique_majors.len(),
            jobs: self.unique_jobs.len(),
        }
    }
}
