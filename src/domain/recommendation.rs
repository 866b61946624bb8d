use serde::Serialize;

/// How a recommendation was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Semantic,
}

impl MatchKind {
    /// Label printed by the console front end.
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::Exact => "精确匹配",
            MatchKind::Semantic => "语义匹配",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    pub match_kind: MatchKind,
    pub job_text: String,
    pub confidence: String,
}

impl RecommendationEntry {
    pub fn exact(job: &str) -> Self {
        Self {
            match_kind: MatchKind::Exact,
            job_text: job.to_string(),
            confidence: "100%".to_string(),
        }
    }

    pub fn semantic(job_text: String, score: f32) -> Self {
        Self {
            match_kind: MatchKind::Semantic,
            job_text,
            confidence: format_percent(score),
        }
    }
}

/// Format a similarity score as a whole percentage, rounding to nearest.
pub fn format_percent(score: f32) -> String {
    format!("{:.0}%", f64::from(score) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::{MatchKind, RecommendationEntry, format_percent};

    #[test]
    fn format_percent_rounds_to_whole_points() {
        assert_eq!(format_percent(0.72), "72%");
        assert_eq!(format_percent(0.656), "66%");
        assert_eq!(format_percent(0.654), "65%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn entries_serialize_with_lowercase_kind() {
        let entry = RecommendationEntry::exact("软件工程师");

        let json = serde_json::to_value(&entry).expect("entry should serialize");

        assert_eq!(json["match_kind"], "exact");
        assert_eq!(json["confidence"], "100%");
        assert_eq!(MatchKind::Semantic.label(), "语义匹配");
    }
}
