pub mod domain;
pub mod frontend;
pub mod models;
pub mod processing;
pub mod repository;

/// Minimum cosine similarity for a semantic recommendation.
pub const SIMILARITY_THRESHOLD: f32 = 0.65;

/// Maximum number of semantic recommendations returned per query.
pub const TOP_N: usize = 5;
