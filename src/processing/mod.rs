use thiserror::Error;

use crate::processing::embedding::EmbeddingError;

pub mod catalog;
pub mod embedding;
pub mod exact;
pub mod recommender;
pub mod similarity;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("major must not be empty")]
    InvalidInput,
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

pub type RecommendResult<T> = Result<T, RecommendError>;
