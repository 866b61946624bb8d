use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("failed to initialize embedding model: {0}")]
    Init(String),
    #[error("failed to generate embeddings: {0}")]
    Inference(String),
    #[error("embedding model returned {actual} vectors for {expected} inputs")]
    CountMismatch { expected: usize, actual: usize },
    #[error("embedding has dimension {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("embedding model returned an empty vector")]
    EmptyVector,
    #[error("embedding model lock poisoned")]
    Poisoned,
}

pub type EmbeddingResult<T> = Result<T, EmbeddingError>;

/// Turns text into fixed-dimension vectors.
///
/// Implementations must be deterministic for identical input within a run.
pub trait EmbeddingProvider {
    /// Embed every text, returning vectors aligned by index.
    fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<Vec<f32>>>;

    fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        self.embed_batch(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or(EmbeddingError::CountMismatch {
                expected: 1,
                actual: 0,
            })
    }
}

/// Local ONNX embedding model backed by `fastembed`.
pub struct FastEmbedProvider {
    model: Mutex<TextEmbedding>,
}

impl FastEmbedProvider {
    /// Load the model whose code ends with `model_name`, e.g.
    /// `paraphrase-multilingual-MiniLM-L12-v2`.
    pub fn try_new(model_name: &str, show_download_progress: bool) -> EmbeddingResult<Self> {
        let model = resolve_model(model_name)?;
        let embedding = TextEmbedding::try_new(
            InitOptions::new(model).with_show_download_progress(show_download_progress),
        )
        .map_err(|error| EmbeddingError::Init(format!("{error:?}")))?;

        log::info!("Initialized embedding model {model_name}");

        Ok(Self {
            model: Mutex::new(embedding),
        })
    }
}

fn resolve_model(model_name: &str) -> EmbeddingResult<EmbeddingModel> {
    TextEmbedding::list_supported_models()
        .into_iter()
        .find(|info| {
            let code = info.model_code.as_str();
            code.eq_ignore_ascii_case(model_name)
                || code
                    .rsplit('/')
                    .next()
                    .is_some_and(|name| name.eq_ignore_ascii_case(model_name))
        })
        .map(|info| info.model)
        .ok_or_else(|| EmbeddingError::Init(format!("unsupported model {model_name}")))
}

impl EmbeddingProvider for FastEmbedProvider {
    fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut model = self.model.lock().map_err(|_| EmbeddingError::Poisoned)?;
        let vectors = model
            .embed(texts.to_vec(), None)
            .map_err(|error| EmbeddingError::Inference(format!("{error:?}")))?;

        check_batch(texts.len(), vectors)
    }
}

/// Verify a batch is aligned with its inputs and holds no empty vectors.
pub(crate) fn check_batch(
    expected: usize,
    vectors: Vec<Vec<f32>>,
) -> EmbeddingResult<Vec<Vec<f32>>> {
    if vectors.len() != expected {
        return Err(EmbeddingError::CountMismatch {
            expected,
            actual: vectors.len(),
        });
    }
    if vectors.iter().any(|vector| vector.is_empty()) {
        return Err(EmbeddingError::EmptyVector);
    }
    Ok(vectors)
}

/// Cosine similarity in `[-1, 1]`.
///
/// Returns `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{
        EmbeddingError, EmbeddingProvider, EmbeddingResult, check_batch, cosine_similarity,
        resolve_model,
    };

    struct EchoLength;

    impl EmbeddingProvider for EchoLength {
        fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|text| vec![text.chars().count() as f32, 1.0])
                .collect())
        }
    }

    struct Silent;

    impl EmbeddingProvider for Silent {
        fn embed_batch(&self, _texts: &[String]) -> EmbeddingResult<Vec<Vec<f32>>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn cosine_similarity_of_parallel_vectors_is_one() {
        let score = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);

        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_similarity_of_orthogonal_and_opposite_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_similarity_of_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn embed_delegates_to_batch() {
        let vector = EchoLength.embed("护士").expect("embed should succeed");

        assert_eq!(vector, vec![2.0, 1.0]);
    }

    #[test]
    fn embed_reports_missing_vector() {
        let result = Silent.embed("护士");

        assert!(matches!(
            result,
            Err(EmbeddingError::CountMismatch {
                expected: 1,
                actual: 0
            })
        ));
    }

    #[test]
    fn check_batch_rejects_misaligned_and_empty_vectors() {
        assert!(matches!(
            check_batch(2, vec![vec![1.0]]),
            Err(EmbeddingError::CountMismatch { .. })
        ));
        assert!(matches!(
            check_batch(1, vec![vec![]]),
            Err(EmbeddingError::EmptyVector)
        ));
        assert!(check_batch(1, vec![vec![0.5]]).is_ok());
    }

    #[test]
    fn resolve_model_rejects_unknown_names() {
        assert!(matches!(
            resolve_model("definitely-not-a-model"),
            Err(EmbeddingError::Init(_))
        ));
    }
}
