use crate::domain::{Record, RecommendationEntry};
use crate::processing::catalog::Catalog;
use crate::processing::embedding::EmbeddingProvider;
use crate::processing::exact::ExactMatchIndex;
use crate::processing::similarity::{JobEmbeddingTable, SimilarityEngine};
use crate::processing::{RecommendError, RecommendResult};

/// Semantic search cut-offs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    pub threshold: f32,
    pub top_n: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: crate::SIMILARITY_THRESHOLD,
            top_n: crate::TOP_N,
        }
    }
}

/// Exact lookup first, semantic search as fallback.
///
/// Holds only read-only state, so `recommend` can be shared across threads
/// when the provider allows it.
pub struct Recommender<P> {
    index: ExactMatchIndex,
    engine: SimilarityEngine,
    provider: P,
    settings: MatchSettings,
}

impl<P> Recommender<P>
where
    P: EmbeddingProvider,
{
    pub fn new(
        index: ExactMatchIndex,
        engine: SimilarityEngine,
        provider: P,
        settings: MatchSettings,
    ) -> Self {
        Self {
            index,
            engine,
            provider,
            settings,
        }
    }

    /// Run the build phase: catalog, exact index and job embeddings.
    pub fn bootstrap(
        records: &[Record],
        provider: P,
        settings: MatchSettings,
    ) -> RecommendResult<Self> {
        let catalog = Catalog::from_records(records);
        let index = ExactMatchIndex::from_records(records);
        let table = JobEmbeddingTable::build(&catalog, &provider)?;
        let engine = SimilarityEngine::new(catalog, table)?;
        Ok(Self::new(index, engine, provider, settings))
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    /// Recommend jobs for `major`.
    ///
    /// A known major returns all of its jobs as exact matches and ignores
    /// `category_filter`. Otherwise the major is embedded and searched
    /// semantically. An empty result is not an error.
    pub fn recommend(
        &self,
        major: &str,
        category_filter: Option<&str>,
    ) -> RecommendResult<Vec<RecommendationEntry>> {
        let major = major.trim();
        if major.is_empty() {
            return Err(RecommendError::InvalidInput);
        }

        let exact = self.index.lookup(major);
        if !exact.is_empty() {
            return Ok(exact
                .iter()
                .map(|job| RecommendationEntry::exact(job))
                .collect());
        }

        let query = self.provider.embed(major)?;
        let hits = self.engine.search(
            &query,
            category_filter,
            self.settings.threshold,
            self.settings.top_n,
        )?;

        Ok(hits
            .into_iter()
            .map(|hit| RecommendationEntry::semantic(hit.job_text, hit.score))
            .collect())
    }
}
