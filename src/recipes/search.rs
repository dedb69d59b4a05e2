use std::sync::Arc;

use crate::config::PantryConfig;
use crate::embedding::{self, EmbeddingProvider};
use crate::error::PantryError;
use crate::recipes::corpus::Corpus;
use crate::recipes::dataset;
use crate::recipes::rank;
use crate::recipes::types::{RankedResult, RecipeRow};

/// The query pipeline: embed the query, rank it against the corpus.
///
/// Cheap to clone; all state is shared and read-only.
#[derive(Clone)]
pub struct Recommender {
    corpus: Arc<Corpus>,
    embedding: Arc<dyn EmbeddingProvider>,
    top_k: usize,
}

impl Recommender {
    pub fn new(corpus: Arc<Corpus>, embedding: Arc<dyn EmbeddingProvider>, top_k: usize) -> Self {
        Self {
            corpus,
            embedding,
            top_k,
        }
    }

    /// Load the dataset, load the model, and embed the corpus.
    ///
    /// Must complete before any query is served. Both failure modes are fatal.
    pub fn startup(config: &PantryConfig, show_progress: bool) -> Result<Self, PantryError> {
        let dataset_path = config.resolved_dataset_path();
        let rows = dataset::load_recipes(&dataset_path)?;

        let provider: Arc<dyn EmbeddingProvider> =
            Arc::from(embedding::create_provider(&config.embedding)?);
        tracing::info!(model = provider.model_name(), "embedding provider ready");

        Self::from_rows(rows, provider, config, show_progress)
    }

    /// Build from already-loaded rows and an existing provider.
    pub fn from_rows(
        rows: Vec<RecipeRow>,
        provider: Arc<dyn EmbeddingProvider>,
        config: &PantryConfig,
        show_progress: bool,
    ) -> Result<Self, PantryError> {
        let corpus = Corpus::build(rows, provider.as_ref(), show_progress)?;
        Ok(Self::new(Arc::new(corpus), provider, config.ranking.top_k))
    }

    /// Top matches for a free-text ingredient query.
    ///
    /// Empty or whitespace-only queries fail with [`PantryError::EmptyQuery`].
    pub fn recommend(&self, query: &str) -> Result<Vec<RankedResult<'_>>, PantryError> {
        let query_embedding = self.embed_query(query)?;
        Ok(self.rank(&query_embedding))
    }

    /// Validate and embed a query without ranking it.
    ///
    /// The query vector must match the corpus dimensionality. Split out so
    /// async callers can run the embedding on a blocking thread.
    pub fn embed_query(&self, query: &str) -> Result<Vec<f32>, PantryError> {
        if query.trim().is_empty() {
            return Err(PantryError::EmptyQuery);
        }
        let embedding = self
            .embedding
            .embed(query)
            .map_err(|e| PantryError::Embedding(format!("{e:#}")))?;

        if embedding.len() != self.corpus.dimensions() {
            return Err(PantryError::Embedding(format!(
                "query embedding has {} dimensions, corpus ({}) has {}",
                embedding.len(),
                self.corpus.model(),
                self.corpus.dimensions()
            )));
        }
        Ok(embedding)
    }

    pub fn rank(&self, query_embedding: &[f32]) -> Vec<RankedResult<'_>> {
        rank::rank(query_embedding, &self.corpus, self.top_k)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}
