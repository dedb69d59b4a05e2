//! Text-to-vector embedding pipeline.
//!
//! Provides the [`EmbeddingProvider`] trait and a local implementation using
//! all-MiniLM-L6-v2 (384 dimensions, L2-normalized). The provider is created
//! once per process via [`create_provider`].

pub mod local;

use anyhow::Result;

use crate::error::PantryError;

/// Number of dimensions in the embedding vectors (all-MiniLM-L6-v2).
pub const EMBEDDING_DIM: usize = 384;

/// Trait for embedding text into vectors.
///
/// Implementations must be deterministic: the same text always yields the
/// same vector. All methods are synchronous; callers in async contexts should
/// use `tokio::task::spawn_blocking`.
pub trait EmbeddingProvider: Send + Sync {
    /// Identifier of the model producing the vectors, e.g. `all-MiniLM-L6-v2`.
    fn model_name(&self) -> &str;

    /// Embed a single text string into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of text strings. Implementations may override for batched inference.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Return the number of dimensions this provider produces.
    fn dimensions(&self) -> usize {
        EMBEDDING_DIM
    }
}

/// Create an embedding provider from config.
///
/// Currently only `"local"` is supported (ONNX Runtime + all-MiniLM-L6-v2).
/// Fails with [`PantryError::ModelUnavailable`] if the model files cannot be
/// loaded; run `pantry model download` first.
pub fn create_provider(
    config: &crate::config::EmbeddingConfig,
) -> Result<Box<dyn EmbeddingProvider>, PantryError> {
    match config.provider.as_str() {
        "local" => {
            let provider = local::LocalEmbeddingProvider::new(config)
                .map_err(|e| PantryError::ModelUnavailable(format!("{e:#}")))?;
            Ok(Box::new(provider))
        }
        other => Err(PantryError::ModelUnavailable(format!(
            "unknown embedding provider: {other}. Supported: local"
        ))),
    }
}
