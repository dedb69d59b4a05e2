//! The embedded recipe corpus.
//!
//! [`Corpus::build`] embeds every recipe's ingredient text exactly once. The
//! result is immutable and meant to be shared behind an `Arc` for the life of
//! the process.

use indicatif::{ProgressBar, ProgressStyle};

use crate::embedding::EmbeddingProvider;
use crate::error::PantryError;
use crate::recipes::types::{Recipe, RecipeRow};

const BATCH_SIZE: usize = 32;

#[derive(Debug)]
pub struct Corpus {
    recipes: Vec<Recipe>,
    model: String,
    dimensions: usize,
}

impl Corpus {
    /// Embed the ingredient text of every row, preserving row order.
    ///
    /// The corpus records the provider's model name and dimensionality. Every
    /// vector must have that dimensionality; anything else is reported as
    /// [`PantryError::ModelUnavailable`].
    pub fn build(
        rows: Vec<RecipeRow>,
        provider: &dyn EmbeddingProvider,
        show_progress: bool,
    ) -> Result<Self, PantryError> {
        let total = rows.len();
        let dims = provider.dimensions();
        let model = provider.model_name();
        tracing::info!(recipes = total, model, "generating recipe embeddings");

        let pb = if show_progress {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:40.cyan/blue} {pos}/{len} ({eta})")
                    .map_err(|e| PantryError::Embedding(e.to_string()))?
                    .progress_chars("##-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut embeddings = Vec::with_capacity(total);
        for chunk in rows.chunks(BATCH_SIZE) {
            let texts: Vec<&str> = chunk.iter().map(|r| r.ingredients.as_str()).collect();
            let batch = provider.embed_batch(&texts).map_err(|e| {
                PantryError::ModelUnavailable(format!("failed to embed recipe batch: {e:#}"))
            })?;

            if batch.len() != chunk.len() {
                return Err(PantryError::ModelUnavailable(format!(
                    "provider returned {} embeddings for {} recipes",
                    batch.len(),
                    chunk.len()
                )));
            }
            if let Some(bad) = batch.iter().find(|e| e.len() != dims) {
                return Err(PantryError::ModelUnavailable(format!(
                    "embedding has {} dimensions, expected {dims}",
                    bad.len()
                )));
            }

            embeddings.extend(batch);
            pb.inc(chunk.len() as u64);
        }
        pb.finish_and_clear();

        let recipes = rows
            .into_iter()
            .zip(embeddings)
            .map(|(row, embedding)| Recipe::new(row, embedding))
            .collect();

        tracing::info!(recipes = total, dimensions = dims, "recipe embeddings ready");
        Ok(Self::from_recipes(recipes, model, dims))
    }

    pub(crate) fn from_recipes(recipes: Vec<Recipe>, model: &str, dimensions: usize) -> Self {
        Self {
            recipes,
            model: model.to_string(),
            dimensions,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Name of the model the corpus was embedded with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Length of every recipe embedding, and of any query scored against them.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}
