//! Core recipe type definitions.
//!
//! Defines [`RecipeRow`] (one dataset row as read from disk), [`Recipe`]
//! (a row paired with its ingredient embedding), and [`RankedResult`]
//! (a per-query view of a recipe and its similarity score).

use serde::{Deserialize, Serialize};

/// One row of the recipe dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRow {
    #[serde(rename = "Recipe Name")]
    pub name: String,
    /// Comma-separated ingredient text. Blank cells load as `""`.
    #[serde(rename = "Ingredients", default)]
    pub ingredients: String,
    #[serde(rename = "Instructions", default)]
    pub instructions: String,
}

impl RecipeRow {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }
}

/// A recipe with its ingredient embedding.
///
/// The embedding is assigned once when the corpus is built and never changes.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    embedding: Vec<f32>,
}

impl Recipe {
    pub(crate) fn new(row: RecipeRow, embedding: Vec<f32>) -> Self {
        Self {
            name: row.name,
            ingredients: row.ingredients,
            instructions: row.instructions,
            embedding,
        }
    }

    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }
}

/// A recipe matched against a query. Recomputed for every query.
#[derive(Debug, Clone, Copy)]
pub struct RankedResult<'a> {
    pub recipe: &'a Recipe,
    /// Cosine similarity in `[-1.0, 1.0]`.
    pub score: f32,
}

impl RankedResult<'_> {
    /// Score rounded to three decimal places for display.
    pub fn display_score(&self) -> f64 {
        (f64::from(self.score) * 1000.0).round() / 1000.0
    }
}
