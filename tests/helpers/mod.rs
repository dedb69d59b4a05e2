#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use pantry::config::PantryConfig;
use pantry::embedding::EmbeddingProvider;
use pantry::recipes::search::Recommender;
use pantry::recipes::types::RecipeRow;
use tempfile::NamedTempFile;

/// Ingredient words the test provider knows about, one dimension each.
pub const VOCAB: [&str; 12] = [
    "tomato", "onion", "egg", "rice", "dal", "potato", "pea", "cumin", "paneer", "spinach",
    "ghee", "garlic",
];

/// Deterministic bag-of-words embedding over [`VOCAB`].
///
/// Unknown words are ignored, so text with no known ingredient embeds to the
/// zero vector.
pub struct KeywordProvider;

pub const KEYWORD_MODEL: &str = "keyword-test";

impl EmbeddingProvider for KeywordProvider {
    fn model_name(&self) -> &str {
        KEYWORD_MODEL
    }

    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let mut v = vec![0.0f32; VOCAB.len()];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if let Some(i) = VOCAB.iter().position(|v| *v == word) {
                v[i] += 1.0;
            }
        }
        Ok(v)
    }

    fn dimensions(&self) -> usize {
        VOCAB.len()
    }
}

/// The three-recipe corpus used across scenarios.
pub fn sample_rows() -> Vec<RecipeRow> {
    vec![
        RecipeRow::new("Masala Omelette", "Tomato, Onion, Egg", "Whisk eggs and fry with onion and tomato."),
        RecipeRow::new("Dal Chawal", "Rice, Dal", "Cook dal and serve over rice."),
        RecipeRow::new("Aloo Matar", "Potato, Pea, Cumin", "Temper cumin, add potato and peas."),
    ]
}

pub fn recommender_for(rows: Vec<RecipeRow>) -> Recommender {
    Recommender::from_rows(rows, Arc::new(KeywordProvider), &PantryConfig::default(), false)
        .unwrap()
}

pub fn sample_recommender() -> Recommender {
    recommender_for(sample_rows())
}

/// Write CSV text to a temp file. Keep the handle alive for the file to exist.
pub fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
