//! Cosine-similarity ranking of a query vector against the corpus.
//!
//! Scores are collected into a request-local list; the corpus is only read.

use crate::recipes::corpus::Corpus;
use crate::recipes::types::RankedResult;

/// Number of recipes returned per query.
pub const DEFAULT_TOP_K: usize = 3;

/// Cosine similarity of two vectors, clamped to `[-1.0, 1.0]`.
///
/// Returns 0.0 for a zero-norm vector, mismatched lengths, or a non-finite result.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    let sim = dot / denom;
    if sim.is_finite() {
        sim.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Score every recipe against `query` and return the best `top_k`.
///
/// Results are ordered by descending score. Equal scores keep corpus order.
/// An empty corpus yields an empty list.
pub fn rank<'a>(query: &[f32], corpus: &'a Corpus, top_k: usize) -> Vec<RankedResult<'a>> {
    let mut scored: Vec<RankedResult<'a>> = corpus
        .recipes()
        .iter()
        .map(|recipe| RankedResult {
            recipe,
            score: cosine_similarity(query, recipe.embedding()),
        })
        .collect();

    // sort_by is stable, so ties stay in corpus order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::types::{Recipe, RecipeRow};

    fn corpus_of(vectors: Vec<Vec<f32>>) -> Corpus {
        let recipes = vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| Recipe::new(RecipeRow::new(format!("r{i}"), "", ""), v))
            .collect();
        Corpus::from_recipes(recipes, "test", 2)
    }

    #[test]
    fn identical_vectors_score_one() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposite_vectors_score_minus_one() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]);
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn mismatched_lengths_score_zero() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn rank_truncates_and_orders() {
        let corpus = corpus_of(vec![
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![-1.0, 0.0],
            vec![1.0, 0.1],
        ]);
        let results = rank(&[1.0, 0.0], &corpus, 3);
        let names: Vec<&str> = results.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["r1", "r4", "r2"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = corpus_of(vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![2.0, 0.0], vec![3.0, 0.0]]);
        let results = rank(&[1.0, 0.0], &corpus, 3);
        let names: Vec<&str> = results.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn small_corpus_returns_every_recipe() {
        let corpus = corpus_of(vec![vec![1.0, 0.0]]);
        assert_eq!(rank(&[0.5, 0.5], &corpus, 3).len(), 1);
    }

    #[test]
    fn empty_corpus_returns_nothing() {
        let corpus = corpus_of(vec![]);
        assert!(rank(&[1.0, 0.0], &corpus, 3).is_empty());
    }

    #[test]
    fn degenerate_recipe_embedding_scores_zero() {
        let corpus = corpus_of(vec![vec![0.0, 0.0], vec![-1.0, 0.0]]);
        let results = rank(&[1.0, 0.0], &corpus, 3);
        assert_eq!(results[0].recipe.name, "r0");
        assert_eq!(results[0].score, 0.0);
        assert_eq!(results[1].score, -1.0);
    }
}
