//! Ingredient-driven recipe recommendations.
//!
//! Pantry loads a fixed recipe dataset, embeds every recipe's ingredient list
//! once at startup with all-MiniLM-L6-v2, and answers free-text ingredient
//! queries with the three most similar recipes by cosine similarity.
//!
//! # Architecture
//!
//! - **Dataset**: CSV with `Recipe Name`, `Ingredients`, `Instructions` columns
//! - **Embeddings**: Local ONNX Runtime with all-MiniLM-L6-v2 (384 dimensions)
//! - **Ranking**: cosine similarity, stable descending sort, top-k
//! - **Front ends**: HTTP API (`pantry serve`) and terminal chat (`pantry chat`)
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`error`] — Startup and per-request error taxonomy
//! - [`embedding`] — Text-to-vector embedding pipeline via ONNX Runtime
//! - [`recipes`] — Dataset loading, corpus embedding, ranking and the query pipeline
//! - [`server`] — HTTP adapter
//! - [`cli`] — Terminal adapters and model download

pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod recipes;
pub mod server;
