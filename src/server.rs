//! HTTP adapter over the recommendation pipeline.
//!
//! Routes: `GET /` (liveness) and `POST /search`. The corpus is fully embedded
//! before [`serve`] binds its listener, so every request sees complete,
//! read-only state.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::PantryConfig;
use crate::error::PantryError;
use crate::recipes::search::Recommender;
use crate::recipes::types::RankedResult;

pub const LIVENESS_MESSAGE: &str = "Recipe Chatbot API is running successfully!";
pub const NO_RESULTS: &str = "No similar recipes found.";
pub const EMPTY_QUERY_WARNING: &str = "Please enter some ingredients to search.";

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: SearchResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Either the matched recipes or a fixed "nothing found" message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    Found(Vec<RecipeHit>),
    NotFound(&'static str),
}

#[derive(Debug, Serialize)]
pub struct RecipeHit {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub score: f64,
}

impl From<&RankedResult<'_>> for RecipeHit {
    fn from(r: &RankedResult<'_>) -> Self {
        Self {
            name: r.recipe.name.clone(),
            ingredients: r.recipe.ingredients.clone(),
            instructions: r.recipe.instructions.clone(),
            score: r.display_score(),
        }
    }
}

impl SearchResponse {
    fn new(query: String, ranked: &[RankedResult<'_>]) -> Self {
        let results = if ranked.is_empty() {
            SearchResults::NotFound(NO_RESULTS)
        } else {
            SearchResults::Found(ranked.iter().map(RecipeHit::from).collect())
        };
        Self {
            query,
            results,
            warning: None,
        }
    }

    fn empty_query(query: String) -> Self {
        Self {
            query,
            results: SearchResults::NotFound(NO_RESULTS),
            warning: Some(EMPTY_QUERY_WARNING.into()),
        }
    }
}

/// Request failures that are the server's fault.
struct ApiError(PantryError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "search failed");
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Build the router. Exposed separately from [`serve`] for in-process tests.
pub fn build_router(recommender: Recommender) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/search", post(search))
        .with_state(recommender)
}

async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": LIVENESS_MESSAGE }))
}

async fn search(
    State(recommender): State<Recommender>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = request.query;
    tracing::info!(query_len = query.len(), "search called");

    // Embedding is CPU-bound; keep it off the async workers.
    let embedder = recommender.clone();
    let query_for_embed = query.clone();
    let embedded = tokio::task::spawn_blocking(move || embedder.embed_query(&query_for_embed))
        .await
        .map_err(|e| ApiError(PantryError::Embedding(format!("embedding task failed: {e}"))))?;

    let query_embedding = match embedded {
        Ok(v) => v,
        Err(PantryError::EmptyQuery) => {
            tracing::warn!("empty query rejected");
            return Ok(Json(SearchResponse::empty_query(query)));
        }
        Err(e) => return Err(ApiError(e)),
    };

    let ranked = recommender.rank(&query_embedding);
    tracing::debug!(results = ranked.len(), "search complete");
    Ok(Json(SearchResponse::new(query, &ranked)))
}

/// Load everything, then serve HTTP until Ctrl-C.
pub async fn serve(config: PantryConfig) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr();

    let startup_config = config.clone();
    let recommender =
        tokio::task::spawn_blocking(move || Recommender::startup(&startup_config, false)).await??;
    tracing::info!(recipes = recommender.corpus().len(), "corpus ready");

    let router = build_router(recommender);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting recipe server at http://{bind_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down recipe server");
        })
        .await?;

    Ok(())
}
