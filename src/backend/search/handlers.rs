/**
 * Search Handlers
 *
 * Protected pass-through endpoints:
 *
 * - `GET /api/search/quotes?search=...`
 * - `GET /api/search/characters?search=...`
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::backend::error::ApiError;
use crate::backend::search::client::SearchClient;

/// Query string of the search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

pub async fn search_quotes(
    State(client): State<SearchClient>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("Quote search: {}", query.search);
    client.quotes(&query.search).await.map(Json)
}

pub async fn search_characters(
    State(client): State<SearchClient>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("Character search: {}", query.search);
    client.characters(&query.search).await.map(Json)
}
