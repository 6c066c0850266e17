use axum::{extract::State, Extension, Json};
use mandi_store::{
    search::{search, suggest, DEFAULT_SUGGESTION_LIMIT},
    SearchEntry,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{read_content, ApiError, ApiQuery, ApiResponse, AppState, ResponseMeta};

const MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

fn normalize_suggestion_limit(limit: Option<usize>) -> usize {
    limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .clamp(1, MAX_SUGGESTIONS)
}

/// Products whose name or description contains `q`.
pub(super) async fn search_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<SearchEntry>>>, ApiError> {
    let data: Vec<SearchEntry> = read_content(&state, &req_id, move |store| {
        let products = store.products();
        search(&products, &query.q)
            .into_iter()
            .map(SearchEntry::from)
            .collect()
    })
    .await?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Type-ahead suggestions: name matches only.
pub(super) async fn suggest_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<SearchEntry>>>, ApiError> {
    let limit = normalize_suggestion_limit(query.limit);
    let data: Vec<SearchEntry> = read_content(&state, &req_id, move |store| {
        let products = store.products();
        suggest(&products, &query.q, limit)
            .into_iter()
            .map(SearchEntry::from)
            .collect()
    })
    .await?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// The raw search index consumed by the storefront's search box. Served
/// without the response envelope.
pub(super) async fn search_index(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<SearchEntry>>, ApiError> {
    let index = read_content(&state, &req_id, |store| store.search_index()).await?;
    Ok(Json(index))
}
