use axum::{extract::State, Extension, Json};
use mandi_core::FulfilledOrder;
use mandi_store::StaticPaths;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{read_content, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StaticPathsData {
    #[serde(flatten)]
    paths: StaticPaths,
    urls: Vec<String>,
}

pub(super) async fn list_fulfilled_orders(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<FulfilledOrder>>>, ApiError> {
    let data = read_content(&state, &req_id, |store| store.fulfilled_orders()).await?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Every pre-renderable page, as slugs and as URL paths.
pub(super) async fn static_paths(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<StaticPathsData>>, ApiError> {
    let paths = read_content(&state, &req_id, |store| store.static_paths()).await?;
    let data = StaticPathsData {
        urls: paths.urls(),
        paths,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
