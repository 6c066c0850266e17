mod categories;
mod home;
mod products;
mod search;
mod site;

use axum::{
    extract::{FromRequestParts, Query, State},
    http::{header, request::Parts, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use mandi_core::{AppConfig, EnquiryLinks};
use mandi_store::ContentStore;
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub links: EnquiryLinks,
    /// Serve inactive products from `/api/v1/products/{slug}`.
    pub serve_inactive_by_slug: bool,
    /// Shared-cache lifetime advertised on catalog responses.
    pub revalidate_secs: u64,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            store: ContentStore::new(config.content_dir.clone()),
            links: EnquiryLinks::from_config(config),
            serve_inactive_by_slug: config.serve_inactive_by_slug,
            revalidate_secs: config.revalidate_secs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    content: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    pub(super) fn not_found(request_id: impl Into<String>, what: &str, slug: &str) -> Self {
        Self::new(request_id, "not_found", format!("{what} '{slug}' not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Query-string extractor whose rejection is a `bad_request` envelope
/// instead of axum's plain-text body.
pub(super) struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                let request_id = RequestId::from_extensions(&parts.extensions);
                tracing::debug!(error = %rejection, "rejected query string");
                Err(ApiError::new(request_id, "bad_request", rejection.body_text()))
            }
        }
    }
}

/// Page size for the all-products listing: 20 by default, 1..=100.
pub(super) fn normalize_per_page(per_page: Option<usize>) -> usize {
    per_page
        .unwrap_or(mandi_store::pagination::LISTING_PAGE_SIZE)
        .clamp(1, 100)
}

pub(super) fn normalize_page(page: Option<usize>) -> usize {
    page.unwrap_or(1).max(1)
}

/// Run a content read on the blocking pool.
///
/// Store reads hit the filesystem synchronously and must not stall the
/// async workers.
pub(super) async fn read_content<T, F>(
    state: &AppState,
    req_id: &RequestId,
    read: F,
) -> Result<T, ApiError>
where
    F: FnOnce(&ContentStore) -> T + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || read(&store))
        .await
        .map_err(|e| map_task_error(req_id.0.clone(), &e))
}

pub(super) fn map_task_error(request_id: String, error: &tokio::task::JoinError) -> ApiError {
    tracing::error!(error = %error, "content read task failed");
    ApiError::new(request_id, "internal_error", "content read failed")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

/// `Cache-Control` value letting shared caches serve a response for
/// `revalidate_secs` and refresh it in the background afterwards.
pub(super) fn cache_control(revalidate_secs: u64) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "public, s-maxage={revalidate_secs}, stale-while-revalidate"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("public"))
}

/// Only successful responses are shareable; errors and rejections must
/// never be replayed from a shared cache.
fn cache_policy(
    revalidate_secs: u64,
) -> impl FnMut(&Response) -> Option<HeaderValue> + Clone + Send + Sync + 'static {
    let public = cache_control(revalidate_secs);
    move |res: &Response| {
        Some(if res.status().is_success() {
            public.clone()
        } else {
            HeaderValue::from_static("no-store")
        })
    }
}

fn catalog_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/home", get(home::home))
        .route("/api/v1/categories", get(categories::list_categories))
        .route("/api/v1/categories/{slug}", get(categories::get_category))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/products/{slug}", get(products::get_product))
        .route("/api/v1/search", get(search::search_products))
        .route("/api/v1/search/suggest", get(search::suggest_products))
        .route("/api/search", get(search::search_index))
        .route("/api/v1/fulfilled-orders", get(site::list_fulfilled_orders))
        .route("/api/v1/static-paths", get(site::static_paths))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(catalog_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    cache_policy(state.revalidate_secs),
                )),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);
    let no_store = [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))];

    if state.store.health_check() {
        (
            StatusCode::OK,
            no_store,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    content: "ok",
                },
                meta,
            }),
        )
    } else {
        tracing::warn!(root = %state.store.root().display(), "health check: content root missing");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            no_store,
            Json(ApiResponse {
                data: HealthData {
                    status: "degraded",
                    content: "missing",
                },
                meta,
            }),
        )
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
