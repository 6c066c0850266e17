use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{Extensions, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request correlation id, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    /// Id stored by [`request_id`], or empty outside that middleware.
    pub(crate) fn from_extensions(extensions: &Extensions) -> String {
        extensions
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_default()
    }
}

/// Reuse the caller's `x-request-id` when it is non-blank, otherwise mint
/// a `UUIDv4`. The id is echoed on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    let echoed = HeaderValue::from_str(&id).ok();
    req.extensions_mut().insert(RequestId(id));

    let mut res = next.run(req).await;
    if let Some(value) = echoed {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

/// Fixed-window limiter shared by the catalog routes.
///
/// The count resets once `window` has elapsed since the first request of
/// the current window.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    current: Arc<Mutex<(Instant, usize)>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            current: Arc::new(Mutex::new((Instant::now(), 0))),
        }
    }

    #[must_use]
    pub fn per_minute(max_requests: usize) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    /// Count one request; `false` when the window is already full.
    async fn admit(&self) -> bool {
        let mut current = self.current.lock().await;
        let (started_at, count) = &mut *current;

        if started_at.elapsed() >= self.window {
            *started_at = Instant::now();
            *count = 0;
        }
        if *count >= self.max_requests {
            return false;
        }
        *count += 1;
        true
    }
}

pub async fn enforce_rate_limit(
    State(limiter): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    if limiter.admit().await {
        return next.run(req).await;
    }

    let request_id = RequestId::from_extensions(req.extensions());
    tracing::warn!(
        request_id = %request_id,
        max_requests = limiter.max_requests,
        window_secs = limiter.window.as_secs(),
        "rate limit exceeded"
    );
    ApiError::new(
        request_id,
        "rate_limited",
        format!(
            "more than {} requests in {}s",
            limiter.max_requests,
            limiter.window.as_secs()
        ),
    )
    .into_response()
}
