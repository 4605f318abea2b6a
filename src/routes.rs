// src/routes.rs

use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::{HeaderName, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::AppError,
    handlers::{leaderboard, quiz, submission},
    state::AppState,
};

/// Query parameters understood by the dispatcher.
#[derive(Debug, Default, Deserialize)]
pub struct RequestParams {
    /// Operation selector: `tests`, `test`, `leaderboard` or `submit`.
    #[serde(default)]
    pub path: String,
    pub id: Option<String>,
}

/// Routes a request by method and the `path` query parameter.
///
/// The URL path plays no part; the whole service behaves as a single endpoint.
/// A query string or body that cannot be read is an invalid request, answered
/// with the same JSON error as an unknown selector.
pub async fn dispatch(
    State(pool): State<PgPool>,
    State(config): State<Config>,
    method: Method,
    query: Result<Query<RequestParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let Query(params) = query.map_err(|e| {
        tracing::debug!("Rejected query string: {}", e.body_text());
        AppError::invalid_request()
    })?;
    let body = body.map_err(|e| {
        tracing::debug!("Rejected request body: {}", e.body_text());
        AppError::invalid_request()
    })?;

    let response = match (method, params.path.as_str()) {
        (Method::GET, "tests") => quiz::list_tests(&pool).await?.into_response(),
        (Method::GET, "test") => quiz::get_test(&pool, params.id.as_deref())
            .await?
            .into_response(),
        (Method::GET, "leaderboard") => leaderboard::get_leaderboard(&pool, config.leaderboard_limit)
            .await?
            .into_response(),
        (Method::POST, "submit") => submission::submit_result(&pool, &config.guest_username, body)
            .await?
            .into_response(),
        _ => return Err(AppError::invalid_request()),
    };

    Ok(response)
}

/// Assembles the application router.
///
/// * Every URL falls through to [`dispatch`].
/// * CORS is wide open; any OPTIONS request is answered by the CORS layer
///   with an empty 200 before reaching the handler.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-user-id")])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .fallback(dispatch)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
