use std::any::Any as PanicPayload;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderName, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::AppState;
use crate::api::models::NewsQuery;
use crate::error::{AppError, Result};

pub const NEWS_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";
pub const NEWS_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-news-source");

pub fn create_router(app_state: AppState) -> Router {
    with_layers(Router::new().route("/api/news", get(news_handler))).with_state(app_state)
}

fn with_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(%detail, "handler panicked");

    AppError::Internal(detail).into_response()
}

async fn news_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<NewsQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
    let category = query.category()?;
    let api_key = state.config.api_key();

    let outcome = state.news.get_news(category, api_key.as_deref()).await;
    info!(%category, source = outcome.kind(), "serving news");

    let source = outcome.kind();
    let news = outcome.into_response();

    Ok((
        [
            (header::CACHE_CONTROL, NEWS_CACHE_CONTROL),
            (NEWS_SOURCE_HEADER, source),
        ],
        Json(news.as_ref()),
    )
        .into_response())
}
