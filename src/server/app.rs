use axum::body::Body;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::{extract::FromRef, http::StatusCode, routing::get, Router};
use prometheus::{Encoder, TextEncoder};
use routes::{category_router, questions_router, quizzes_router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;

#[derive(FromRef, Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub fn create_router(pool: SqlitePool) -> Router {
    let state = AppState::new(pool);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    Router::new()
        .route("/metrics", get(metrics))
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quizzes_router(state))
        .fallback(|| async {
            tracing::info!("Fallback");
            ApiError::NotFound
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(pool: SqlitePool, addr: &str) -> anyhow::Result<()> {
    let app = create_router(pool);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    if let Err(e) = encoder.encode(&metrics, &mut buf) {
        tracing::error!("Failed to encode metrics: {}", e);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    (
        [(header::CONTENT_TYPE, encoder.format_type().to_owned())],
        Body::from(buf),
    )
        .into_response()
}
