//! HTTP server: router for `POST /type` and the listener loop.
//!
//! # Routes
//!
//! | Method | Path    | Result                                              |
//! |--------|---------|-----------------------------------------------------|
//! | POST   | `/type` | 200 accepted / 400 no text / 422 non-string text     |
//! | POST   | `/type` | axum JSON rejection (400 syntax, 415 content type)  |
//! | other  | `/type` | 405 (axum's method router)                          |
//! | any    | other   | 404 `{"error": "Not found"}`                        |
//!
//! # Non-blocking response path
//!
//! The handler only parses JSON, validates, and spawns.  The typing job runs
//! on its own task; its `JoinHandle` is dropped, so the response never waits
//! on the delay or on the OS.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::application::type_text::{TextTyper, TypeTextUseCase};
use crate::domain::{AcceptedResponse, ErrorResponse, RequestError, ServerConfig, TypeRequest};

/// Builds the application router around a shared use case.
pub fn build_router(use_case: Arc<TypeTextUseCase>) -> Router {
    Router::new()
        .route("/type", post(type_text))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(use_case)
}

async fn type_text(
    State(use_case): State<Arc<TypeTextUseCase>>,
    Json(request): Json<TypeRequest>,
) -> Response {
    match use_case.accept(request) {
        Ok(job) => {
            debug!(job_id = %job.id, "typing job detached");
            (StatusCode::OK, Json(AcceptedResponse::typing_initiated())).into_response()
        }
        Err(e) => {
            let status = match e {
                RequestError::NoText => StatusCode::BAD_REQUEST,
                RequestError::NotText => StatusCode::UNPROCESSABLE_ENTITY,
            };
            (status, Json(ErrorResponse::from(e))).into_response()
        }
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found()))
}

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, missing
/// permission) or if the server fails while running.
pub async fn run_server<F>(
    config: &ServerConfig,
    typer: Arc<dyn TextTyper>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    let use_case = Arc::new(TypeTextUseCase::new(typer, config.typing_delay));
    serve(listener, use_case, shutdown).await
}

/// Serves the router on an already-bound listener until `shutdown` resolves.
///
/// Split out from [`run_server`] so tests can bind `127.0.0.1:0` and learn the
/// port before serving.
pub async fn serve<F>(
    listener: TcpListener,
    use_case: Arc<TypeTextUseCase>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .context("failed to read listener address")?;
    info!(
        "HTTP listener on {local_addr} (typing delay {} ms)",
        use_case.delay().as_millis()
    );

    axum::serve(listener, build_router(use_case))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("HTTP listener on {local_addr} closed");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
