//! C7 — Static-Serve Adapter.
//!
//! A read-only HTTP surface: `/api/codemap` returns the generated JSON
//! verbatim, everything else falls through to a static-assets directory.
//! No auth, no caching headers, no write endpoints.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::error::AnalysisError;

#[derive(Clone)]
struct AppState {
    out_path: PathBuf,
    serve_dir: ServeDir,
}

/// Maps a served file's extension to a forced content type; every other
/// extension is left to `ServeDir`'s own guess.
fn forced_content_type(path: &str) -> Option<&'static str> {
    if path.ends_with(".css") {
        Some("text/css")
    } else if path.ends_with(".mjs") || path.ends_with(".js") {
        Some("application/javascript")
    } else {
        None
    }
}

async fn serve_codemap(State(state): State<AppState>) -> Response {
    match tokio::fs::read(&state.out_path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(err) => (StatusCode::NOT_FOUND, format!("codemap not available: {err}")).into_response(),
    }
}

/// Fallback handler: serves `viz_dir` via `ServeDir`, then forces the
/// content type for the two extensions the adapter contract names.
async fn serve_asset(State(state): State<AppState>, req: Request<Body>) -> Response {
    let path = req.uri().path().to_string();
    let mut response = state
        .serve_dir
        .oneshot(req)
        .await
        .map(|res| res.map(Body::new))
        .unwrap_or_else(|_: std::convert::Infallible| Response::new(Body::empty()));

    if let Some(content_type) = forced_content_type(&path) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, header::HeaderValue::from_static(content_type));
    }
    response
}

pub fn build_app(out_path: PathBuf, viz_dir: &Path) -> Router {
    let state = AppState { out_path, serve_dir: ServeDir::new(viz_dir) };

    Router::new()
        .route("/api/codemap", get(serve_codemap))
        .fallback(serve_asset)
        .with_state(state)
}

/// Binds and serves `app` at `addr` until the process is interrupted. Kept
/// separate from `build_app` so the router can be exercised in tests
/// without binding a socket.
pub async fn run_server(addr: &str, app: Router) -> Result<(), AnalysisError> {
    let socket_addr: SocketAddr = addr.parse().map_err(|_| AnalysisError::ServerBind {
        addr: addr.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid address"),
    })?;

    let listener = tokio::net::TcpListener::bind(socket_addr)
        .await
        .map_err(|source| AnalysisError::ServerBind { addr: addr.to_string(), source })?;

    axum::serve(listener, app)
        .await
        .map_err(|source| AnalysisError::ServerBind { addr: addr.to_string(), source: source.into() })
}
