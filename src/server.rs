//! HTTP Gateway - `GET /v1/{puzzle}/{view}/{dimensions}/{colors}`
//!
//! Thin transport over the pipeline. Success is the SVG with an `ETag`;
//! every pipeline error is a 400 with `{"error": "..."}`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use axum::{
    extract::Path,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tracing::{info, warn};

use crate::digest::etag;
use crate::pipeline::{self, PipelineError, RenderedSvg, CONTENT_TYPE};
use crate::views::Puzzle;

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub listen: SocketAddr,
    pub tls_cert: Option<PathBuf>,
    pub tls_key: Option<PathBuf>,
}

pub fn router() -> Router {
    Router::new()
        .route("/v1/cube/{view}/{dimensions}/{colors}", get(cube_handler))
        .route("/v1/skewb/{view}/{dimensions}/{colors}", get(skewb_handler))
}

async fn cube_handler(Path((view, dimensions, colors)): Path<(String, String, String)>) -> Response {
    respond(Puzzle::Cube, &view, &dimensions, &colors)
}

async fn skewb_handler(Path((view, dimensions, colors)): Path<(String, String, String)>) -> Response {
    respond(Puzzle::Skewb, &view, &dimensions, &colors)
}

/// Render and map the outcome to an HTTP response.
pub fn respond(puzzle: Puzzle, view: &str, dimensions: &str, colors: &str) -> Response {
    match pipeline::render(puzzle, view, dimensions, colors) {
        Ok(rendered) => svg_response(rendered),
        Err(err) => {
            warn!(%puzzle, view, dimensions, colors, error = %err, "rejected request");
            error_response(&err)
        }
    }
}

fn svg_response(rendered: RenderedSvg) -> Response {
    let tag = etag(&rendered.svg);
    let mut response = (StatusCode::OK, rendered.svg).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    if let Ok(value) = HeaderValue::from_str(&tag) {
        headers.insert(header::ETAG, value);
    }
    response
}

fn error_response(err: &PipelineError) -> Response {
    let body = serde_json::json!({ "error": err.to_string() });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

pub async fn serve(config: ServeConfig) -> Result<()> {
    let app = router();

    let handle = Handle::new();
    // graceful shutdown on Ctrl+C
    let shutdown = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutting down");
            shutdown.shutdown();
        }
    });

    match (config.tls_cert, config.tls_key) {
        (Some(cert), Some(key)) => {
            let tls_config = RustlsConfig::from_pem_file(cert, key)
                .await
                .context("load tls config")?;
            info!("listening (TLS) on https://{}", config.listen);
            axum_server::bind_rustls(config.listen, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        (None, None) => {
            info!("listening on http://{}", config.listen);
            axum_server::bind(config.listen)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        _ => {
            return Err(anyhow!(
                "must provide both --tls-cert and --tls-key or neither"
            ))
        }
    }

    Ok(())
}
