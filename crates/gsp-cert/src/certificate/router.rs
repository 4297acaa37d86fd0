use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::error::AppError;

use super::{CertificateFields, CertificateRenderer};

const ATTACHMENT_DISPOSITION: &str = "attachment; filename=gsp_certificate.pdf";

/// Router builder exposing the certificate rendering endpoint and the
/// service info root.
pub fn certificate_router(renderer: Arc<CertificateRenderer>) -> Router {
    Router::new()
        .route("/generate-gsp-certificate-pdf/", post(render_handler))
        .route("/", get(service_info))
        .with_state(renderer)
}

pub(crate) async fn render_handler(
    State(renderer): State<Arc<CertificateRenderer>>,
    Json(fields): Json<CertificateFields>,
) -> Result<Response, AppError> {
    let document = renderer.render(&fields)?;
    tracing::debug!(bytes = document.len(), "certificate rendered");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, ATTACHMENT_DISPOSITION),
        ],
        document,
    )
        .into_response())
}

pub(crate) async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "message": "GSP Certificate Generator is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
