//! # HTTP API
//!
//! Thin axum front end over [`crate::processing`]:
//!
//! - `GET  /api/health`  service status
//! - `POST /api/encode`  multipart `image` + `message`, returns PNG as base64
//! - `POST /api/decode`  multipart `image`, returns the hidden message
//!
//! Errors come back as `{"error": "..."}` with a 4xx status.

use axum::{
    extract::{multipart::Multipart, DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose, Engine as _};
use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::common::config::{AppConfig, LimitsConfig};
use crate::common::policy::{self, PolicyError};
use crate::error::StegoError;
use crate::processing::steganography;

/// Slack on top of `max_upload_bytes` for multipart framing and the message field.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Debug, Serialize)]
struct EncodeResponse {
    success: bool,
    message: String,
    image_base64: String,
}

#[derive(Debug, Serialize)]
struct DecodeResponse {
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn reject(status: StatusCode, error: impl ToString) -> ApiError {
    let error = error.to_string();
    warn!("Request rejected ({}): {}", status, error);
    (status, Json(ErrorResponse { error }))
}

struct AppState {
    limits: LimitsConfig,
}

/// Build the API router for `config`.
pub fn router(config: &AppConfig) -> Router {
    let state = Arc::new(AppState {
        limits: config.limits.clone(),
    });

    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/encode", post(encode_handler))
        .route("/api/decode", post(decode_handler))
        .layer(DefaultBodyLimit::max(
            config.limits.max_upload_bytes + MULTIPART_OVERHEAD,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state);

    if let Some(dir) = &config.server.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "lsb-stego",
        "terminator": crate::codec::TERMINATOR,
    }))
}

/// Fields pulled out of an upload form.
#[derive(Default)]
struct Upload {
    image: Option<Vec<u8>>,
    filename: Option<String>,
    message: Option<String>,
}

async fn read_upload(mut multipart: Multipart, limits: &LimitsConfig) -> Result<Upload, ApiError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        reject(e.status(), format!("Failed to read multipart data: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                upload.filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    reject(e.status(), format!("Failed to read image data: {}", e))
                })?;

                policy::check_upload(data.len(), content_type.as_deref(), limits)
                    .map_err(policy_rejection)?;
                upload.image = Some(data.to_vec());
            }
            "message" => {
                let text = field.text().await.map_err(|e| {
                    reject(e.status(), format!("Failed to read message: {}", e))
                })?;
                upload.message = Some(text);
            }
            _ => {}
        }
    }

    Ok(upload)
}

fn policy_rejection(err: PolicyError) -> ApiError {
    let status = match err {
        PolicyError::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        PolicyError::UnsupportedType(..) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        PolicyError::EmptyMessage | PolicyError::MessageTooLong { .. } => StatusCode::BAD_REQUEST,
    };
    reject(status, err)
}

fn pipeline_rejection(err: anyhow::Error) -> ApiError {
    let status = match err.downcast_ref::<StegoError>() {
        Some(StegoError::NotFound) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    reject(status, err)
}

async fn encode_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let upload = read_upload(multipart, &state.limits).await?;

    let image = upload
        .image
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, PolicyError::EmptyMessage))?;
    let message = upload.message.unwrap_or_default();
    policy::check_message(&message, &state.limits).map_err(policy_rejection)?;

    let filename = upload.filename.unwrap_or_else(|| "image".to_string());
    info!(
        "Encoding {} chars into {} ({} bytes)",
        message.chars().count(),
        filename,
        image.len()
    );

    let png = tokio::task::spawn_blocking(move || {
        steganography::embed_text_bytes(&image, &message)
    })
    .await
    .map_err(|e| reject(StatusCode::INTERNAL_SERVER_ERROR, e))?
    .map_err(pipeline_rejection)?;

    Ok(Json(EncodeResponse {
        success: true,
        message: format!("Message hidden in {}", filename),
        image_base64: general_purpose::STANDARD.encode(&png),
    }))
}

async fn decode_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let upload = read_upload(multipart, &state.limits).await?;

    let image = upload.image.ok_or_else(|| {
        reject(
            StatusCode::BAD_REQUEST,
            "Please provide an image to decode.",
        )
    })?;

    let message = tokio::task::spawn_blocking(move || steganography::extract_text_bytes(&image))
        .await
        .map_err(|e| reject(StatusCode::INTERNAL_SERVER_ERROR, e))?
        .map_err(pipeline_rejection)?;

    Ok(Json(DecodeResponse {
        success: true,
        message,
    }))
}
