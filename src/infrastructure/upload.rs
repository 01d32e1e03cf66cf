// SPDX-License-Identifier: MPL-2.0
//! Multipart upload of the selected video to the translation backend.
//!
//! The backend answers with `{"video_url": "..."}` on success and
//! `{"error": "..."}` with a non-2xx status otherwise.

use crate::error::UploadError;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Multipart field carrying the file bytes.
pub const VIDEO_FIELD: &str = "video";

/// Text field carrying the source language code.
pub const SOURCE_LANGUAGE_FIELD: &str = "source_language";

/// Text field carrying the target language code.
pub const TARGET_LANGUAGE_FIELD: &str = "target_language";

const USER_AGENT: &str = concat!("VideoTranslate/", env!("CARGO_PKG_VERSION"));

/// Everything needed to send one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub endpoint: String,
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub source_language: String,
    pub target_language: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Interprets a backend response.
///
/// # Errors
///
/// Returns [`UploadError::Status`] for non-2xx answers (carrying the
/// backend's `error` text when present) and [`UploadError::InvalidResponse`]
/// when a 2xx body lacks a `video_url`.
pub fn parse_response(status: u16, body: &str) -> Result<String, UploadError> {
    let parsed = serde_json::from_str::<UploadResponse>(body);

    if !(200..300).contains(&status) {
        let message = parsed.ok().and_then(|r| r.error);
        return Err(UploadError::Status {
            code: status,
            message,
        });
    }

    let response = parsed.map_err(|e| UploadError::InvalidResponse(e.to_string()))?;
    match response.video_url {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(UploadError::InvalidResponse(
            response
                .error
                .unwrap_or_else(|| "missing video_url".to_string()),
        )),
    }
}

/// The `video` form part. A MIME type that does not parse is a local error.
fn video_part(bytes: Vec<u8>, file_name: &str, mime: &str) -> Result<Part, UploadError> {
    Part::bytes(bytes)
        .file_name(file_name.to_owned())
        .mime_str(mime)
        .map_err(|e| UploadError::InvalidRequest(e.to_string()))
}

/// Sends the file and returns the translated video URL.
///
/// # Errors
///
/// See [`UploadError`] for the failure categories.
pub async fn upload_video(request: UploadRequest) -> Result<String, UploadError> {
    let bytes = tokio::fs::read(&request.path)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;
    tracing::debug!(
        file = %request.file_name,
        size = bytes.len(),
        "read video for upload"
    );

    let part = video_part(bytes, &request.file_name, &request.mime)?;
    let form = Form::new()
        .part(VIDEO_FIELD, part)
        .text(SOURCE_LANGUAGE_FIELD, request.source_language.clone())
        .text(TARGET_LANGUAGE_FIELD, request.target_language.clone());

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(request.timeout)
        .build()
        .map_err(|e| UploadError::Network(e.to_string()))?;

    tracing::info!(endpoint = %request.endpoint, "uploading video");
    let response = client
        .post(&request.endpoint)
        .multipart(form)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    let result = parse_response(status, &body);
    match &result {
        Ok(url) => tracing::info!(%url, "upload finished"),
        Err(err) => tracing::warn!(%err, "upload failed"),
    }
    result
}
