//! Core data models for the downloader client
//!
//! These mirror the JSON shapes of the backend API: `VideoInfo` and
//! `VideoFormat` for `GET /info`, `DownloadRequest` for `POST /download`,
//! and `ApiErrorBody` for the uniform non-success error payload.

use serde::{Deserialize, Serialize};

/// Video metadata returned by the backend's info endpoint
///
/// Fetched fresh on every info request; a new value fully replaces any
/// previous one. Format order is preserved exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub duration: u64,
    pub thumbnail: String,
    pub formats: Vec<VideoFormat>,
}

/// One selectable encoding the backend can produce for a video
///
/// Immutable once received. Selection always references the `id`,
/// never the struct itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoFormat {
    pub id: String,
    pub ext: String,
    /// Human-readable format description, may be empty
    #[serde(default)]
    pub format: String,
    pub filesize: Option<u64>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub fps: Option<f32>,
    #[serde(default)]
    pub vcodec: String,
    #[serde(default)]
    pub acodec: String,
    pub abr: Option<f32>,
    pub tbr: Option<f32>,
}

/// JSON body for the download endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub format_id: String,
}

/// Uniform error payload the backend returns on non-success status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Application error types
///
/// Validation failures (empty URL, no format selected) are detected locally
/// by the form controller and never become an `AppError`; everything here is
/// a failed interaction with the backend or the local filesystem.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Structured error message reported by the backend, surfaced verbatim
    #[error("{0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
