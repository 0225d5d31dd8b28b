//! Backend API client
//!
//! The backend is an opaque HTTP collaborator with exactly two endpoints:
//! `GET /info` for metadata and `POST /download` for the encoded payload.
//! The trait seam exists so the form controller can be driven against a
//! recording stub in tests.

pub mod client;

#[cfg(test)]
mod client_test;

pub use client::BackendClient;

use async_trait::async_trait;
use bytes::Bytes;

use crate::core::models::{AppResult, VideoInfo};

/// The two operations the backend exposes
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Fetch metadata and the available formats for a video URL
    async fn video_info(&self, url: &str) -> AppResult<VideoInfo>;

    /// Fetch the encoded payload for a previously listed format
    async fn download(&self, url: &str, format_id: &str) -> AppResult<Bytes>;
}
