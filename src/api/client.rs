//! reqwest-backed implementation of the backend API

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response};
use tracing::debug;

use crate::core::controller::{MSG_DOWNLOAD_FAILED, MSG_INFO_FAILED};
use crate::core::models::{ApiErrorBody, AppError, AppResult, DownloadRequest, VideoInfo};

/// HTTP client for the downloader backend
///
/// Stateless beyond the connection pool. No timeout, no retry, no
/// cancellation: the caller's only recourse on failure is to invoke the
/// operation again.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Turn a non-success response into the backend's structured error
    /// message, falling back to a generic one when the body is absent or
    /// not the uniform `{error}` shape
    async fn read_error(response: Response, fallback: &str) -> AppError {
        let status = response.status();
        match response.json::<ApiErrorBody>().await {
            Ok(body) if !body.error.is_empty() => AppError::Backend(body.error),
            _ => {
                debug!("non-success status {} without structured error body", status);
                AppError::Backend(fallback.to_string())
            }
        }
    }
}

#[async_trait]
impl super::VideoApi for BackendClient {
    async fn video_info(&self, url: &str) -> AppResult<VideoInfo> {
        let response = self
            .client
            .get(format!("{}/info", self.base_url))
            .query(&[("url", url)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response, MSG_INFO_FAILED).await);
        }

        Ok(response.json::<VideoInfo>().await?)
    }

    async fn download(&self, url: &str, format_id: &str) -> AppResult<Bytes> {
        let request = DownloadRequest {
            url: url.to_string(),
            format_id: format_id.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/download", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response, MSG_DOWNLOAD_FAILED).await);
        }

        Ok(response.bytes().await?)
    }
}
