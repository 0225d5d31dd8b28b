//! Form controller state machine
//!
//! Owns the whole UI state as a single value and sequences the two backend
//! calls. All mutation goes through the transition methods below; the view
//! adapter is pushed a fresh snapshot after every transition and never
//! mutates state on its own.
//!
//! At most one network operation is in flight at a time: `request_info` and
//! `request_download` refuse to start while a busy phase is active, and the
//! adapters additionally disable the triggering control. There is no retry,
//! timeout, or cancellation; a failure surfaces its message and hands
//! control back to the user.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, warn};

use crate::api::VideoApi;
use crate::views::View;

use super::labels;
use super::models::{AppError, VideoFormat, VideoInfo};

/// Shown when an info fetch is triggered with an empty URL
pub const MSG_URL_REQUIRED: &str = "URL required";

/// Shown when a download is triggered without a selected format
pub const MSG_FORMAT_REQUIRED: &str = "Format required";

/// Generic message for info failures without a structured backend error
pub const MSG_INFO_FAILED: &str = "Failed to fetch video info";

/// Generic message for download failures without a structured backend error
pub const MSG_DOWNLOAD_FAILED: &str = "Download failed";

/// Transient banner after a successful save
pub const MSG_DOWNLOAD_OK: &str = "Video downloaded successfully!";

/// How long the success banner stays visible before auto-clearing
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No metadata yet
    Idle,

    /// Info request in flight
    FetchingInfo,

    /// Metadata present, ready to select and download
    InfoReady,

    /// Download request in flight
    Downloading,
}

/// The complete form state, owned by the controller
///
/// Invariant: `phase` is `InfoReady` or `Downloading` only while `video`
/// is present. Error and success banners are mutually exclusive.
#[derive(Debug)]
pub struct UiState {
    pub url: String,
    pub video: Option<VideoInfo>,
    pub selected_format: Option<String>,
    pub phase: Phase,
    pub error: Option<String>,
    pub success: Option<String>,
    success_deadline: Option<Instant>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            url: String::new(),
            video: None,
            selected_format: None,
            phase: Phase::Idle,
            error: None,
            success: None,
            success_deadline: None,
        }
    }
}

impl UiState {
    /// Whether a network operation is currently in flight
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::FetchingInfo | Phase::Downloading)
    }

    /// Whether the download action is currently valid
    pub fn can_download(&self) -> bool {
        match (&self.video, &self.selected_format) {
            (Some(video), Some(id)) => video.formats.iter().any(|f| f.id == *id),
            _ => false,
        }
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
        self.success_deadline = None;
    }

    fn set_success(&mut self, message: impl Into<String>, now: Instant) {
        self.success = Some(message.into());
        self.success_deadline = Some(now + SUCCESS_BANNER_TTL);
        self.error = None;
    }

    fn clear_banners(&mut self) {
        self.error = None;
        self.success = None;
        self.success_deadline = None;
    }

    /// Clear the success banner once its deadline has passed.
    /// Returns true when the state changed.
    fn expire_success(&mut self, now: Instant) -> bool {
        match self.success_deadline {
            Some(deadline) if now >= deadline => {
                self.success = None;
                self.success_deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Sequences user actions into API calls and state transitions
pub struct FormController<A, V> {
    api: A,
    view: V,
    state: UiState,
}

impl<A: VideoApi, V: View> FormController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: UiState::default(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.state.url = url.into();
    }

    /// Update the selected format identifier
    ///
    /// Identifiers not present in the current metadata are rejected locally;
    /// the backend is assumed to supply unique ids per video.
    pub fn select_format(&mut self, format_id: Option<String>) {
        let Some(video) = &self.state.video else {
            return;
        };
        match format_id {
            Some(id) if video.formats.iter().any(|f| f.id == id) => {
                self.state.selected_format = Some(id);
            }
            Some(id) => {
                warn!("ignoring selection of unknown format id: {}", id);
                return;
            }
            None => self.state.selected_format = None,
        }
        self.view.render(&self.state);
    }

    /// Fetch metadata for the current URL
    ///
    /// Empty or whitespace-only URLs fail validation locally and never reach
    /// the API client. On success the new metadata replaces any previous
    /// value and the format selection is cleared; on failure previously
    /// fetched metadata is left untouched.
    pub async fn request_info(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.state.clear_banners();

        let url = self.state.url.trim().to_string();
        if url.is_empty() {
            self.state.set_error(MSG_URL_REQUIRED);
            self.view.render(&self.state);
            return;
        }

        self.state.phase = Phase::FetchingInfo;
        self.view.render(&self.state);

        match self.api.video_info(&url).await {
            Ok(video) => {
                info!(
                    "fetched info for '{}' ({} formats)",
                    video.title,
                    video.formats.len()
                );
                self.state.video = Some(video);
                self.state.selected_format = None;
                self.state.phase = Phase::InfoReady;
            }
            Err(err) => {
                warn!("info request failed: {}", err);
                self.state.set_error(surface(&err, MSG_INFO_FAILED));
                self.state.phase = if self.state.video.is_some() {
                    Phase::InfoReady
                } else {
                    Phase::Idle
                };
            }
        }
        self.view.render(&self.state);
    }

    /// Download the currently selected format and push one save action
    /// to the view
    pub async fn request_download(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.state.clear_banners();

        let selection = match (&self.state.video, &self.state.selected_format) {
            (Some(video), Some(id)) => video.formats.iter().find(|f| f.id == *id).cloned(),
            _ => None,
        };
        let Some(format) = selection else {
            self.state.set_error(MSG_FORMAT_REQUIRED);
            self.view.render(&self.state);
            return;
        };

        let url = self.state.url.trim().to_string();
        self.state.phase = Phase::Downloading;
        self.view.render(&self.state);

        match self.api.download(&url, &format.id).await {
            Ok(data) => {
                let filename =
                    labels::download_filename(&save_extension(&format), Utc::now().timestamp_millis());
                match self.view.save_file(&filename, &data) {
                    Ok(()) => {
                        info!("saved {} bytes as {}", data.len(), filename);
                        self.state.set_success(MSG_DOWNLOAD_OK, Instant::now());
                    }
                    Err(err) => {
                        warn!("saving download failed: {}", err);
                        self.state.set_error(err.to_string());
                    }
                }
            }
            Err(err) => {
                warn!("download request failed: {}", err);
                self.state.set_error(surface(&err, MSG_DOWNLOAD_FAILED));
            }
        }
        self.state.phase = Phase::InfoReady;
        self.view.render(&self.state);
    }

    /// Advance time-driven state: expires the transient success banner
    pub fn tick(&mut self, now: Instant) {
        if self.state.expire_success(now) {
            self.view.render(&self.state);
        }
    }
}

/// File extension for a saved download
///
/// The format's own `ext` field is authoritative; recovering the extension
/// from the rendered label is kept as the legacy fallback, defaulting to
/// `mp4` when that fails too.
fn save_extension(format: &VideoFormat) -> String {
    if !format.ext.is_empty() {
        return format.ext.to_lowercase();
    }
    labels::extension_from_label(&labels::format_label(format))
        .unwrap_or_else(|| labels::DEFAULT_EXTENSION.to_string())
}

/// User-facing message for a failed operation: backend messages verbatim,
/// everything else collapses to the generic fallback
fn surface(err: &AppError, fallback: &str) -> String {
    match err {
        AppError::Backend(message) => message.clone(),
        _ => fallback.to_string(),
    }
}
