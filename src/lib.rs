//! yt-downloader-client - Core Library
//!
//! Client for a remote video-download backend: fetch the available encoding
//! options for a video URL, pick one, retrieve the payload and save it
//! locally. The form controller in `core` sequences the two backend calls;
//! `api` wraps the HTTP endpoints; `views` holds the interactive and batch
//! terminal adapters.

pub mod api;
pub mod core;
pub mod views;

// Re-export commonly used types
pub use api::{BackendClient, VideoApi};
pub use core::{
    config::AppConfig,
    controller::{FormController, Phase, UiState},
    models::{AppError, AppResult, VideoFormat, VideoInfo},
};
pub use views::{BatchView, ConsoleView, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the library with default settings
pub fn init() -> anyhow::Result<()> {
    // 初始化日志系统（如果还没有初始化）
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "yt_downloader_client=info");
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok(); // 忽略重复初始化错误

    tracing::info!("📚 {} v{} initialized", NAME, VERSION);
    Ok(())
}
