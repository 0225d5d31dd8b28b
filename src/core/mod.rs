//! Core client logic
//!
//! This module contains the data models, the form controller state machine,
//! label composition, and configuration handling for the downloader client.

pub mod config;
pub mod controller;
pub mod labels;
pub mod models;



#[cfg(test)]
mod labels_test;

// Re-export commonly used types
pub use config::AppConfig;
pub use controller::{FormController, Phase, UiState};
