//! View adapters
//!
//! A view is a pure function of the controller's state: it re-renders from
//! each pushed snapshot and carries no logic of its own beyond presentation.
//! The save action is part of the view contract because persisting the
//! payload is the client-side equivalent of the browser's download prompt.
//!
//! Two adapters share the single controller contract: an interactive
//! console session and a terse one-shot batch mode.

pub mod batch;
pub mod console;

pub use batch::BatchView;
pub use console::ConsoleView;

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::controller::UiState;
use crate::core::models::AppResult;

pub trait View {
    /// Re-render the visible form from the current state
    fn render(&mut self, state: &UiState);

    /// Persist a downloaded payload under the given file name
    fn save_file(&mut self, name: &str, data: &[u8]) -> AppResult<()>;
}

/// Write a payload into the output directory, creating it if needed
pub(crate) fn write_payload(directory: &Path, name: &str, data: &[u8]) -> AppResult<PathBuf> {
    fs::create_dir_all(directory)?;
    let path = directory.join(name);
    fs::write(&path, data)?;
    Ok(path)
}
