//! Interactive console adapter
//!
//! Renders the metadata card, the numbered format list, busy indicators and
//! the message banners to stdout. The card and list are re-printed only when
//! a different video arrives so a long session stays readable.

use std::path::PathBuf;

use tracing::info;

use crate::core::controller::{Phase, UiState};
use crate::core::labels;
use crate::core::models::AppResult;

use super::{write_payload, View};

pub struct ConsoleView {
    output_directory: PathBuf,
    last_video_id: Option<String>,
}

impl ConsoleView {
    pub fn new(output_directory: PathBuf) -> Self {
        Self {
            output_directory,
            last_video_id: None,
        }
    }

    fn print_video_card(&self, state: &UiState) {
        let Some(video) = &state.video else {
            return;
        };

        println!();
        println!("  {}", video.title);
        if !video.thumbnail.is_empty() {
            println!("  thumbnail: {}", video.thumbnail);
        }
        println!(
            "  duration: {} minutes | formats: {}",
            labels::duration_minutes(video.duration),
            video.formats.len()
        );
        println!();
        for (index, format) in video.formats.iter().enumerate() {
            println!("  [{}] {} ({})", index + 1, labels::format_label(format), format.id);
        }
        println!();
    }
}

impl View for ConsoleView {
    fn render(&mut self, state: &UiState) {
        if let Some(error) = &state.error {
            println!("error: {}", error);
        }
        if let Some(success) = &state.success {
            println!("{}", success);
        }

        match state.phase {
            Phase::FetchingInfo => println!("Fetching video info..."),
            Phase::Downloading => println!("Downloading..."),
            Phase::Idle | Phase::InfoReady => {
                let current_id = state.video.as_ref().map(|v| v.id.clone());
                if current_id.is_some() && current_id != self.last_video_id {
                    self.print_video_card(state);
                    self.last_video_id = current_id;
                }
            }
        }
    }

    fn save_file(&mut self, name: &str, data: &[u8]) -> AppResult<()> {
        let path = write_payload(&self.output_directory, name, data)?;
        info!("wrote download to {:?}", path);
        println!("saved: {}", path.display());
        Ok(())
    }
}
