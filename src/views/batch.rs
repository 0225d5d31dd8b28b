//! One-shot batch adapter for scripted use
//!
//! Same controller contract as the console session, terse output: errors go
//! to stderr, the format list is printed one per line so ids can be fed back
//! in on a second invocation.

use std::path::PathBuf;

use crate::core::controller::{Phase, UiState};
use crate::core::labels;
use crate::core::models::AppResult;

use super::{write_payload, View};

pub struct BatchView {
    output_directory: PathBuf,
    listed: bool,
}

impl BatchView {
    pub fn new(output_directory: PathBuf) -> Self {
        Self {
            output_directory,
            listed: false,
        }
    }
}

impl View for BatchView {
    fn render(&mut self, state: &UiState) {
        if let Some(error) = &state.error {
            eprintln!("error: {}", error);
        }

        if state.phase == Phase::InfoReady && !self.listed {
            if let Some(video) = &state.video {
                println!(
                    "{}\t{} min\t{} formats",
                    video.title,
                    labels::duration_minutes(video.duration),
                    video.formats.len()
                );
                for format in &video.formats {
                    println!("{}\t{}", format.id, labels::format_label(format));
                }
                self.listed = true;
            }
        }
    }

    fn save_file(&mut self, name: &str, data: &[u8]) -> AppResult<()> {
        let path = write_payload(&self.output_directory, name, data)?;
        println!("saved: {}", path.display());
        Ok(())
    }
}
