//! Label and filename composition for format options
//!
//! Pure string formatting, no I/O. The option label layout is
//! `EXT_UPPER[ - FORMAT][ (HEIGHTp)][ - SIZE_MB MB]` with the size in
//! mebibytes to one decimal place, and the duration shown on the metadata
//! card is whole minutes by floor division.

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::VideoFormat;

/// Container extension used when none can be determined
pub const DEFAULT_EXTENSION: &str = "mp4";

/// First alphanumeric token followed by whitespace, e.g. `mp4 ` in
/// `MP4 - 720p60 (720p)`. Matched case-insensitively.
static EXTENSION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([a-z0-9]+)\s").expect("extension token pattern is valid"));

/// Compose the human-readable label for one format option
///
/// Example: ext `mp4`, format `720p60`, height `720`, filesize `15728640`
/// produces `MP4 - 720p60 (720p) - 15.0MB`.
pub fn format_label(format: &VideoFormat) -> String {
    let mut label = format.ext.to_uppercase();

    if !format.format.is_empty() {
        label.push_str(&format!(" - {}", format.format));
    }
    if let Some(height) = format.height {
        label.push_str(&format!(" ({}p)", height));
    }
    if let Some(filesize) = format.filesize {
        let size_mb = filesize as f64 / 1024.0 / 1024.0;
        label.push_str(&format!(" - {:.1}MB", size_mb));
    }

    label
}

/// Whole minutes of a duration in seconds, rounded down
pub fn duration_minutes(seconds: u64) -> u64 {
    seconds / 60
}

/// Recover the container extension from a rendered option label
///
/// Legacy behavior carried over from the original front-end, which parsed
/// the extension back out of the visible label text. `VideoFormat::ext` is
/// the authoritative source; this is only the fallback path.
pub fn extension_from_label(label: &str) -> Option<String> {
    EXTENSION_TOKEN
        .captures(label)
        .map(|caps| caps[1].to_lowercase())
}

/// File name for a saved download: `video_<millis>.<ext>`
pub fn download_filename(extension: &str, timestamp_millis: i64) -> String {
    format!("video_{}.{}", timestamp_millis, extension)
}
