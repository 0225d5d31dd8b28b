//! Label composition unit tests

#[cfg(test)]
mod tests {
    use crate::core::labels::{
        download_filename, duration_minutes, extension_from_label, format_label,
        DEFAULT_EXTENSION,
    };
    use crate::core::models::VideoFormat;

    fn format(ext: &str) -> VideoFormat {
        VideoFormat {
            id: "22".to_string(),
            ext: ext.to_string(),
            format: String::new(),
            filesize: None,
            height: None,
            width: None,
            fps: None,
            vcodec: "avc1".to_string(),
            acodec: "mp4a".to_string(),
            abr: None,
            tbr: None,
        }
    }

    #[test]
    fn test_full_label_composition() {
        let mut f = format("mp4");
        f.format = "720p60".to_string();
        f.height = Some(720);
        f.filesize = Some(15_728_640);

        assert_eq!(format_label(&f), "MP4 - 720p60 (720p) - 15.0MB");
    }

    #[test]
    fn test_label_with_extension_only() {
        assert_eq!(format_label(&format("webm")), "WEBM");
    }

    #[test]
    fn test_label_skips_empty_format_description() {
        let mut f = format("mp4");
        f.height = Some(1080);

        assert_eq!(format_label(&f), "MP4 (1080p)");
    }

    #[test]
    fn test_label_size_has_one_decimal_place() {
        let mut f = format("mp4");
        f.filesize = Some(1_048_576);
        assert_eq!(format_label(&f), "MP4 - 1.0MB");

        f.filesize = Some(1_572_864);
        assert_eq!(format_label(&f), "MP4 - 1.5MB");
    }

    #[test]
    fn test_duration_is_floor_division_by_sixty() {
        assert_eq!(duration_minutes(125), 2);
        assert_eq!(duration_minutes(59), 0);
        assert_eq!(duration_minutes(60), 1);
        assert_eq!(duration_minutes(0), 0);
    }

    #[test]
    fn test_extension_recovered_from_label() {
        assert_eq!(
            extension_from_label("MP4 - 720p60 (720p) - 15.0MB"),
            Some("mp4".to_string())
        );
        assert_eq!(
            extension_from_label("WEBM - audio only"),
            Some("webm".to_string())
        );
    }

    #[test]
    fn test_extension_recovery_fails_without_trailing_whitespace() {
        // A bare extension has no whitespace after the token, so the legacy
        // pattern finds nothing and callers fall back to the default.
        assert_eq!(extension_from_label("MP4"), None);
        assert_eq!(extension_from_label(""), None);
        assert_eq!(DEFAULT_EXTENSION, "mp4");
    }

    #[test]
    fn test_download_filename_layout() {
        assert_eq!(
            download_filename("mp4", 1_700_000_000_000),
            "video_1700000000000.mp4"
        );
        assert_eq!(download_filename("webm", 0), "video_0.webm");
    }
}
