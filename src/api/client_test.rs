//! Backend client integration tests
//!
//! Runs the real reqwest client against a one-shot local TCP stub that
//! replies with a canned HTTP response, exercising the status/body matrix:
//! success parse, structured `{error}` passthrough, and the generic
//! fallback for unstructured failure bodies.

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use crate::api::{BackendClient, VideoApi};
    use crate::core::controller::{MSG_DOWNLOAD_FAILED, MSG_INFO_FAILED};
    use crate::core::models::AppError;

    const INFO_JSON: &str = r#"{
        "id": "abc123",
        "title": "Test Video",
        "duration": 125,
        "thumbnail": "http://example.com/thumb.jpg",
        "formats": [
            {
                "id": "22",
                "ext": "mp4",
                "format": "720p60",
                "filesize": 15728640,
                "height": 720,
                "width": 1280,
                "fps": 60.0,
                "vcodec": "avc1.64001F",
                "acodec": "mp4a.40.2",
                "abr": 128.0,
                "tbr": 2500.5
            },
            {
                "id": "251",
                "ext": "webm",
                "format": "audio only",
                "filesize": null,
                "height": null,
                "width": null,
                "fps": null,
                "vcodec": "none",
                "acodec": "opus",
                "abr": 160.0,
                "tbr": null
            }
        ]
    }"#;

    /// Serve exactly one canned HTTP response, then close
    async fn spawn_stub(status: &'static str, content_type: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            read_request(&mut socket).await;

            let header = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                content_type,
                body.len()
            );
            let _ = socket.write_all(header.as_bytes()).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/api", addr)
    }

    /// Consume the full request (headers plus any Content-Length body)
    /// before responding
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let Ok(n) = socket.read(&mut chunk).await else {
                return;
            };
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..pos]);
                let content_length = headers
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= pos + 4 + content_length {
                    return;
                }
            }
        }
    }

    fn client(base_url: &str) -> BackendClient {
        BackendClient::new(base_url, "test-agent").unwrap()
    }

    #[tokio::test]
    async fn test_info_success_parses_metadata_in_order() {
        let base = spawn_stub("200 OK", "application/json", INFO_JSON.into()).await;

        let info = client(&base).video_info("https://youtu.be/abc123").await.unwrap();

        assert_eq!(info.id, "abc123");
        assert_eq!(info.title, "Test Video");
        assert_eq!(info.duration, 125);
        let ids: Vec<&str> = info.formats.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["22", "251"]);
        assert_eq!(info.formats[0].filesize, Some(15_728_640));
        assert_eq!(info.formats[1].filesize, None);
        assert_eq!(info.formats[1].acodec, "opus");
    }

    #[tokio::test]
    async fn test_info_error_message_passes_through_verbatim() {
        let base = spawn_stub(
            "400 Bad Request",
            "application/json",
            br#"{"error": "Invalid URL. Only YouTube URLs."}"#.to_vec(),
        )
        .await;

        let err = client(&base)
            .video_info("https://example.com/x")
            .await
            .unwrap_err();

        match err {
            AppError::Backend(message) => assert_eq!(message, "Invalid URL. Only YouTube URLs."),
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_info_error_without_structured_body_is_generic() {
        let base = spawn_stub("500 Internal Server Error", "text/plain", b"boom".to_vec()).await;

        let err = client(&base)
            .video_info("https://youtu.be/abc123")
            .await
            .unwrap_err();

        match err {
            AppError::Backend(message) => assert_eq!(message, MSG_INFO_FAILED),
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_returns_raw_payload() {
        let base = spawn_stub("200 OK", "application/octet-stream", b"FAKEVIDEO".to_vec()).await;

        let data = client(&base)
            .download("https://youtu.be/abc123", "22")
            .await
            .unwrap();

        assert_eq!(data.as_ref(), b"FAKEVIDEO");
    }

    #[tokio::test]
    async fn test_download_error_message_passes_through_verbatim() {
        let base = spawn_stub(
            "400 Bad Request",
            "application/json",
            br#"{"error": "bad format"}"#.to_vec(),
        )
        .await;

        let err = client(&base)
            .download("https://youtu.be/abc123", "9999")
            .await
            .unwrap_err();

        match err {
            AppError::Backend(message) => assert_eq!(message, "bad format"),
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_error_without_structured_body_is_generic() {
        let base = spawn_stub("502 Bad Gateway", "text/html", b"<html>bad gateway</html>".to_vec())
            .await;

        let err = client(&base)
            .download("https://youtu.be/abc123", "22")
            .await
            .unwrap_err();

        match err {
            AppError::Backend(message) => assert_eq!(message, MSG_DOWNLOAD_FAILED),
            other => panic!("expected backend error, got {:?}", other),
        }
    }
}
