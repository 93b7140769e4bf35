use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use upload_server::{build_router, ServerConfig, UploadStore};

const BOUNDARY: &str = "----video-uploader-test-boundary";

async fn test_app(max_file_size: u64) -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = ServerConfig {
        upload_dir: temp_dir.path().to_path_buf(),
        max_file_size,
        ..ServerConfig::default()
    };
    let store = UploadStore::open(&config.upload_dir).await.unwrap();
    (build_router(&config, store), temp_dir)
}

fn multipart_upload(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn multipart_with_leading_field(leading: &[u8], data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"notes\"\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(leading);
    body.extend_from_slice(
        format!(
            "\r\n--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"clip.mp4\"\r\nContent-Type: video/mp4\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn stored_files(dir: &TempDir) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

#[tokio::test]
async fn accepts_video_and_returns_receipt() {
    let (app, dir) = test_app(1024 * 1024).await;
    let data = vec![7u8; 4096];

    let response = app
        .oneshot(multipart_upload("file", "clip.mp4", "video/mp4", &data))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let receipt = json_body(response).await;
    assert_eq!(receipt["fileName"], "clip.mp4");
    assert_eq!(receipt["contentType"], "video/mp4");
    assert_eq!(receipt["sizeBytes"], 4096);
    assert!(!receipt["id"].as_str().unwrap().is_empty());

    let files = stored_files(&dir);
    assert_eq!(files.len(), 1);
    assert_eq!(std::fs::read(&files[0]).unwrap(), data);
}

#[tokio::test]
async fn rejects_non_video_content_type() {
    let (app, dir) = test_app(1024 * 1024).await;

    let response = app
        .oneshot(multipart_upload("file", "notes.txt", "text/plain", b"hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = json_body(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Please select a valid video file"));
    assert!(stored_files(&dir).is_empty());
}

#[tokio::test]
async fn rejects_missing_file_part() {
    let (app, _dir) = test_app(1024 * 1024).await;

    let response = app
        .oneshot(multipart_upload("video", "clip.mp4", "video/mp4", b"data"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "No file provided");
}

#[tokio::test]
async fn rejects_oversized_file_and_discards_it() {
    let (app, dir) = test_app(16).await;

    let response = app
        .oneshot(multipart_upload("file", "big.mp4", "video/mp4", &[0u8; 64]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(json_body(response).await["message"].is_string());
    assert!(stored_files(&dir).is_empty());
}

#[tokio::test]
async fn accepts_file_of_exactly_the_ceiling() {
    let (app, dir) = test_app(16).await;

    let response = app
        .oneshot(multipart_upload("file", "exact.mp4", "video/mp4", &[1u8; 16]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["sizeBytes"], 16);
    assert_eq!(stored_files(&dir).len(), 1);
}

#[tokio::test]
async fn oversized_message_uses_bytes_off_megabyte_boundary() {
    let (app, _dir) = test_app(16).await;

    let response = app
        .oneshot(multipart_upload("file", "big.mp4", "video/mp4", &[0u8; 17]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        json_body(response).await["message"],
        "File size must be less than 16 bytes"
    );
}

#[tokio::test]
async fn body_limit_hit_by_other_field_reads_as_too_large() {
    let (app, dir) = test_app(16).await;
    let leading = vec![b'a'; 70_000];

    let response = app
        .oneshot(multipart_with_leading_field(&leading, b"tiny"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        json_body(response).await["message"],
        "File size must be less than 16 bytes"
    );
    assert!(stored_files(&dir).is_empty());
}

#[tokio::test]
async fn smoke_test_endpoint_reports_working() {
    let (app, _dir) = test_app(1024).await;

    let response = app
        .oneshot(Request::builder().uri("/api/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!({"message": "working"}));
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _dir) = test_app(1024).await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}
