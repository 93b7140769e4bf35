//! HTTP Server receiving video uploads.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                          |
//! |--------|-------------------|--------------------------------------|
//! | GET    | `/health`         | Health check                         |
//! | GET    | `/api/test`       | Smoke test, `{"message":"working"}`  |
//! | POST   | `/api/upload`     | Upload a video (multipart `file`)    |
//!
//! Any other path falls back to the built frontend when a static directory
//! is configured.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::types::{MessageBody, UploadReceipt};
use crate::config::{ServerConfig, VIDEO_MIME_PREFIX};
use crate::error::{ServerError, ServerResult, UploadError, UploadResult};
use crate::storage::UploadStore;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    store: UploadStore,
    max_file_size: u64,
}

impl AppState {
    pub fn new(store: UploadStore, max_file_size: u64) -> Self {
        Self { store, max_file_size }
    }
}

/// Build the application router.
pub fn build_router(config: &ServerConfig, store: UploadStore) -> Router {
    // Any origin: the page may be served by trunk on another port.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let state = Arc::new(AppState::new(store, config.max_file_size));

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/api/test", get(smoke_test))
        .route("/api/upload", post(upload_video));

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(DefaultBodyLimit::max(config.body_limit()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let store = UploadStore::open(&config.upload_dir)
        .await
        .map_err(|source| ServerError::UploadDir {
            path: config.upload_dir.display().to_string(),
            source,
        })?;

    let app = build_router(&config, store);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("🚀 Upload server running on http://{}", addr);
    tracing::info!("   POST /api/upload - Upload a video (max {} bytes)", config.max_file_size);
    tracing::info!("   GET  /api/test   - Smoke test");
    tracing::info!("   GET  /health     - Health check");
    tracing::info!("   Uploads stored in {}", config.upload_dir.display());
    if let Some(dir) = &config.static_dir {
        tracing::info!("   Serving frontend from {}", dir.display());
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "video-upload-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "upload": "POST /api/upload",
            "test": "GET /api/test"
        }
    }))
}

/// Smoke test endpoint
async fn smoke_test() -> Json<MessageBody> {
    Json(MessageBody::new("working"))
}

/// Upload video endpoint
async fn upload_video(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> UploadResult<Json<UploadReceipt>> {
    let max_bytes = state.max_file_size;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::from_multipart(e, max_bytes))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        if !content_type.starts_with(VIDEO_MIME_PREFIX) {
            return Err(UploadError::UnsupportedType(content_type));
        }

        let id = Uuid::new_v4();
        let mut pending = state.store.begin(&id, &file_name).await?;

        loop {
            let chunk = match field.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => {
                    pending.discard().await;
                    return Err(UploadError::from_multipart(e, max_bytes));
                }
            };

            if pending.written() + chunk.len() as u64 > max_bytes {
                pending.discard().await;
                return Err(UploadError::TooLarge { max_bytes });
            }

            if let Err(e) = pending.write(&chunk).await {
                pending.discard().await;
                return Err(e.into());
            }
        }

        let size_bytes = pending.written();
        let path = pending.finish().await?;

        tracing::info!(
            %id,
            file = %file_name,
            %content_type,
            size_bytes,
            path = %path.display(),
            "📄 upload stored"
        );

        return Ok(Json(UploadReceipt::new(id, file_name, content_type, size_bytes)));
    }

    Err(UploadError::NoFile)
}
