//! HTTP service uploading a video to the backend.
//!
//! The request body is a `FormData` with the file under `file`. No
//! `Content-Type` header is set by hand: the browser writes
//! `multipart/form-data` together with the boundary it generated.

use gloo_net::http::Request;
use js_sys::Error as JsError;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{UploadError, UploadResult};

/// Sends one file and resolves with the parsed response body.
///
/// One call is one request. Callers are responsible for never having two in
/// flight.
#[allow(async_fn_in_trait)]
pub trait UploadTransport<F> {
    async fn upload(&self, file: &F) -> UploadResult<Value>;
}

/// Browser transport built on `fetch` through gloo-net.
#[derive(Clone, Debug)]
pub struct HttpUploadTransport {
    endpoint: String,
}

impl HttpUploadTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl UploadTransport<File> for HttpUploadTransport {
    async fn upload(&self, file: &File) -> UploadResult<Value> {
        let form_data = FormData::new()
            .map_err(|e| UploadError::Client(format!("Failed to create FormData: {}", js_error_text(&e))))?;

        form_data
            .append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| UploadError::Client(format!("Failed to append file: {}", js_error_text(&e))))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| UploadError::Client(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Turns a status and raw body into the upload outcome.
///
/// 2xx bodies become the result; anything else becomes a server error
/// carrying the body's `message` field when it has one.
pub fn interpret_response(status: u16, body: &str) -> UploadResult<Value> {
    if (200..300).contains(&status) {
        Ok(parse_body(body))
    } else {
        Err(UploadError::Server {
            status,
            message: server_message(body),
        })
    }
}

/// Parses a success body, keeping non-JSON text verbatim.
pub fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Extracts a non-empty `message` string from a JSON object error body.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<JsError>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body_is_kept_verbatim() {
        let value = interpret_response(200, r#"{"id": "abc123", "frames": [1, 2.5, null]}"#).unwrap();
        assert_eq!(value, json!({"id": "abc123", "frames": [1, 2.5, null]}));
    }

    #[test]
    fn test_non_json_success_body_becomes_string() {
        let value = interpret_response(201, "stored").unwrap();
        assert_eq!(value, Value::String("stored".into()));
        assert_eq!(interpret_response(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn test_error_status_reads_message_field() {
        let err = interpret_response(500, r#"{"message": "server busy"}"#).unwrap_err();
        assert_eq!(
            err,
            UploadError::Server {
                status: 500,
                message: Some("server busy".into())
            }
        );
    }

    #[test]
    fn test_error_status_without_message() {
        let err = interpret_response(413, "<html>Payload Too Large</html>").unwrap_err();
        assert_eq!(err.display_message(), "Request failed with status code 413");

        let err = interpret_response(400, r#"{"detail": "nope"}"#).unwrap_err();
        assert_eq!(err, UploadError::Server { status: 400, message: None });
    }

    #[test]
    fn test_error_body_must_be_an_object() {
        for body in [r#"["x"]"#, r#""server busy""#, "42", r#"{"message": 42}"#, r#"{"message": ""}"#] {
            let err = interpret_response(500, body).unwrap_err();
            assert_eq!(err, UploadError::Server { status: 500, message: None }, "body: {}", body);
            assert_eq!(err.display_message(), "Request failed with status code 500");
        }
    }

    #[test]
    fn test_endpoint_is_kept() {
        let transport = HttpUploadTransport::new("/api/upload");
        assert_eq!(transport.endpoint(), "/api/upload");
    }
}
