//! Conversion service client
//!
//! One operation: upload a source file as multipart form data and get back a
//! [`ConversionResult`] or an [`Error`] carrying a human-readable reason.
//! No retries, no client-side timeout, no inspection of the file's content.

use std::time::Instant;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use ada2py_core::prelude::*;
use ada2py_core::{ConversionResult, SourceFile};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Request timeout setting carried in configuration (milliseconds).
/// The client does not enforce it.
pub const DEFAULT_TIMEOUT_MS: u64 = 100_000;

/// Path of the conversion endpoint, appended to the base URL
pub const CONVERT_PATH: &str = "/api/v1/convert";

/// Multipart field holding the uploaded file
pub const FILE_FIELD: &str = "ada_file";

/// Reason reported when a failed response carries no usable `error` field
pub const FALLBACK_ERROR_MESSAGE: &str = "Conversion failed";

/// Resolved backend configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Request timeout setting (informational)
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Validate a base URL and build the config.
    ///
    /// Only absolute `http`/`https` URLs are accepted. A trailing `/` is
    /// dropped so the endpoint path joins cleanly.
    pub fn parse(base_url: &str, timeout_ms: u64) -> Result<Self> {
        let trimmed = base_url.trim();
        let parsed =
            Url::parse(trimmed).map_err(|e| Error::invalid_base_url(trimmed, e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(
                trimmed,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    /// Full URL of the conversion endpoint
    pub fn convert_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CONVERT_PATH)
    }
}

/// Conversion seam used by the orchestrator.
///
/// `ConvertApi` is the `Send` variant spawned onto the runtime;
/// `LocalConvertApi` is generated for single-threaded callers.
#[trait_variant::make(ConvertApi: Send)]
pub trait LocalConvertApi {
    /// Submit one file and wait for the service's answer
    async fn convert(&self, file: &SourceFile) -> Result<ConversionResult>;
}

/// HTTP client for the conversion service
#[derive(Debug, Clone)]
pub struct ConversionClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ConversionClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ada2py/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_http(http, config))
    }

    /// Use an existing reqwest client (shares its connection pool)
    pub fn with_http(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build the multipart body: exactly one field carrying the file
    async fn build_form(file: &SourceFile) -> Result<Form> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| Error::file_read(&file.path, e.to_string()))?;

        debug!("Read {} bytes from {}", bytes.len(), file.path.display());

        let part = Part::bytes(bytes).file_name(file.name.clone());
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

impl ConvertApi for ConversionClient {
    async fn convert(&self, file: &SourceFile) -> Result<ConversionResult> {
        let url = self.config.convert_url();
        let form = Self::build_form(file).await?;

        info!("Uploading {} to {}", file.name, url);
        let start = Instant::now();

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        info!(
            "Conversion response status: {} ({}ms, {} bytes)",
            status,
            start.elapsed().as_millis(),
            body.len()
        );

        if !status.is_success() {
            let message = error_message_from_body(&body);
            warn!("Conversion failed with status {}: {}", status, message);
            return Err(Error::conversion(status.as_u16(), message));
        }

        serde_json::from_slice::<ConversionResult>(&body)
            .map_err(|e| Error::invalid_response(e.to_string()))
    }
}

/// Error envelope returned by the service on failure
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
}

/// Extract the failure reason from an error response body.
///
/// Returns the envelope's `error` string, or [`FALLBACK_ERROR_MESSAGE`] when
/// the field is absent, empty, or the body is not a JSON object.
pub fn error_message_from_body(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_source(dir: &TempDir, name: &str, content: &str) -> SourceFile {
        let file_path = dir.path().join(name);
        std::fs::write(&file_path, content).unwrap();
        SourceFile::from_path(file_path)
    }

    fn client_for(server: &MockServer) -> ConversionClient {
        let config = ApiConfig::parse(&server.uri(), DEFAULT_TIMEOUT_MS).unwrap();
        ConversionClient::new(config).unwrap()
    }

    // ─────────────────────────────────────────────────────────
    // ApiConfig
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_default_config_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.convert_url(), "http://localhost:8000/api/v1/convert");
        assert_eq!(config.timeout_ms, 100_000);
    }

    #[test]
    fn test_parse_trims_trailing_slash() {
        let config = ApiConfig::parse("https://convert.example.com/", 5_000).unwrap();
        assert_eq!(config.base_url, "https://convert.example.com");
        assert_eq!(
            config.convert_url(),
            "https://convert.example.com/api/v1/convert"
        );
    }

    #[test]
    fn test_parse_keeps_path_prefix() {
        let config = ApiConfig::parse("http://gateway:9000/ada", 1).unwrap();
        assert_eq!(config.convert_url(), "http://gateway:9000/ada/api/v1/convert");
    }

    #[test]
    fn test_parse_rejects_relative_url() {
        let err = ApiConfig::parse("/api", 1).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_parse_rejects_non_http_scheme() {
        let err = ApiConfig::parse("ftp://files.example.com", 1).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    // ─────────────────────────────────────────────────────────
    // Error envelope
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_error_message_from_envelope() {
        assert_eq!(
            error_message_from_body(br#"{"error":"File is empty"}"#),
            "File is empty"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message_from_body(b"{}"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            error_message_from_body(br#"{"error":""}"#),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            error_message_from_body(br#"{"detail":"nope"}"#),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            error_message_from_body(b"<html>413 Request Entity Too Large</html>"),
            FALLBACK_ERROR_MESSAGE
        );
    }

    // ─────────────────────────────────────────────────────────
    // convert()
    // ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_convert_success_returns_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "logic": "Test logic explanation",
                "unit_tests": "Test unit tests",
                "python_code": "print(\"Hello World\")"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "test.adb", "with Ada.Text_IO; use Ada.Text_IO;");

        let result = ConvertApi::convert(&client_for(&server), &file).await.unwrap();

        assert_eq!(result.logic, "Test logic explanation");
        assert_eq!(result.unit_tests, "Test unit tests");
        assert_eq!(result.converted_code, "print(\"Hello World\")");
    }

    #[tokio::test]
    async fn test_convert_sends_single_ada_file_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "test.adb", "test content");

        ConvertApi::convert(&client_for(&server), &file).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        let content_type = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&request.body);
        assert_eq!(body.matches("Content-Disposition").count(), 1);
        assert!(body.contains(r#"name="ada_file""#));
        assert!(body.contains(r#"filename="test.adb""#));
        assert!(body.contains("test content"));
    }

    #[tokio::test]
    async fn test_convert_empty_success_body_fields_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "logic": "only logic"
            })))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "partial.ada", "procedure P is begin null; end P;");

        let result = ConvertApi::convert(&client_for(&server), &file).await.unwrap();
        assert_eq!(result.logic, "only logic");
        assert!(result.unit_tests.is_empty());
        assert!(result.converted_code.is_empty());
    }

    #[tokio::test]
    async fn test_convert_error_surfaces_service_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "File is empty" })),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "empty.adb", "");

        let err = ConvertApi::convert(&client_for(&server), &file).await.unwrap_err();

        assert_eq!(err.to_string(), "File is empty");
        assert!(matches!(err, Error::Conversion { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_convert_error_without_error_field_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "main.adb", "null;");

        let err = ConvertApi::convert(&client_for(&server), &file).await.unwrap_err();
        assert_eq!(err.to_string(), "Conversion failed");
    }

    #[tokio::test]
    async fn test_convert_does_not_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "main.adb", "null;");

        assert!(ConvertApi::convert(&client_for(&server), &file).await.is_err());
        // `expect(1)` is verified when the server drops
    }

    #[tokio::test]
    async fn test_convert_invalid_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "main.adb", "null;");

        let err = ConvertApi::convert(&client_for(&server), &file).await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_convert_unreachable_backend_is_transport_error() {
        // Reserve a free port, then release it so nothing is listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base = format!("http://127.0.0.1:{}", port);
        let config = ApiConfig::parse(&base, DEFAULT_TIMEOUT_MS).unwrap();
        let client = ConversionClient::new(config).unwrap();

        let dir = TempDir::new().unwrap();
        let file = write_source(&dir, "main.adb", "null;");

        let err = ConvertApi::convert(&client, &file).await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[tokio::test]
    async fn test_convert_missing_file_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let file = SourceFile::from_path(Path::new("/definitely/not/here.adb"));
        let err = ConvertApi::convert(&client_for(&server), &file).await.unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
