//! Analysis backend trait and implementations for the upload endpoint.

pub mod http;
pub mod mock;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::AnalysisResult;
use crate::upload::UploadRequest;

pub use http::HttpBackend;

/// Path of the upload endpoint, relative to the server base URL.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Why an upload produced no analysis.
#[derive(Error, Debug)]
pub enum UploadError {
    /// Non-2xx response whose body carried a server `error` string.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx response with no usable `error` field.
    #[error("server returned HTTP {0}")]
    Failed(u16),
    /// 2xx response whose body did not decode as an analysis.
    #[error("unreadable response body: {0}")]
    Body(String),
    /// The request never completed (connect, send, or read failure).
    #[error("request failed: {0}")]
    Network(String),
    /// The selected file could not be read before sending.
    #[error("could not read {}: {source}", path.display())]
    File {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

impl UploadError {
    /// Inline message the upload form shows for this failure.
    ///
    /// A server-provided `error` string passes through verbatim; everything
    /// the server never saw reads as transient, and the rest collapses to a
    /// generic failure.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Rejected(msg) => msg.clone(),
            UploadError::Failed(_) | UploadError::File { .. } => "Upload failed".to_string(),
            UploadError::Body(_) | UploadError::Network(_) => {
                "File upload failed, please try again later.".to_string()
            }
        }
    }
}

/// A backend that turns an upload into an analysis.
///
/// The HTTP implementation talks to a running service; the one in [`mock`]
/// replays scripted responses for tests.
pub trait AnalysisBackend: Send + Sync {
    /// Short name for logging (e.g. "http", "mock").
    fn name(&self) -> &str;

    /// Upload one document and wait for its analysis.
    fn analyze<'a>(
        &'a self,
        request: &'a UploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult, UploadError>> + Send + 'a>>;
}

/// Map a raw response to an analysis or the matching failure.
///
/// Non-2xx responses prefer the server's own `error` string when the body
/// is JSON carrying one; otherwise only the status is reported.
pub fn parse_response(status: u16, body: &[u8]) -> Result<AnalysisResult, UploadError> {
    if !(200..300).contains(&status) {
        let server_error = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));
        return Err(match server_error {
            Some(msg) => UploadError::Rejected(msg),
            None => UploadError::Failed(status),
        });
    }
    serde_json::from_slice(body).map_err(|e| UploadError::Body(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_parses() {
        let body = br#"{"entities": {"person": ["Alice"]}, "relevant_chunks": ["Intro text."], "summary": ["Key finding."]}"#;
        let analysis = parse_response(200, body).unwrap();
        assert_eq!(analysis.entities["person"], vec!["Alice"]);
        assert_eq!(analysis.relevant_chunks, vec!["Intro text."]);
        assert_eq!(analysis.summary, vec!["Key finding."]);
    }

    #[test]
    fn entity_order_follows_the_body() {
        let body = br#"{"entities": {"person": ["Alice"], "date": ["2021"], "organization": ["ACM"]}}"#;
        let analysis = parse_response(200, body).unwrap();
        let keys: Vec<&str> = analysis.entities.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["person", "date", "organization"]);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let analysis = parse_response(200, br#"{}"#).unwrap();
        assert!(analysis.entities.is_empty());
        assert!(analysis.relevant_chunks.is_empty());
        assert!(analysis.summary.is_empty());
        assert!(analysis.is_empty());
    }

    #[test]
    fn server_error_string_passes_through() {
        let err = parse_response(500, br#"{"error": "model unavailable"}"#).unwrap_err();
        match &err {
            UploadError::Rejected(msg) => assert_eq!(msg, "model unavailable"),
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(err.user_message(), "model unavailable");
    }

    #[test]
    fn error_status_without_field_is_generic() {
        let err = parse_response(502, br#"{"detail": "bad gateway"}"#).unwrap_err();
        assert!(matches!(err, UploadError::Failed(502)));
        assert_eq!(err.user_message(), "Upload failed");
    }

    #[test]
    fn error_status_with_unparseable_body_is_generic() {
        let err = parse_response(500, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, UploadError::Failed(500)));
        assert_eq!(err.user_message(), "Upload failed");
    }

    #[test]
    fn ok_status_with_bad_body_reads_as_transient() {
        let err = parse_response(200, b"not json").unwrap_err();
        assert!(matches!(err, UploadError::Body(_)));
        assert_eq!(
            err.user_message(),
            "File upload failed, please try again later."
        );
    }

    #[test]
    fn network_failure_reads_as_transient() {
        let err = UploadError::Network("connection refused".to_string());
        assert_eq!(
            err.user_message(),
            "File upload failed, please try again later."
        );
    }
}
