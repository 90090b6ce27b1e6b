use std::future::Future;
use std::pin::Pin;

use reqwest::multipart;

use super::{AnalysisBackend, UPLOAD_PATH, UploadError, parse_response};
use crate::AnalysisResult;
use crate::upload::{PDF_MIME, UploadRequest};

/// Client for a running analysis service.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Point at a service base URL such as `http://localhost:5000`.
    ///
    /// No client-side timeout is configured; a stalled upload resolves
    /// whenever the transport gives up.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), UPLOAD_PATH)
    }

    /// Assemble the multipart form: `file` always, `query` only when the
    /// request carries one, `use_custom_model` always.
    fn build_form(&self, request: &UploadRequest) -> Result<multipart::Form, UploadError> {
        let bytes = std::fs::read(&request.file).map_err(|source| UploadError::File {
            path: request.file.clone(),
            source,
        })?;
        let part = multipart::Part::bytes(bytes)
            .file_name(request.filename())
            .mime_str(PDF_MIME)
            .map_err(|e| UploadError::Network(e.to_string()))?;
        let mut form = multipart::Form::new().part("file", part);
        if let Some(query) = &request.query {
            form = form.text("query", query.clone());
        }
        Ok(form.text("use_custom_model", request.model_flag()))
    }
}

impl AnalysisBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    fn analyze<'a>(
        &'a self,
        request: &'a UploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult, UploadError>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.upload_url();
            let form = self.build_form(request)?;
            tracing::debug!(url = %url, file = %request.file.display(), "uploading document");

            let resp = self
                .client
                .post(&url)
                .multipart(form)
                .send()
                .await
                .map_err(|e| UploadError::Network(e.to_string()))?;

            let status = resp.status().as_u16();
            let body = resp
                .bytes()
                .await
                .map_err(|e| UploadError::Network(e.to_string()))?;

            let result = parse_response(status, &body);
            if let Err(err) = &result {
                tracing::warn!(status, error = %err, "upload produced no analysis");
            }
            result
        })
    }
}
