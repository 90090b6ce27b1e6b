use std::path::{Path, PathBuf};

/// MIME type the service accepts for document uploads.
pub const PDF_MIME: &str = "application/pdf";

/// True when the path's extension declares a PDF.
///
/// The service contract keys off the declared type, not the bytes, so a
/// mis-extensioned file is rejected here before anything is read.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// One upload to the analysis service, assembled fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: PathBuf,
    /// Trimmed query. `None` when blank after trimming, in which case the
    /// form field is omitted entirely.
    pub query: Option<String>,
    pub use_custom_model: bool,
}

impl UploadRequest {
    pub fn new(file: PathBuf, query: &str, use_custom_model: bool) -> Self {
        let trimmed = query.trim();
        Self {
            file,
            query: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            use_custom_model,
        }
    }

    /// Wire value for the `use_custom_model` field, always sent.
    pub fn model_flag(&self) -> &'static str {
        if self.use_custom_model { "true" } else { "false" }
    }

    /// Filename reported to the service in the multipart part.
    pub fn filename(&self) -> String {
        self.file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}
