use std::path::PathBuf;

use docubot_core::upload;

/// Shown when a selected file is not a PDF.
pub const UNSUPPORTED_FORMAT: &str = "Sorry, your file format is unsupported.";

/// Shown when submitting with no file selected.
pub const NO_FILE_SELECTED: &str = "Please select a PDF file.";

/// Hint text for the empty query field.
pub const QUERY_PLACEHOLDER: &str = "Enter a query (optional)";

/// State of the upload form on the demo screen.
#[derive(Debug, Default)]
pub struct UploadForm {
    /// The selected file; only ever holds paths that passed the PDF check.
    pub file: Option<PathBuf>,
    /// Free-text query, edited in place; trimmed at submit time.
    pub query: String,
    /// The custom-NER-model checkbox.
    pub use_custom_model: bool,
    /// True from submit until the matching outcome arrives.
    pub uploading: bool,
    /// Inline error shown on the form, if any.
    pub error: Option<String>,
}

impl UploadForm {
    /// Register a selection attempt.
    ///
    /// Every attempt clears a previous error first. A non-PDF selection
    /// sets the unsupported-format message and keeps the previously
    /// selected file; a valid one replaces it.
    pub fn select_file(&mut self, path: PathBuf) {
        self.error = None;
        if !upload::is_pdf(&path) {
            self.error = Some(UNSUPPORTED_FORMAT.to_string());
            return;
        }
        self.file = Some(path);
    }

    /// Display name of the selected file.
    pub fn file_label(&self) -> Option<String> {
        self.file.as_ref().map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| p.display().to_string())
        })
    }

    /// Apply one query-editing input (`'\x08'` is backspace).
    pub fn edit_query(&mut self, c: char) {
        if c == '\x08' {
            self.query.pop();
        } else {
            self.query.push(c);
        }
    }
}
