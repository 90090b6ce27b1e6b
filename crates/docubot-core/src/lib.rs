use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod prefs;
pub mod service;
pub mod theme;
pub mod upload;

// Re-export for convenience
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStorage, Preferences};
pub use service::{AnalysisBackend, HttpBackend, UploadError};
pub use theme::{ThemeMode, ThemeStore};
pub use upload::UploadRequest;

/// Parsed analysis the service returns for one uploaded document.
///
/// Every field defaults to empty, so a response that omits a section
/// deserializes cleanly; an empty section simply renders as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Entity-type label to entity strings, in the order the service
    /// emitted the groups.
    #[serde(default)]
    pub entities: IndexMap<String, Vec<String>>,
    /// Document excerpts relevant to the query, most relevant first.
    #[serde(default)]
    pub relevant_chunks: Vec<String>,
    /// Extracted summary sentences, in document order.
    #[serde(default)]
    pub summary: Vec<String>,
}

impl AnalysisResult {
    /// True when no section has any content.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relevant_chunks.is_empty() && self.summary.is_empty()
    }
}
