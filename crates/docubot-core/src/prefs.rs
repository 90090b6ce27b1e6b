//! Persisted client preferences.
//!
//! One small TOML file with all-optional keys; a missing or malformed file
//! reads as defaults. The storage sits behind a trait so the UI can be
//! driven by an in-memory implementation in tests (and on platforms that
//! report no config directory).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// On-disk preference set. Unknown keys are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Theme marker: the literal `"dark"` selects dark, anything else light.
    pub theme: Option<String>,
}

/// Where preferences live.
pub trait PreferenceStorage: Send + Sync {
    /// Read the stored preferences, or defaults when nothing usable exists.
    fn load(&self) -> Preferences;

    /// Replace the stored preferences.
    fn save(&self, prefs: &Preferences) -> Result<(), String>;
}

/// TOML file under the platform config dir.
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Standard location: `<config_dir>/docubot/preferences.toml`.
    /// `None` when the platform reports no config directory.
    pub fn standard() -> Option<Self> {
        dirs::config_dir().map(|d| Self {
            path: d.join("docubot").join("preferences.toml"),
        })
    }

    /// Explicit location, for tests and overrides.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferenceStorage for FilePreferences {
    fn load(&self) -> Preferences {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn save(&self, prefs: &Preferences) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create preferences directory: {}", e))?;
        }
        let content = toml::to_string_pretty(prefs)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write preferences: {}", e))?;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

/// In-memory storage with a shareable handle.
///
/// Clones share the same underlying value, so a test can hand one handle to
/// a [`crate::ThemeStore`] and inspect the other after toggles.
#[derive(Clone, Default)]
pub struct MemoryPreferences {
    inner: Arc<Mutex<Preferences>>,
}

impl MemoryPreferences {
    /// Current stored value (what a reload would see).
    pub fn snapshot(&self) -> Preferences {
        self.inner.lock().unwrap().clone()
    }
}

impl PreferenceStorage for MemoryPreferences {
    fn load(&self) -> Preferences {
        self.snapshot()
    }

    fn save(&self, prefs: &Preferences) -> Result<(), String> {
        *self.inner.lock().unwrap() = prefs.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryPreferences::default();
        assert_eq!(storage.load(), Preferences::default());

        let prefs = Preferences {
            theme: Some("dark".to_string()),
        };
        storage.save(&prefs).unwrap();
        assert_eq!(storage.load(), prefs);
    }

    #[test]
    fn memory_clones_share_state() {
        let a = MemoryPreferences::default();
        let b = a.clone();
        a.save(&Preferences {
            theme: Some("light".to_string()),
        })
        .unwrap();
        assert_eq!(b.snapshot().theme.as_deref(), Some("light"));
    }
}
