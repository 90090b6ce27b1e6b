//! Light/dark theme preference with synchronous persistence.

use crate::prefs::{PreferenceStorage, Preferences};

/// The two supported UI themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Marker persisted for this mode.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Only the literal `"dark"` selects dark; anything else, including
    /// absence, reads as light.
    pub fn from_marker(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label for the mode switch, naming the mode a toggle reaches.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

/// Owns the active mode and the storage it persists to.
///
/// Built once at startup; the stored preference is read a single time and
/// every toggle writes the new marker back in the same call.
pub struct ThemeStore {
    mode: ThemeMode,
    storage: Box<dyn PreferenceStorage>,
}

impl ThemeStore {
    pub fn new(storage: Box<dyn PreferenceStorage>) -> Self {
        let mode = ThemeMode::from_marker(storage.load().theme.as_deref());
        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist the new marker.
    ///
    /// A storage failure is logged and the in-memory flip stands; the UI
    /// never shows a theme it did not switch to.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        let prefs = Preferences {
            theme: Some(self.mode.marker().to_string()),
        };
        if let Err(err) = self.storage.save(&prefs) {
            tracing::warn!(error = %err, "could not persist theme preference");
        }
        self.mode
    }
}
