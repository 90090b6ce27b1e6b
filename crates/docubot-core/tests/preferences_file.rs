//! File-backed preference storage round trips.

use docubot_core::{FilePreferences, PreferenceStorage, Preferences, ThemeMode, ThemeStore};

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FilePreferences::at(dir.path().join("preferences.toml"));
    assert_eq!(storage.load(), Preferences::default());
}

#[test]
fn save_creates_directories_and_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FilePreferences::at(dir.path().join("nested").join("preferences.toml"));

    let prefs = Preferences {
        theme: Some("dark".to_string()),
    };
    storage.save(&prefs).expect("save");
    assert_eq!(storage.load(), prefs);
}

#[test]
fn malformed_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "theme = [not toml").expect("write");

    assert_eq!(FilePreferences::at(path).load(), Preferences::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "theme = \"dark\"\nfont_size = 14\n").expect("write");

    let prefs = FilePreferences::at(path).load();
    assert_eq!(prefs.theme.as_deref(), Some("dark"));
}

#[test]
fn theme_store_round_trips_through_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");

    let mut store = ThemeStore::new(Box::new(FilePreferences::at(path.clone())));
    assert_eq!(store.mode(), ThemeMode::Light);
    store.toggle();

    // A fresh store sees the persisted dark marker.
    let store = ThemeStore::new(Box::new(FilePreferences::at(path)));
    assert_eq!(store.mode(), ThemeMode::Dark);
}
