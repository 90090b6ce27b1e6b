mod update;
mod update_picker;
mod upload;

use std::path::PathBuf;

use tokio::sync::mpsc;

use docubot_core::ThemeStore;
use docubot_core::upload::is_pdf;

use crate::model::form::UploadForm;
use crate::model::results::ResultsPanel;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Demo,
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    TextInput,
}

/// State for the file picker overlay.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
}

/// A single entry in the file picker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_pdf: bool,
}

impl FilePickerState {
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut state = Self {
            current_dir,
            entries: Vec::new(),
            cursor: 0,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_pdf: false,
            });
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
            let mut dirs = Vec::new();
            let mut files = Vec::new();

            for entry in read_dir.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();

                // Skip hidden files/dirs
                if name.starts_with('.') {
                    continue;
                }

                if path.is_dir() {
                    dirs.push(FileEntry {
                        name,
                        path,
                        is_dir: true,
                        is_pdf: false,
                    });
                } else {
                    files.push(FileEntry {
                        name,
                        is_pdf: is_pdf(&path),
                        path,
                        is_dir: false,
                    });
                }
            }

            dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            entries.extend(dirs);
            entries.extend(files);
        }

        self.entries = entries;
        self.cursor = 0;
    }

    /// Enter the directory at cursor, or return false if not a directory.
    pub fn enter_directory(&mut self) -> bool {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_dir
        {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            return true;
        }
        false
    }
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub theme: Theme,
    /// Persists the active theme choice across sessions.
    pub theme_store: ThemeStore,
    /// Base URL of the analysis service (shown in the demo footer).
    pub server: String,
    pub form: UploadForm,
    pub results: ResultsPanel,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Scroll offset for the landing page content.
    pub landing_scroll: u16,
    /// Height of the visible content area (set on resize, used for page up/down).
    pub visible_rows: usize,
    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    /// File picker state.
    pub file_picker: FilePickerState,
    /// Whether the file picker overlay is open.
    pub picker_open: bool,
}

impl App {
    pub fn new(theme_store: ThemeStore, server: String) -> Self {
        let theme = Theme::for_mode(theme_store.mode());
        Self {
            screen: Screen::Landing,
            input_mode: InputMode::Normal,
            theme,
            theme_store,
            server,
            form: UploadForm::default(),
            results: ResultsPanel::default(),
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            landing_scroll: 0,
            visible_rows: 20,
            backend_cmd_tx: None,
            file_picker: FilePickerState::new(),
            picker_open: false,
        }
    }

    // update() is in update.rs

    // submit_upload() and handle_backend_event() are in upload.rs

    /// Flip the persisted theme preference and swap in the matching palette.
    fn toggle_theme(&mut self) {
        let mode = self.theme_store.toggle();
        self.theme = Theme::for_mode(mode);
    }

    /// Render the current screen, then any overlays on top.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        match self.screen {
            Screen::Landing => crate::view::landing::render_in(f, self, area),
            Screen::Demo => crate::view::demo::render_in(f, self, area),
        }

        if self.picker_open {
            crate::view::file_picker::render(f, self);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
