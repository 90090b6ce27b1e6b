use super::App;
use crate::action::Action;

impl App {
    /// Handle input while the file picker overlay is open.
    ///
    /// Enter descends into directories; on a file it hands the path to the
    /// form, which owns the PDF check, and closes the overlay either way.
    pub(super) fn handle_picker_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::NavigateBack => {
                self.picker_open = false;
            }
            Action::MoveDown => {
                let max = self.file_picker.entries.len().saturating_sub(1);
                if self.file_picker.cursor < max {
                    self.file_picker.cursor += 1;
                }
            }
            Action::MoveUp => {
                self.file_picker.cursor = self.file_picker.cursor.saturating_sub(1);
            }
            Action::PageDown => {
                let max = self.file_picker.entries.len().saturating_sub(1);
                self.file_picker.cursor =
                    (self.file_picker.cursor + self.visible_rows.max(1)).min(max);
            }
            Action::PageUp => {
                self.file_picker.cursor = self
                    .file_picker
                    .cursor
                    .saturating_sub(self.visible_rows.max(1));
            }
            Action::GoTop => {
                self.file_picker.cursor = 0;
            }
            Action::GoBottom => {
                self.file_picker.cursor = self.file_picker.entries.len().saturating_sub(1);
            }
            Action::DrillIn => {
                if !self.file_picker.enter_directory() {
                    let entry = self.file_picker.entries.get(self.file_picker.cursor).cloned();
                    if let Some(entry) = entry {
                        self.form.select_file(entry.path);
                        self.picker_open = false;
                    }
                }
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(4);
            }
            _ => {}
        }
    }
}
