use super::{App, InputMode, Screen};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Quit confirmation modal — q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(4);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay intercepts everything except quit
        if self.show_help {
            match action {
                Action::Quit => {
                    self.confirm_quit = true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(4);
                }
                _ => {}
            }
            return false;
        }

        // File picker overlay
        if self.picker_open {
            self.handle_picker_action(action);
            return false;
        }

        // Query editor: characters land in the form, Enter submits
        if self.input_mode == InputMode::TextInput {
            match action {
                Action::Quit => {
                    // Only Ctrl+C maps to Quit while typing
                    self.should_quit = true;
                    return true;
                }
                Action::TextInput(ch) => {
                    self.form.edit_query(ch);
                }
                Action::TextConfirm => {
                    self.input_mode = InputMode::Normal;
                    self.submit_upload();
                }
                Action::TextCancel => {
                    self.input_mode = InputMode::Normal;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(4);
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::ToggleTheme => {
                self.toggle_theme();
            }
            Action::NavigateBack => {
                if self.screen == Screen::Demo {
                    self.screen = Screen::Landing;
                }
            }
            Action::DrillIn => match self.screen {
                Screen::Landing => {
                    self.screen = Screen::Demo;
                }
                Screen::Demo => {
                    self.submit_upload();
                }
            },
            Action::OpenPicker => {
                if self.screen == Screen::Demo {
                    // Re-read the directory so newly added files show up
                    self.file_picker.refresh_entries();
                    self.picker_open = true;
                }
            }
            Action::EditQuery => {
                if self.screen == Screen::Demo {
                    self.input_mode = InputMode::TextInput;
                }
            }
            Action::ToggleModel => {
                if self.screen == Screen::Demo {
                    self.form.use_custom_model = !self.form.use_custom_model;
                }
            }
            Action::Submit => {
                if self.screen == Screen::Demo {
                    self.submit_upload();
                }
            }
            Action::ToggleSection(section) => {
                if self.screen == Screen::Demo {
                    self.results.toggle(section);
                }
            }
            Action::MoveDown => match self.screen {
                Screen::Landing => {
                    self.landing_scroll = self.landing_scroll.saturating_add(1);
                }
                Screen::Demo => {
                    self.results.scroll = self.results.scroll.saturating_add(1);
                }
            },
            Action::MoveUp => match self.screen {
                Screen::Landing => {
                    self.landing_scroll = self.landing_scroll.saturating_sub(1);
                }
                Screen::Demo => {
                    self.results.scroll = self.results.scroll.saturating_sub(1);
                }
            },
            Action::PageDown => {
                let page = self.visible_rows.max(1) as u16;
                match self.screen {
                    Screen::Landing => {
                        self.landing_scroll = self.landing_scroll.saturating_add(page);
                    }
                    Screen::Demo => {
                        self.results.scroll = self.results.scroll.saturating_add(page);
                    }
                }
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1) as u16;
                match self.screen {
                    Screen::Landing => {
                        self.landing_scroll = self.landing_scroll.saturating_sub(page);
                    }
                    Screen::Demo => {
                        self.results.scroll = self.results.scroll.saturating_sub(page);
                    }
                }
            }
            Action::GoTop => match self.screen {
                Screen::Landing => {
                    self.landing_scroll = 0;
                }
                Screen::Demo => {
                    self.results.scroll = 0;
                }
            },
            Action::GoBottom => {
                // Clamped to the content height at next render
                match self.screen {
                    Screen::Landing => {
                        self.landing_scroll = u16::MAX;
                    }
                    Screen::Demo => {
                        self.results.scroll = u16::MAX;
                    }
                }
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(4);
            }
            Action::TextInput(_) | Action::TextConfirm | Action::TextCancel => {}
            Action::None => {}
        }

        false
    }
}
