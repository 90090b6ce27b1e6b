use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;
use crate::model::results::ResultSection;

/// Map a crossterm terminal event to an action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::TextInput => map_key_text_input(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::DrillIn,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('g') => Action::GoTop,
        KeyCode::Char('G') => Action::GoBottom,
        KeyCode::Char('o') | KeyCode::Char('a') => Action::OpenPicker,
        KeyCode::Char('/') | KeyCode::Char('i') => Action::EditQuery,
        KeyCode::Char('m') => Action::ToggleModel,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::Char('u') => Action::Submit,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('1') => Action::ToggleSection(ResultSection::Entities),
        KeyCode::Char('2') => Action::ToggleSection(ResultSection::Chunks),
        KeyCode::Char('3') => Action::ToggleSection(ResultSection::Summary),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Home => Action::GoTop,
        KeyCode::End => Action::GoBottom,
        _ => Action::None,
    }
}

fn map_key_text_input(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::TextCancel,
        KeyCode::Enter => Action::TextConfirm,
        KeyCode::Char(c) => Action::TextInput(c),
        KeyCode::Backspace => Action::TextInput('\x08'), // sentinel for backspace
        _ => Action::None,
    }
}
