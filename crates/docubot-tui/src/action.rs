use crate::model::results::ResultSection;

/// A user intent produced by input mapping and consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the app (asks for confirmation first).
    Quit,
    /// Esc: close the topmost overlay, or step back to the landing screen.
    NavigateBack,
    /// Enter: activate whatever has focus (open demo, pick entry, submit).
    DrillIn,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    /// Open the PDF picker on the demo screen.
    OpenPicker,
    /// Start editing the query field.
    EditQuery,
    /// Flip the custom-NER-model checkbox.
    ToggleModel,
    /// Submit the upload form.
    Submit,
    /// Switch between the light and dark themes.
    ToggleTheme,
    /// Expand or collapse one result section.
    ToggleSection(ResultSection),
    ToggleHelp,
    /// Character typed while editing the query (`'\x08'` encodes backspace).
    TextInput(char),
    TextConfirm,
    TextCancel,
    Tick,
    Resize(u16, u16),
    None,
}
