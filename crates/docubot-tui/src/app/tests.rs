use tokio::sync::mpsc;

use docubot_core::prefs::MemoryPreferences;
use docubot_core::{AnalysisResult, ThemeMode, UploadError};

use super::*;
use crate::action::Action;
use crate::model::form::{NO_FILE_SELECTED, UNSUPPORTED_FORMAT};
use crate::model::results::ResultSection;
use crate::tui_event::{BackendCommand, BackendEvent};

/// Create an App for testing, wired to an inspectable command channel and
/// backed by in-memory preferences.
fn test_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let store = ThemeStore::new(Box::new(MemoryPreferences::default()));
    let mut app = App::new(store, "http://localhost:5000".to_string());
    let (tx, rx) = mpsc::unbounded_channel();
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

/// The analysis a healthy service returns for the sample paper.
fn sample_analysis() -> AnalysisResult {
    serde_json::from_str(
        r#"{
            "entities": {"person": ["Alice"]},
            "relevant_chunks": ["Intro text."],
            "summary": ["Key finding."]
        }"#,
    )
    .expect("valid analysis json")
}

fn pdf_entry(name: &str) -> FileEntry {
    FileEntry {
        name: name.to_string(),
        path: PathBuf::from(name),
        is_dir: false,
        is_pdf: true,
    }
}

// ── Screens and navigation ──────────────────────────────────────

#[test]
fn app_starts_on_the_landing_screen() {
    let (app, _rx) = test_app();
    assert_eq!(app.screen, Screen::Landing);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn enter_on_landing_opens_the_demo() {
    let (mut app, _rx) = test_app();
    app.update(Action::DrillIn);
    assert_eq!(app.screen, Screen::Demo);
}

#[test]
fn esc_on_demo_returns_to_landing() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.update(Action::NavigateBack);
    assert_eq!(app.screen, Screen::Landing);
}

#[test]
fn esc_on_landing_is_a_noop() {
    let (mut app, _rx) = test_app();
    app.update(Action::NavigateBack);
    assert_eq!(app.screen, Screen::Landing);
    assert!(!app.should_quit);
}

// ── File selection ──────────────────────────────────────────────

#[test]
fn selecting_a_non_pdf_reports_unsupported_format() {
    let (mut app, mut rx) = test_app();

    app.form.select_file(PathBuf::from("notes.txt"));

    assert_eq!(app.form.error.as_deref(), Some(UNSUPPORTED_FORMAT));
    assert!(app.form.file.is_none());
    assert!(rx.try_recv().is_err(), "no upload may be triggered");
}

#[test]
fn non_pdf_selection_keeps_the_previous_file() {
    let (mut app, _rx) = test_app();
    app.form.select_file(PathBuf::from("paper.pdf"));

    app.form.select_file(PathBuf::from("notes.txt"));

    assert_eq!(app.form.error.as_deref(), Some(UNSUPPORTED_FORMAT));
    assert_eq!(app.form.file_label().as_deref(), Some("paper.pdf"));
}

#[test]
fn valid_selection_clears_a_previous_error() {
    let (mut app, _rx) = test_app();
    app.form.select_file(PathBuf::from("notes.txt"));
    assert!(app.form.error.is_some());

    app.form.select_file(PathBuf::from("paper.pdf"));

    assert_eq!(app.form.error, None);
    assert_eq!(app.form.file_label().as_deref(), Some("paper.pdf"));
}

// ── Submission ──────────────────────────────────────────────────

#[test]
fn submit_without_a_file_prompts_for_selection() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Demo;

    app.update(Action::Submit);

    assert_eq!(app.form.error.as_deref(), Some(NO_FILE_SELECTED));
    assert!(!app.form.uploading);
    assert!(rx.try_recv().is_err());
}

#[test]
fn submit_sends_exactly_one_upload_command() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Demo;
    app.form.select_file(PathBuf::from("paper.pdf"));

    app.update(Action::Submit);

    assert!(app.form.uploading);
    assert_eq!(app.form.error, None);
    let BackendCommand::Upload { request } = rx.try_recv().expect("one upload command");
    assert_eq!(request.filename(), "paper.pdf");
    assert_eq!(request.query, None);
    assert!(!request.use_custom_model);
    assert!(rx.try_recv().is_err());
}

#[test]
fn submit_carries_the_trimmed_query_and_model_flag() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Demo;
    app.form.select_file(PathBuf::from("paper.pdf"));
    app.form.query = "  Who is the author?  ".to_string();
    app.update(Action::ToggleModel);

    app.update(Action::Submit);

    let BackendCommand::Upload { request } = rx.try_recv().expect("one upload command");
    assert_eq!(request.query.as_deref(), Some("Who is the author?"));
    assert!(request.use_custom_model);
}

#[test]
fn enter_on_the_demo_screen_submits() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;

    app.update(Action::DrillIn);

    // No file yet, so Enter runs into the selection prompt
    assert_eq!(app.form.error.as_deref(), Some(NO_FILE_SELECTED));
}

#[test]
fn second_submit_while_uploading_is_ignored() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Demo;
    app.form.select_file(PathBuf::from("paper.pdf"));

    app.update(Action::Submit);
    rx.try_recv().expect("first upload command");
    app.update(Action::Submit);

    assert!(rx.try_recv().is_err(), "in-flight upload blocks resubmits");
}

#[test]
fn model_flag_survives_an_upload_cycle() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.update(Action::ToggleModel);
    app.form.select_file(PathBuf::from("paper.pdf"));

    app.update(Action::Submit);
    app.handle_backend_event(BackendEvent::UploadFinished {
        outcome: Ok(sample_analysis()),
    });

    assert!(app.form.use_custom_model);
}

// ── Query editing ───────────────────────────────────────────────

#[test]
fn query_editor_appends_and_backspaces() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;

    app.update(Action::EditQuery);
    assert_eq!(app.input_mode, InputMode::TextInput);

    app.update(Action::TextInput('h'));
    app.update(Action::TextInput('i'));
    app.update(Action::TextInput('\x08'));
    assert_eq!(app.form.query, "h");

    app.update(Action::TextCancel);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.form.query, "h", "leaving the editor keeps the text");
}

#[test]
fn enter_in_the_query_editor_submits() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Demo;
    app.form.select_file(PathBuf::from("paper.pdf"));
    app.update(Action::EditQuery);
    app.update(Action::TextInput('x'));

    app.update(Action::TextConfirm);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.form.uploading);
    let BackendCommand::Upload { request } = rx.try_recv().expect("one upload command");
    assert_eq!(request.query.as_deref(), Some("x"));
}

#[test]
fn picker_does_not_open_while_editing_the_query() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.update(Action::EditQuery);

    // 'o' arrives as plain text while typing
    app.update(Action::TextInput('o'));

    assert!(!app.picker_open);
    assert_eq!(app.form.query, "o");
}

// ── Backend outcomes ────────────────────────────────────────────

#[test]
fn successful_upload_replaces_the_analysis() {
    let (mut app, _rx) = test_app();
    app.form.uploading = true;

    app.handle_backend_event(BackendEvent::UploadFinished {
        outcome: Ok(sample_analysis()),
    });

    assert!(!app.form.uploading);
    assert_eq!(app.form.error, None);
    assert_eq!(app.results.analysis, Some(sample_analysis()));
}

#[test]
fn server_error_string_is_shown_verbatim() {
    let (mut app, _rx) = test_app();
    app.results.set_analysis(sample_analysis());
    app.form.uploading = true;

    app.handle_backend_event(BackendEvent::UploadFinished {
        outcome: Err(UploadError::Rejected("model unavailable".to_string())),
    });

    assert_eq!(app.form.error.as_deref(), Some("model unavailable"));
    assert!(!app.form.uploading);
    // The previous result stays on screen
    assert_eq!(app.results.analysis, Some(sample_analysis()));
}

#[test]
fn failure_without_a_server_message_is_generic() {
    let (mut app, _rx) = test_app();
    app.form.uploading = true;

    app.handle_backend_event(BackendEvent::UploadFinished {
        outcome: Err(UploadError::Failed(500)),
    });

    assert_eq!(app.form.error.as_deref(), Some("Upload failed"));
    assert_eq!(app.results.analysis, None);
}

#[test]
fn transport_failure_reads_as_transient() {
    let (mut app, _rx) = test_app();
    app.form.uploading = true;

    app.handle_backend_event(BackendEvent::UploadFinished {
        outcome: Err(UploadError::Network("connection refused".to_string())),
    });

    assert_eq!(
        app.form.error.as_deref(),
        Some("File upload failed, please try again later.")
    );
}

#[test]
fn new_analysis_resets_scroll_but_keeps_section_flags() {
    let (mut app, _rx) = test_app();
    app.results.show_chunks = false;
    app.results.scroll = 7;
    app.form.uploading = true;

    app.handle_backend_event(BackendEvent::UploadFinished {
        outcome: Ok(sample_analysis()),
    });

    assert_eq!(app.results.scroll, 0);
    assert!(!app.results.show_chunks, "collapse state is sticky");
}

// ── Result sections ─────────────────────────────────────────────

#[test]
fn section_toggles_flip_independently() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.results.set_analysis(sample_analysis());

    app.update(Action::ToggleSection(ResultSection::Entities));

    assert!(!app.results.show_entities);
    assert!(app.results.show_chunks);
    assert!(app.results.show_summary);

    app.update(Action::ToggleSection(ResultSection::Entities));
    assert!(app.results.show_entities);
}

#[test]
fn eligibility_follows_the_data_not_the_flags() {
    let (mut app, _rx) = test_app();
    let analysis: AnalysisResult =
        serde_json::from_str(r#"{"summary": ["Only sentence."]}"#).expect("valid analysis json");
    app.results.set_analysis(analysis);

    for flag in [true, false] {
        app.results.show_entities = flag;
        app.results.show_chunks = flag;
        app.results.show_summary = flag;
        assert!(!app.results.eligible(ResultSection::Entities));
        assert!(!app.results.eligible(ResultSection::Chunks));
        assert!(app.results.eligible(ResultSection::Summary));
    }
}

#[test]
fn sample_upload_lights_up_all_three_sections() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Demo;
    app.form.select_file(PathBuf::from("paper.pdf"));
    app.update(Action::Submit);
    rx.try_recv().expect("one upload command");

    app.handle_backend_event(BackendEvent::UploadFinished {
        outcome: Ok(sample_analysis()),
    });

    for section in ResultSection::all() {
        assert!(app.results.eligible(section));
        assert!(app.results.expanded(section), "sections start expanded");
    }
    assert_eq!(
        app.results.entity_rows(),
        vec![("Person".to_string(), vec!["Alice".to_string()])]
    );
}

// ── Theme ───────────────────────────────────────────────────────

#[test]
fn theme_toggle_persists_the_marker_every_time() {
    let storage = MemoryPreferences::default();
    let store = ThemeStore::new(Box::new(storage.clone()));
    let mut app = App::new(store, "http://localhost:5000".to_string());
    assert_eq!(app.theme_store.mode(), ThemeMode::Light);

    app.update(Action::ToggleTheme);
    assert_eq!(app.theme_store.mode(), ThemeMode::Dark);
    assert_eq!(storage.snapshot().theme.as_deref(), Some("dark"));

    app.update(Action::ToggleTheme);
    assert_eq!(app.theme_store.mode(), ThemeMode::Light);
    assert_eq!(storage.snapshot().theme.as_deref(), Some("light"));
}

#[test]
fn theme_toggle_works_during_an_upload() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.form.uploading = true;

    app.update(Action::ToggleTheme);

    assert_eq!(app.theme_store.mode(), ThemeMode::Dark);
    assert!(app.form.uploading);
}

// ── File picker ─────────────────────────────────────────────────

#[test]
fn o_opens_the_picker_on_the_demo_screen() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;

    app.update(Action::OpenPicker);

    assert!(app.picker_open);
}

#[test]
fn picker_does_not_open_on_landing() {
    let (mut app, _rx) = test_app();

    app.update(Action::OpenPicker);

    assert!(!app.picker_open);
}

#[test]
fn enter_on_a_pdf_entry_selects_it_and_closes_the_picker() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.picker_open = true;
    app.file_picker.entries = vec![pdf_entry("paper.pdf")];
    app.file_picker.cursor = 0;

    app.update(Action::DrillIn);

    assert!(!app.picker_open);
    assert_eq!(app.form.file_label().as_deref(), Some("paper.pdf"));
    assert_eq!(app.form.error, None);
}

#[test]
fn enter_on_a_non_pdf_entry_reports_unsupported_format() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.picker_open = true;
    app.file_picker.entries = vec![FileEntry {
        name: "notes.txt".to_string(),
        path: PathBuf::from("notes.txt"),
        is_dir: false,
        is_pdf: false,
    }];
    app.file_picker.cursor = 0;

    app.update(Action::DrillIn);

    assert!(!app.picker_open);
    assert_eq!(app.form.error.as_deref(), Some(UNSUPPORTED_FORMAT));
    assert!(app.form.file.is_none());
}

#[test]
fn enter_on_a_directory_descends_into_it() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.picker_open = true;
    let tmp = tempfile::tempdir().expect("create temp dir");
    let dir = tmp.path().join("docs");
    std::fs::create_dir(&dir).expect("create subdir");
    app.file_picker.entries = vec![FileEntry {
        name: "docs".to_string(),
        path: dir.clone(),
        is_dir: true,
        is_pdf: false,
    }];
    app.file_picker.cursor = 0;

    app.update(Action::DrillIn);

    assert!(app.picker_open, "descending keeps the picker open");
    assert_eq!(app.file_picker.current_dir, dir);
    assert!(app.form.file.is_none());
}

#[test]
fn picker_lists_dirs_first_then_files_sorted() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    std::fs::create_dir(tmp.path().join("docs")).expect("create subdir");
    std::fs::write(tmp.path().join("b.pdf"), b"%PDF-").expect("write file");
    std::fs::write(tmp.path().join("a.txt"), b"notes").expect("write file");
    std::fs::write(tmp.path().join(".hidden"), b"").expect("write file");

    let mut picker = FilePickerState::new();
    picker.current_dir = tmp.path().to_path_buf();
    picker.refresh_entries();

    let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["..", "docs", "a.txt", "b.pdf"]);
    assert!(picker.entries[1].is_dir);
    assert!(!picker.entries[2].is_pdf);
    assert!(picker.entries[3].is_pdf);
    assert_eq!(picker.cursor, 0);
}

#[test]
fn esc_closes_the_picker_without_selecting() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.picker_open = true;
    app.file_picker.entries = vec![pdf_entry("paper.pdf")];

    app.update(Action::NavigateBack);

    assert!(!app.picker_open);
    assert!(app.form.file.is_none());
}

#[test]
fn picker_cursor_stops_at_the_ends() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Demo;
    app.picker_open = true;
    app.file_picker.entries = vec![pdf_entry("a.pdf"), pdf_entry("b.pdf")];
    app.file_picker.cursor = 0;

    app.update(Action::MoveUp);
    assert_eq!(app.file_picker.cursor, 0);

    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.file_picker.cursor, 1);
}

// ── Overlays ────────────────────────────────────────────────────

#[test]
fn q_asks_for_confirmation_then_quits() {
    let (mut app, _rx) = test_app();

    app.update(Action::Quit);
    assert!(app.confirm_quit);
    assert!(!app.should_quit);

    app.update(Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn esc_cancels_the_quit_confirmation() {
    let (mut app, _rx) = test_app();
    app.update(Action::Quit);

    app.update(Action::NavigateBack);

    assert!(!app.confirm_quit);
    assert!(!app.should_quit);
}

#[test]
fn help_overlay_opens_and_closes() {
    let (mut app, _rx) = test_app();

    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    app.update(Action::ToggleHelp);
    assert!(!app.show_help);

    app.update(Action::ToggleHelp);
    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}

#[test]
fn help_intercepts_screen_actions() {
    let (mut app, _rx) = test_app();
    app.update(Action::ToggleHelp);

    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::Landing, "help swallows navigation");
}
