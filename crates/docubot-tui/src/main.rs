use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;

use docubot_core::{
    AnalysisBackend, FilePreferences, HttpBackend, MemoryPreferences, PreferenceStorage,
    ThemeStore,
};

mod action;
mod app;
mod backend;
mod tui_event;
mod input;
mod model;
mod route;
mod theme;
mod view;

use app::{App, Screen};

/// Default analysis service address (the development server).
const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Docubot — terminal client for PDF document analysis.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// PDF file to preselect in the upload form (opens the demo screen)
    pdf_path: Option<PathBuf>,

    /// Base URL of the analysis service
    #[arg(long)]
    server: Option<String>,

    /// Starting route: "/" (landing) or "/demo"
    #[arg(long, default_value = "/")]
    route: String,
}

/// Route core's tracing output to a log file so the alternate screen stays
/// clean. Returns the appender guard, which must outlive the app.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::cache_dir()?.join("docubot");
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(dir, "docubot.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = init_tracing();

    // Validate any PDF path provided on the command line
    if let Some(ref path) = args.pdf_path
        && !path.exists()
    {
        anyhow::bail!("PDF file not found: {}", path.display());
    }

    // Resolve the server base URL from CLI flags > env vars > defaults
    let server = args
        .server
        .or_else(|| std::env::var("DOCUBOT_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());

    let initial_screen = route::resolve(&args.route).ok_or_else(|| {
        anyhow::anyhow!("unknown route: {} (expected \"/\" or \"/demo\")", args.route)
    })?;

    // Theme preference is read once here and persisted on every toggle
    let storage: Box<dyn PreferenceStorage> = match FilePreferences::standard() {
        Some(file) => Box::new(file),
        None => Box::new(MemoryPreferences::default()),
    };
    let theme_store = ThemeStore::new(storage);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme_store, server.clone());
    app.screen = initial_screen;

    // A CLI-selected PDF goes through the same validation as the picker
    if let Some(path) = args.pdf_path {
        app.form.select_file(path);
        app.screen = Screen::Demo;
    }

    // Set up the backend bridge
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<tui_event::BackendCommand>();
    app.backend_cmd_tx = Some(cmd_tx);

    let service: Arc<dyn AnalysisBackend> = Arc::new(HttpBackend::new(server));
    tokio::spawn(backend::run_listener(service, cmd_rx, event_tx));

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw
        terminal.draw(|f| app.view(f))?;

        // Poll for events with timeout for tick
        let timeout = tick_rate;

        tokio::select! {
            // Backend events (non-blocking drain)
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(timeout).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    let action = input::map_event(&evt, &app.input_mode);
                    app.update(action);
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
