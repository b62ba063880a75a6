//! PrivyTalk - a terminal messaging shell.
//!
//! Signing in against the configured allow-list unlocks the mock chat,
//! call, media, assistant and settings screens.

mod app;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use privytalk_core::auth::hash_secret;
use privytalk_core::{Config, CredentialRecord, FileStore, SharedStore};

use app::{App, AppState};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file written inside the data directory
const LOG_FILE_NAME: &str = "privytalk.log";

/// Initialize the tracing subscriber for logging.
///
/// Output goes to a file because stderr belongs to the terminal UI. The
/// returned guard flushes buffered lines when dropped.
fn init_tracing(data_dir: &Path) -> WorkerGuard {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Check for CLI commands
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--hash-secret" {
        return print_secret_hash(&args[2..]);
    }

    let config_path = Config::config_path()?;
    let config = Config::load_from(&config_path)?;
    let data_dir = config.data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    // Initialize logging
    let _guard = init_tracing(&data_dir);
    info!("PrivyTalk starting");

    let store: SharedStore = std::sync::Arc::new(FileStore::new(data_dir)?);
    let mut app = App::new(config, Some(config_path), store)?;

    // Show the login gate unless a session was restored
    if !app.is_authenticated() {
        app.start_login();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        warn!(error = %e, "Main loop exited with error");
        eprintln!("Error: {}", e);
    }

    info!("PrivyTalk shutting down");
    Ok(())
}

/// Prompt for a secret and print its hash for `config.json`.
///
/// With `<identifier> [display label]` arguments a whole credential record
/// is printed instead, ready to paste into the `credentials` array.
fn print_secret_hash(args: &[String]) -> Result<()> {
    let secret = rpassword::prompt_password("Secret: ")?;
    if secret.is_empty() {
        anyhow::bail!("Secret must not be empty");
    }
    let confirm = rpassword::prompt_password("Confirm secret: ")?;
    if secret != confirm {
        anyhow::bail!("Secrets do not match");
    }

    match args {
        [] => println!("{}", hash_secret(&secret)?),
        [identifier, label @ ..] => {
            let label = if label.is_empty() {
                identifier.clone()
            } else {
                label.join(" ")
            };
            let record = CredentialRecord::new(identifier.as_str(), &secret, label)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        // Poll for events with timeout so simulated replies show up on time
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    return Ok(());
                }

                if handle_input(app, key) {
                    return Ok(());
                }
            }
        }

        // Deliver chat events from reply tasks
        app.check_background_tasks();

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
