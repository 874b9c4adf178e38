//! pipo - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`pipo_engine`] (register and application state) and
//! [`pipo_tui`] (rendering and input), providing RAII-based terminal
//! management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new(mode) -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! Everything runs on the main thread:
//!
//! 1. Render frame
//! 2. Wait up to one frame for input, then drain the queue
//! 3. Dispatch each event to the app
//! 4. Stop once the app asks to quit

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{TerminalOptions, Viewport, prelude::*};
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{self, Stdout, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pipo_engine::{App, PipoConfig};
use pipo_tui::{INLINE_VIEWPORT_HEIGHT, ScreenLayout, draw, handle_events};

const LOG_FILE: &str = "pipo.log";

/// Log to a file under the pipo config dir; the TUI owns stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some((path, file)) = log_file_candidates()
        .into_iter()
        .find_map(|path| open_log_file(&path).ok().map(|file| (path, file)))
    else {
        tracing_subscriber::registry().with(filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    tracing::info!(path = %path.display(), "Logging initialized");
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `~/.pipo/logs/pipo.log`, then `./.pipo/logs/pipo.log`.
fn log_file_candidates() -> Vec<PathBuf> {
    PipoConfig::path()
        .and_then(|config| config.parent().map(Path::to_path_buf))
        .into_iter()
        .chain([PathBuf::from(".pipo")])
        .map(|dir| dir.join("logs").join(LOG_FILE))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiMode {
    Full,
    Inline,
}

impl UiMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "inline" => Some(UiMode::Inline),
            "full" | "fullscreen" => Some(UiMode::Full),
            _ => None,
        }
    }

    fn from_config(config: Option<&PipoConfig>) -> Option<Self> {
        let raw = config.and_then(PipoConfig::tui)?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown tui mode in config: {}", raw);
        }
        mode
    }

    fn from_env() -> Option<Self> {
        env::var("PIPO_TUI").ok().as_deref().and_then(Self::parse)
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode, mouse capture, and (full mode only) the alternate
/// screen. On drop, all terminal state is restored, so the terminal stays
/// usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    use_alternate_screen: bool,
}

impl TerminalSession {
    fn new(mode: UiMode) -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let use_alternate_screen = matches!(mode, UiMode::Full);
        if use_alternate_screen && let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match mode {
            UiMode::Full => Terminal::new(backend),
            UiMode::Inline => Terminal::with_options(
                backend,
                TerminalOptions {
                    viewport: Viewport::Inline(INLINE_VIEWPORT_HEIGHT),
                },
            ),
        };
        let terminal = match terminal {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                if use_alternate_screen {
                    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
                } else {
                    let _ = execute!(out, DisableMouseCapture);
                }
                return Err(err.into());
            }
        };

        Ok(Self {
            terminal,
            use_alternate_screen,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.use_alternate_screen {
            let _ = execute!(
                self.terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            );
        } else {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match PipoConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), %err, "Using default config");
            None
        }
    };
    let ui_mode = UiMode::from_config(config.as_ref())
        .or_else(UiMode::from_env)
        .unwrap_or(UiMode::Full);
    tracing::info!(?ui_mode, "Starting");

    let mut app = App::from_config(config.as_ref());

    let result = {
        let mut session = TerminalSession::new(ui_mode)?;
        run_app(&mut session.terminal, &mut app)
    };

    tracing::info!(
        loads = app.register().load_count(),
        word = %app.register().rendered_word(),
        "Exiting"
    );
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(50);

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut layout = ScreenLayout::default();
    loop {
        terminal.draw(|frame| layout = draw(frame, app))?;

        if handle_events(app, &layout, FRAME_DURATION)? {
            return Ok(());
        }
    }
}
