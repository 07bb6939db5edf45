//! A terminal pager that wraps page content in a header and footer and
//! bounces with a toast when you scroll into the top or bottom edge.
//!
//! Run with a file path, or pipe text on stdin.

mod app;
mod config;
mod content;
mod core;
mod error;
mod ui;

use std::fs::File;
use std::io::{self, stderr, Stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::ui::{layout::PageLayout, page::PageView};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Pager with scroll-edge notifications")]
struct Cli {
    /// File to show (`-` or omitted reads stdin).
    path: Option<PathBuf>,

    /// Header and footer title (overrides the config file).
    #[arg(long)]
    title: Option<String>,

    /// Start with edge notifications turned off.
    #[arg(long = "no-edge-notify")]
    no_edge_notify: bool,

    /// Rows short of the bottom that count as the bottom edge.
    #[arg(long)]
    tolerance: Option<u32>,

    /// Write logs here instead of stderr (stderr is the drawing surface).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

type Term = Terminal<CrosstermBackend<Stderr>>;

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let lines = content::load(cli.path.as_deref())?;

    let mut config = AppConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config ignored, using defaults");
        AppConfig::default()
    });
    if let Some(title) = cli.title {
        config.title = title;
    }
    if let Some(tolerance) = cli.tolerance {
        config.bottom_tolerance = tolerance;
    }

    let mut state = AppState::new(lines, config, !cli.no_edge_notify, Instant::now());
    let year = chrono::Local::now().year();

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let events = spawn_event_reader(Duration::from_millis(100));
    let result = run(&mut terminal, &mut state, events, year).await;

    // ── teardown ──────────────────────────────────────────────
    // Runs even when the loop failed, so the terminal is always restored.
    state.shutdown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Logs go to stderr unless a file is given; filtered by `RUST_LOG`.
fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

// ───────────────────────────────────────── event loop ───────

async fn run(
    terminal: &mut Term,
    state: &mut AppState,
    mut events: mpsc::UnboundedReceiver<AppEvent>,
    year: i32,
) -> Result<()> {
    loop {
        let now = Instant::now();
        state.tick(now);

        let size = terminal.size()?;
        let layout = PageLayout::from_area(Rect::new(0, 0, size.width, size.height));
        state.resize_viewport(layout.content_area.height, now);

        terminal.draw(|frame| {
            frame.render_widget(
                PageView {
                    state: &*state,
                    now,
                    year,
                },
                frame.area(),
            );
        })?;

        if state.should_quit {
            return Ok(());
        }

        let deadline = state.next_deadline(now);
        tokio::select! {
            biased;

            event = events.recv() => {
                let Some(event) = event else {
                    tracing::warn!("event reader stopped");
                    return Ok(());
                };
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k, Instant::now()),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m, Instant::now()),
                    AppEvent::Resize(_, _) | AppEvent::Tick => {}
                }
            }

            _ = sleep_until(deadline) => {}
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at.into()).await,
        None => std::future::pending().await,
    }
}
