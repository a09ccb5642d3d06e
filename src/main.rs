//! A scroll-driven landing page for the terminal.
//!
//! Wheel and keys set a scroll target; physics glides the viewport there
//! while scroll-linked effects morph the navbar and reveal copy on the way
//! down.

mod app;
mod config;
mod core;
mod page;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::MissedTickBehavior;

use crate::app::{
    controller::PageController,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::page::document::Document;
use crate::ui::layout::page_viewport;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll-driven terminal landing page")]
struct Cli {
    /// Scroll chase rate — higher settles faster (0.5–20).
    #[arg(long)]
    speed: Option<f32>,

    /// Target frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Skip the highlight and tagline reveals.
    #[arg(long = "no-text-effects")]
    no_text_effects: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).  Logs go to stderr so
    // the UI on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut user_config = config::AppConfig::load();
    if let Some(speed) = cli.speed {
        user_config.scroll_speed = speed.clamp(0.5, 20.0);
    }
    if cli.no_text_effects {
        user_config.text_effects = false;
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── build the page ────────────────────────────────────────
    let size = terminal.size()?;
    let mut document = Document::build(page_viewport(size.width, size.height));
    let controller = PageController::new(&mut document, &user_config, 0.0)?;
    let mut state = AppState::new(document, controller, user_config);
    if !state.config.text_effects {
        state.status_message = Some("text effects off · press q to quit".into());
    }
    // Prime the triggers so the first paint already reflects offset zero.
    state.frame(0.0);

    // ── event loop ────────────────────────────────────────────
    let clock = Instant::now();
    let mut events = spawn_event_reader();
    let mut frames =
        tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(cli.fps.clamp(1, 240))));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Draw first so input never waits on a frame tick.
        terminal.draw(|frame| ui::render::draw(frame, &state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                let now = clock.elapsed().as_secs_f64();
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(cols, rows) => {
                        handler::handle_resize(&mut state, cols, rows, now);
                    }
                }
            }

            _ = frames.tick() => {
                state.frame(clock.elapsed().as_secs_f64());
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
