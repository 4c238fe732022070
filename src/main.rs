//! A scroll-driven landing page, rendered in the terminal.
//!
//! Scroll with the wheel, `j`/`k` or the arrow keys to move through the hero
//! sections; the page derives its active section, path-draw progress and
//! sticky flags from the scroll offset alone.
//! Run with `--print-config` to dump the effective configuration as TOML.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Frame, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{AppState, Viewport},
    timer_runtime::TimerRuntime,
};
use crate::config::AppConfig;
use crate::core::governor::GovernorState;
use crate::ui::{
    content::ContentView,
    damping_indicator::DampingIndicator,
    hero::{CollapsedHero, HeroPanel},
    layout::{split_collapsed, ScreenLayout},
    nav::NavBar,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll-driven landing page in the terminal")]
struct Cli {
    /// Config file (defaults to `$XDG_CONFIG_HOME/scroll-stage/config.toml`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of narrative sections (overrides the config file).
    #[arg(long)]
    sections: Option<usize>,

    /// Virtual scroll height as a multiple of the viewport.
    #[arg(long)]
    multiplier: Option<f64>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long = "print-config")]
    print_config: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── render ───────────

fn draw(frame: &mut Frame, state: &AppState) {
    let layout = ScreenLayout::from_area(frame.area());
    let derived = state.derived();

    frame.render_widget(
        NavBar {
            compact: derived.nav_compact,
        },
        layout.nav_area,
    );

    if derived.hero_collapsed {
        let (band, content) = split_collapsed(layout.page_area);
        frame.render_widget(CollapsedHero { derived: &derived }, band);
        frame.render_widget(
            ContentView {
                page: &state.page,
                // Content rows start below the band.
                offset_px: state.offset_px
                    + f64::from(band.height) * state.config.display.row_px,
                row_px: state.config.display.row_px,
                label_static: derived.label_static,
            },
            content,
        );
    } else {
        let center_cols = (state.capacity.center_px() / state.config.display.col_px).round() as u16;
        frame.render_widget(
            HeroPanel {
                derived: &derived,
                sections: &state.stage.config().sections,
                thumbnails_per_side: state.thumbnails_per_side,
                center_cols,
            },
            layout.page_area,
        );
    }

    let left_ms = match state.stage.governor_state() {
        GovernorState {
            active: true,
            window_expires_at_ms: Some(expires),
        } => Some(expires.saturating_sub(state.now_ms())),
        _ => None,
    };
    let window_ms = state.stage.config().damping.window_ms as f64;
    frame.render_widget(
        DampingIndicator {
            remaining: left_ms.map(|left| left as f64 / window_ms),
            tick: state.tick,
        },
        layout.page_area,
    );

    let easing = left_ms.map(|left| format!("easing in… {left}ms"));
    let hint = format!(
        "j/k scroll · PgUp/PgDn page · g/G top/bottom · q quit │ section {}/{} · {:>3.0}%",
        derived.section_index + 1,
        state.stage.config().sections.count(),
        derived.progress * 100.0,
    );
    let status_text = easing
        .as_deref()
        .or(state.status_message.as_deref())
        .unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    // ── configuration ─────────────────────────────────────────
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(n) = cli.sections {
        config.section_count = n;
        config.section_starts = None;
    }
    if let Some(m) = cli.multiplier {
        config.virtual_height_multiplier = m;
    }
    let stage_config = config.stage_config().context("invalid stage configuration")?;
    config.validate_host().context("invalid display configuration")?;
    let capacity = config.capacity()?;

    if cli.print_config {
        print!("{}", config.serialise()?);
        return Ok(());
    }

    // ── terminal setup ────────────────────────────────────────
    let (cols, rows) = crossterm::terminal::size()?;
    let tick_rate = Duration::from_millis(config.display.tick_ms.max(10));
    let mut state = AppState::new(config, stage_config, capacity, Viewport { cols, rows });

    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let (event_tx, mut events) = spawn_event_reader(tick_rate);
    let mut timers = TimerRuntime::new();

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| draw(frame, &state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize(w, h) => handler::handle_resize(&mut state, w, h),
            AppEvent::FocusGained => handler::handle_focus_gained(&mut state),
            AppEvent::DampingExpired(generation) => {
                handler::handle_damping_expired(&mut state, generation)
            }
            AppEvent::Tick => state.tick = state.tick.wrapping_add(1),
        }

        // Schedule wake-ups for any damping window opened by this event.
        let now = state.now_ms();
        for engaged in std::mem::take(&mut state.pending_timers) {
            timers.schedule(event_tx.clone(), engaged, now);
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    state.stage.unmount();
    timers.shutdown();
    drop(events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    Ok(())
}
