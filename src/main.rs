// ============================================================================
// COMMIT - Terminal habit tracker
// ============================================================================
//
// Startup: config -> logging -> terminal setup -> event loop -> terminal restore.
// All state lives in `App`; every key or click becomes an `Action`.
// ============================================================================

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use commit::clock::{Clock, LocalClock};
use commit::config::{self, Config};
use commit::input::{handle_key, handle_mouse};
use commit::{App, logging, terminal, ui};

fn main() {
    if let Err(err) = run() {
        error!("exiting with error: {err:?}");
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load().context("loading configuration")?;
    logging::enable_logging(&config::data_dir()?, &config.log_level)?;
    info!(week_start = %config.week_start, tick_rate = ?config.tick_rate, "starting");

    enable_raw_mode()?;
    let res = run_terminal(&config);

    disable_raw_mode().ok();
    terminal::leave_screen(&mut io::stdout()).ok();

    info!("terminal restored");
    res
}

/// Everything between raw mode on and off; any error here still reaches the
/// restore in `run`.
fn run_terminal(config: &Config) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enter_screen(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, config, &LocalClock)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    clock: &dyn Clock,
) -> Result<()> {
    let mut app = App::new();
    app.week_start = config.week_start;
    let tick_rate = config.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        let today = clock.today();
        terminal.draw(|frame| ui::draw(frame, &mut app, today))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(&mut app, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    info!(
        completed = app.habits.completed_count(),
        total = app.habits.len(),
        "session finished"
    );
    Ok(())
}
