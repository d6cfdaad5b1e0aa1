//! Terminal entry point for cardbox.
//!
//! # Responsibility
//! - Resolve the log directory and bootstrap core logging.
//! - Own terminal setup/teardown around the event loop.
//!
//! # Invariants
//! - The terminal is restored (raw mode off, main screen) before exit,
//!   whether the event loop succeeded or failed.

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::path::PathBuf;

mod app;
mod ui;

use app::App;

fn main() -> io::Result<()> {
    // A failed logging bootstrap degrades to running without logs; the
    // notes UI itself has no reason to refuse to start.
    if let Err(err) = cardbox_core::init_logging(&log_dir()) {
        eprintln!("cardbox: logging disabled: {err}");
    }

    let mut terminal = setup_terminal()?;
    let result = App::new().run(&mut terminal);
    teardown_terminal(&mut terminal)?;
    result
}

fn log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("cardbox")
        .join("logs")
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
