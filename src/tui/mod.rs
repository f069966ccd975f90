//! Terminal UI for Guess the Number.

mod app;
mod input;
mod ui;

pub use app::App;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

/// Runs the TUI until the player quits, restoring the terminal on exit.
pub fn run(mut app: App) -> Result<()> {
    info!("Starting Guess the Number TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if !handle_key(app, key) {
                return Ok(());
            }
        }
    }
}

/// Applies one key press. Returns false when the player quits.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            info!("Player quit");
            return false;
        }
        KeyCode::Char('n') => app.new_game(),
        KeyCode::Left => app.prev_difficulty(),
        KeyCode::Right => app.next_difficulty(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_digit(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => app.submit_guess(),
        other => debug!(key = ?other, "Ignoring key"),
    }
    true
}
