//! Stateless UI rendering for the guessing game.

use guess_the_number::{Difficulty, GuessOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::{App, Feedback};

/// Renders the whole screen: rules sidebar on the left, game on the right.
pub fn draw(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(44)])
        .split(frame.area());

    draw_sidebar(frame, columns[0], app);
    draw_game(frame, columns[1], app);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);

    draw_rules(frame, chunks[0]);
    draw_difficulty_selector(frame, chunks[1], app);
}

fn draw_rules(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from("Try to guess the secret number!"),
        Line::from("You'll get hints after each guess."),
        Line::from(""),
    ];
    for difficulty in Difficulty::iter() {
        let settings = difficulty.settings();
        lines.push(Line::from(format!(
            "{}: {}-{}, {} attempts",
            difficulty.label(),
            settings.min_value(),
            settings.max_value(),
            settings.max_attempts()
        )));
    }

    let rules =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Game Rules"));
    frame.render_widget(rules, area);
}

fn draw_difficulty_selector(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Difficulty::iter()
        .map(|difficulty| ListItem::new(difficulty.label()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Difficulty"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Difficulty::iter().position(|d| d == app.difficulty()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Difficulty and range
            Constraint::Length(3), // Guess field
            Constraint::Length(2), // Feedback
            Constraint::Length(2), // Attempts and warning
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Guess the Number Game")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let settings = app.session().settings();
    let header = Paragraph::new(vec![
        Line::from(format!("Difficulty: {}", app.difficulty().label())),
        Line::from(format!(
            "Guess between {} and {}",
            settings.min_value(),
            settings.max_value()
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[1]);

    draw_guess_field(frame, chunks[2], app);
    draw_feedback(frame, chunks[3], app);
    draw_attempts(frame, chunks[4], app);

    let help = Paragraph::new("0-9: type | Enter: check | ← →: difficulty | n: new game | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[6]);
}

fn draw_guess_field(frame: &mut Frame, area: Rect, app: &App) {
    let field = Paragraph::new(format!("{}_", app.input().text()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Your guess"));
    frame.render_widget(field, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let Some(feedback) = app.feedback() else {
        return;
    };

    let (text, style) = match feedback {
        Feedback::Report(report) => {
            let color = match report.outcome() {
                GuessOutcome::Correct => Color::Green,
                _ => Color::Red,
            };
            (
                report.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        Feedback::Refused(error) => (error.to_string(), Style::default().fg(Color::Yellow)),
        Feedback::Hint(hint) => (hint.clone(), Style::default().fg(Color::Yellow)),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_attempts(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    if let Some(attempts) = app.attempts_line() {
        lines.push(Line::from(attempts));
    }
    if let Some(warning) = app.attempts_warning() {
        lines.push(Line::styled(
            warning,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
