//! Salary form view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus};

use super::panel_border;

const PRIVACY_NOTE: &str = "Used only to calculate your budget allocation. \
Nothing you type here is stored.";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Net Salary ")
        .borders(Borders::ALL)
        .border_style(panel_border(app, &[Focus::Salary]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Question
            Constraint::Length(2), // Privacy note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Min(0),
        ])
        .split(inner);

    let question = Paragraph::new(Line::from(Span::styled(
        "What's your net salary?",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(question, chunks[0]);

    let note = Paragraph::new(PRIVACY_NOTE)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(note, chunks[1]);

    frame.render_widget(app.salary_form.input.clone(), chunks[3]);

    if let Some(error) = app.salary_form.error() {
        let message = Paragraph::new(Line::from(Span::styled(
            error.message(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, chunks[4]);
    }
}
