//! TUI Views module
//!
//! The header, the rule selector and salary form on the left, the budget
//! chart on the right, and the status bar.

pub mod budget_chart;
pub mod rule_selector;
pub mod salary_form;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App, Focus};
use super::dialogs;
use super::layout::{AppLayout, FormLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header);

    let form = FormLayout::new(layout.form, app.rule_mode().is_custom());
    rule_selector::render(frame, app, form.rules);
    salary_form::render(frame, app, form.salary);
    budget_chart::render(frame, app, layout.chart);

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Pocket Metrics",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  split your net salary into needs, wants and savings",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

/// Border style for a panel, highlighted when it holds focus
pub(crate) fn panel_border(app: &App, panels: &[Focus]) -> Style {
    if panels.contains(&app.focus) && !app.has_dialog() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
