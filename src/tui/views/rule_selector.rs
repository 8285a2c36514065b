//! Rule selector view
//!
//! Radio-style list of the presets plus "Custom", and in custom mode one
//! gauge per category.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

use crate::models::{Category, RuleMode};
use crate::tui::app::{App, Focus};

use super::budget_chart::category_color;
use super::panel_border;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Select Budget Rule ")
        .borders(Borders::ALL)
        .border_style(panel_border(app, &[Focus::RuleSelector, Focus::Sliders]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let custom = app.rule_mode().is_custom();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if custom {
            vec![
                Constraint::Length(RuleMode::ALL.len() as u16),
                Constraint::Length(1),
                Constraint::Length(Category::ALL.len() as u16),
                Constraint::Min(0),
            ]
        } else {
            vec![Constraint::Length(RuleMode::ALL.len() as u16), Constraint::Min(0)]
        })
        .split(inner);

    render_options(frame, app, chunks[0]);

    if custom {
        render_sliders(frame, app, chunks[2]);
    }
}

fn render_options(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::RuleSelector;
    let lines: Vec<Line> = RuleMode::ALL
        .iter()
        .enumerate()
        .map(|(index, mode)| {
            let active = *mode == app.rule_mode();
            let marker = if active { "(•)" } else { "( )" };
            let highlighted = focused && index == app.selected_rule_index;

            let style = if highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };

            Line::from(Span::styled(
                format!(" {} {} ", marker, mode.label()),
                style,
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_sliders(frame: &mut Frame, app: &App, area: Rect) {
    let rule = app.budget_rule();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(area);

    for (row, category) in rows.iter().zip(Category::ALL) {
        let percentage = rule.get(category);
        let selected = app.focus == Focus::Sliders && app.selected_category() == category;

        let label_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let gauge = LineGauge::default()
            .label(Span::styled(
                format!("{} {}%", category.label(), percentage),
                label_style,
            ))
            .ratio(f64::from(percentage) / 100.0)
            .filled_style(Style::default().fg(category_color(category)))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .line_set(if selected {
                symbols::line::THICK
            } else {
                symbols::line::NORMAL
            });

        frame.render_widget(gauge, *row);
    }
}
