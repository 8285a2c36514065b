//! Status bar view
//!
//! Shows the active rule, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::RuleMode;
use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rule = app.budget_rule();
    let rule_color = if rule.is_balanced() {
        Color::Green
    } else {
        Color::Red
    };

    let mut spans = vec![
        Span::styled(" Rule: ", Style::default().fg(Color::White)),
        Span::styled(
            match app.rule_mode() {
                RuleMode::Custom => format!("Custom {}", rule),
                RuleMode::Preset(preset) => preset.label().to_string(),
            },
            Style::default().fg(rule_color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.settings.show_key_hints {
        let hints = key_hints(app.focus);
        let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding_len = (area.width as usize)
            .saturating_sub(left_len)
            .saturating_sub(hints.chars().count());
        spans.push(Span::raw(" ".repeat(padding_len.max(1))));
        spans.push(Span::styled(hints, Style::default().fg(Color::White)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Salary => " Enter:Done  Ctrl+u:Clear  Tab:Next ",
        Focus::RuleSelector | Focus::Sliders => " q:Quit  ?:Help  Tab:Next ",
    }
}
