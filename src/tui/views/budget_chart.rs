//! Budget chart view
//!
//! One bar per category, the net salary as the headline figure and a legend
//! with the percentage and amount of each category.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_legend_entry;
use crate::models::{Category, CategoryAllocation, Money};
use crate::tui::app::App;
use crate::tui::layout::ChartLayout;

/// Chart colour of a category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Needs => Color::Rgb(0x00, 0x88, 0xFE),
        Category::Wants => Color::Rgb(0x00, 0xC4, 0x9F),
        Category::Savings => Color::Rgb(0xFF, 0xBB, 0x28),
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Budget Chart ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(allocations) = app.allocation() else {
        let prompt = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Enter a valid net salary to see your budget",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(prompt, inner);
        return;
    };

    let symbol = app.settings.currency_symbol.as_str();
    let layout = ChartLayout::new(inner);

    let income = app
        .salary_form
        .income()
        .map(|income| Money::from_amount(income.value()))
        .unwrap_or_default();
    let total = Paragraph::new(vec![
        Line::from(Span::styled(
            income.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Net Salary", Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(total, layout.total);

    render_bars(frame, &allocations, symbol, layout.bars);
    render_legend(frame, &allocations, symbol, layout.legend);
}

fn render_bars(frame: &mut Frame, allocations: &[CategoryAllocation], symbol: &str, area: Rect) {
    let bars: Vec<Bar> = allocations
        .iter()
        .map(|allocation| {
            let color = category_color(allocation.category);
            Bar::default()
                .value(allocation.money().cents().max(0) as u64)
                .text_value(allocation.money().format_with_symbol(symbol))
                .label(Line::from(allocation.category.label()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let bar_width = (area.width.saturating_sub(4) / 3).clamp(1, 20);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

fn render_legend(
    frame: &mut Frame,
    allocations: &[CategoryAllocation],
    symbol: &str,
    area: Rect,
) {
    let lines: Vec<Line> = allocations
        .iter()
        .map(|allocation| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(category_color(allocation.category))),
                Span::raw(format_legend_entry(allocation, symbol)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_prompt_without_salary() {
        let settings = Settings::default();
        let app = App::new(&settings);
        let text = rendered_text(&app);
        assert!(text.contains("Budget Chart"));
        assert!(text.contains("Enter a valid net salary"));
    }

    #[test]
    fn test_legend_with_salary() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        for c in "5000".chars() {
            app.salary_form.insert(c);
        }
        let text = rendered_text(&app);
        assert!(text.contains("Net Salary"));
        assert!(text.contains("Needs (50%)"));
        assert!(text.contains("Savings (20%)"));
    }
}
