//! Layout definitions for the TUI
//!
//! Header on top, the form column on the left, the chart on the right and a
//! one-line status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub header: Rect,
    /// Rule selector and salary input
    pub form: Rect,
    /// Budget chart
    pub chart: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            form: horizontal[0],
            chart: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout of the form column
pub struct FormLayout {
    pub rules: Rect,
    pub salary: Rect,
}

impl FormLayout {
    /// Sliders take three extra rows in custom mode
    pub fn new(area: Rect, custom: bool) -> Self {
        let rules_height = if custom { 10 } else { 6 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(rules_height), Constraint::Min(7)])
            .split(area);

        Self {
            rules: chunks[0],
            salary: chunks[1],
        }
    }
}

/// Layout of the chart panel
pub struct ChartLayout {
    /// Total salary caption
    pub total: Rect,
    pub bars: Rect,
    pub legend: Rect,
}

impl ChartLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(4),
            ])
            .split(area);

        Self {
            total: chunks[0],
            bars: chunks[1],
            legend: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.form.width + layout.chart.width, 100);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.x, 25);
        assert!(rect.bottom() <= area.bottom());
    }
}
