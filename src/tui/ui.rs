use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use super::components::{render_selector, SelectorLayout};
use super::theme::*;

const SELECTOR_WIDTH: u16 = 40;

/// Draw the whole screen and return the selector geometry for binding.
pub fn render(frame: &mut Frame, app: &App) -> SelectorLayout {
    let area = frame.area();

    // Selector, position, status, hotkeys stacked in the vertical center
    let rows = Layout::vertical([
        Constraint::Length(3), // Selector
        Constraint::Length(1), // Position
        Constraint::Length(1), // Status
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Hotkeys
    ])
    .flex(Flex::Center)
    .split(area);

    let selector_area = centered(rows[0], SELECTOR_WIDTH);
    let layout = render_selector(frame, selector_area, &app.selector, &app.title);

    let total = app.selector.choices().len();
    let position = if total == 0 {
        String::new()
    } else {
        format!("{}/{}", app.selector.selection_index() + 1, total)
    };
    frame.render_widget(
        Paragraph::new(Line::styled(position, Style::new().fg(ACCENT_BLUE))).centered(),
        rows[1],
    );

    let status = match &app.status {
        Some(status) => Line::styled(status.as_str(), Style::new().fg(ACCENT_CORAL)),
        None => Line::raw(""),
    };
    frame.render_widget(Paragraph::new(status).centered(), rows[2]);

    frame.render_widget(Paragraph::new(hotkeys()).centered(), rows[4]);

    layout
}

fn hotkeys() -> Line<'static> {
    Line::from(vec![
        Span::styled("[←/→]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" change · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" confirm · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[r]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" reload · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM).italic()),
    ])
}

/// Horizontally center a fixed-width strip inside `area`.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
