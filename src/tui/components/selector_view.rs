//! Selector component - `<  label  >` inside a titled border.
//!
//! Rendering and input binding are separate steps: `render_selector` draws the
//! current state and returns the cell geometry, and `SelectorLayout::bind`
//! wires the arrow cells into the interaction registry.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::events::Action;
use crate::picker::{ChoiceSelector, Picker};
use crate::tui::interaction::{ClickRegion, InteractiveRegion, InteractionRegistry};
use crate::tui::theme::*;

const ARROW_WIDTH: u16 = 3;

/// Screen cells of a rendered selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorLayout {
    pub container: Rect,
    pub previous: Rect,
    pub label: Rect,
    pub next: Rect,
}

impl SelectorLayout {
    /// Split `area` into the bordered container and its three cells.
    pub fn new(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let cells = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH), // previous
            Constraint::Min(0),              // label
            Constraint::Length(ARROW_WIDTH), // next
        ])
        .split(inner);

        Self {
            container: area,
            previous: cells[0],
            label: cells[1],
            next: cells[2],
        }
    }

    /// Make the arrow cells clickable.
    pub fn bind(&self, registry: &mut InteractionRegistry) {
        registry.register(
            InteractiveRegion::clickable(
                "selector_previous",
                ClickRegion::from(self.previous),
                Action::SelectPrevious,
            )
            .with_priority(1),
        );
        registry.register(
            InteractiveRegion::clickable(
                "selector_next",
                ClickRegion::from(self.next),
                Action::SelectNext,
            )
            .with_priority(1),
        );
    }
}

/// Render the selector for the current state of `selector`.
pub fn render_selector<V>(
    frame: &mut Frame,
    area: Rect,
    selector: &ChoiceSelector<V>,
    title: &str,
) -> SelectorLayout {
    let layout = SelectorLayout::new(area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::new().fg(ACCENT_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT));
    frame.render_widget(block, layout.container);

    // Arrows are dimmed when there is nothing to cycle through
    let arrow_style = if selector.len() > 1 {
        Style::new().fg(ACCENT_GOLD).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" < ", arrow_style))),
        layout.previous,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" > ", arrow_style))),
        layout.next,
    );

    let label = if selector.is_empty() {
        Line::styled("(no choices)", Style::new().fg(TEXT_DIM))
    } else {
        Line::styled(selector.label(), Style::new().fg(TEXT_WHITE).bold())
    };
    frame.render_widget(
        Paragraph::new(label).alignment(Alignment::Center),
        layout.label,
    );

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Choice;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn difficulties() -> ChoiceSelector<i64> {
        ChoiceSelector::new(vec![
            Choice::new(2, "Easy"),
            Choice::new(3, "Medium").with_default(),
            Choice::new(4, "Hard"),
        ])
    }

    fn draw(selector: &ChoiceSelector<i64>) -> (Buffer, SelectorLayout) {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let mut layout = SelectorLayout::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                layout = render_selector(frame, area, selector, "Difficulty");
            })
            .unwrap();
        (terminal.backend().buffer().clone(), layout)
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_layout_cells() {
        let layout = SelectorLayout::new(Rect::new(0, 0, 30, 3));
        assert_eq!(layout.previous, Rect::new(1, 1, 3, 1));
        assert_eq!(layout.next, Rect::new(26, 1, 3, 1));
        assert_eq!(layout.label, Rect::new(4, 1, 22, 1));
    }

    #[test]
    fn test_renders_label_between_arrows() {
        let selector = difficulties();
        let (buffer, _) = draw(&selector);

        let middle = row(&buffer, 1);
        assert!(middle.starts_with("│ < "));
        assert!(middle.ends_with(" > │"));
        assert!(middle.contains("Medium"));
        assert!(row(&buffer, 0).contains(" Difficulty "));
    }

    #[test]
    fn test_label_follows_selection() {
        let mut selector = difficulties();
        selector.next();
        let (buffer, _) = draw(&selector);
        assert!(row(&buffer, 1).contains("Hard"));
    }

    #[test]
    fn test_empty_selector_placeholder() {
        let selector = ChoiceSelector::<i64>::new(Vec::new());
        let (buffer, _) = draw(&selector);
        assert!(row(&buffer, 1).contains("(no choices)"));
    }

    #[test]
    fn test_bind_wires_arrows() {
        let selector = difficulties();
        let (_, layout) = draw(&selector);

        let mut registry = InteractionRegistry::new();
        assert_eq!(registry.handle_click(2, 1), Action::None);

        layout.bind(&mut registry);
        assert_eq!(registry.handle_click(2, 1), Action::SelectPrevious);
        assert_eq!(registry.handle_click(27, 1), Action::SelectNext);
        assert_eq!(registry.handle_click(15, 1), Action::None);
    }
}
