//! Mouse event handling.
//!
//! Clicks are resolved through the interaction registry, which the selector
//! layout populates after each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::interaction::InteractionRegistry;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(registry: &InteractionRegistry, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => registry.handle_click(mouse.column, mouse.row),
        _ => Action::None,
    }
}
