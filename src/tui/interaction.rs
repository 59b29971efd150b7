//! Component-level mouse interactivity.
//!
//! Components register clickable regions after render, and mouse clicks are
//! routed to the highest-priority region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! registry.register(
//!     InteractiveRegion::clickable("selector_next", bounds, Action::SelectNext)
//!         .with_priority(1),
//! );
//! ```

use ratatui::layout::Rect;

use crate::events::Action;
use crate::log;

/// Screen rectangle used for hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Right and bottom edges are exclusive
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse clicks.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click
    pub on_click: Action,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: action,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call before rebinding a frame)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region containing the
    /// point; earlier registrations win ties.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .fold(None::<&InteractiveRegion>, |best, r| match best {
                Some(b) if b.priority >= r.priority => Some(b),
                _ => Some(r),
            })
            .map(|r| {
                log::log_event(&format!("click {}", r.id));
                r.on_click
            })
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_region_at_screen_edge() {
        let region = ClickRegion::new(u16::MAX - 1, 0, 5, 1);
        assert!(region.contains(u16::MAX, 0));
    }

    #[test]
    fn test_from_rect() {
        let region = ClickRegion::from(Rect::new(1, 2, 3, 4));
        assert_eq!(region, ClickRegion::new(1, 2, 3, 4));
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable(
                "background",
                ClickRegion::new(0, 0, 100, 100),
                Action::ReloadChoices,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "popup",
                ClickRegion::new(20, 20, 60, 60),
                Action::SelectNext,
            )
            .with_priority(10),
        );

        // Click in popup area should return popup's action
        assert_eq!(registry.handle_click(50, 50), Action::SelectNext);

        // Click outside popup should return background's action
        assert_eq!(registry.handle_click(5, 5), Action::ReloadChoices);
    }

    #[test]
    fn test_clear() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("prev", ClickRegion::new(0, 0, 3, 1), Action::SelectPrevious);
        assert_eq!(registry.handle_click(1, 0), Action::SelectPrevious);
        registry.clear();
        assert_eq!(registry.handle_click(1, 0), Action::None);
    }
}
