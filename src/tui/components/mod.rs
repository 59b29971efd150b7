//! UI components for the TUI.
//!
//! - `selector_view` - Left/right choice selector

mod selector_view;

pub use selector_view::{SelectorLayout, render_selector};
