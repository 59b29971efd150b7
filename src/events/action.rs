//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit without a selection
    Quit,
    /// Quit and report the current value
    Confirm,
    /// Step to the previous choice
    SelectPrevious,
    /// Step to the next choice
    SelectNext,
    /// Re-read the choice list from config
    ReloadChoices,
    /// Nothing to do
    None,
}
