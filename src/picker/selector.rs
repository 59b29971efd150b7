//! One-line choice selector state machine.
//!
//! Holds the ordered choices and a wrapping selection index. Rendering and
//! input wiring live in `tui`; this type never touches a terminal.

use crate::choice::Choice;

use super::traits::{Picker, wrap_index};

/// Callback invoked with the newly selected choice
pub type SelectListener<V> = Box<dyn FnMut(&Choice<V>)>;

/// Cycles through a fixed list of labeled choices with left/right steps.
pub struct ChoiceSelector<V> {
    choices: Vec<Choice<V>>,
    selection_index: usize,
    listener: Option<SelectListener<V>>,
}

impl<V> ChoiceSelector<V> {
    /// Build a selector positioned on the list's default choice.
    pub fn new(choices: Vec<Choice<V>>) -> Self {
        let mut selector = Self {
            choices: Vec::new(),
            selection_index: 0,
            listener: None,
        };
        selector.set_choices(choices);
        selector
    }

    /// Replace the whole choice list and reselect its default.
    ///
    /// The first choice flagged `default` wins; without one the selection
    /// starts at index 0. Returns the new index.
    pub fn set_choices(&mut self, choices: Vec<Choice<V>>) -> usize {
        self.choices = choices;
        self.selection_index = default_index(&self.choices).unwrap_or(0);
        self.update()
    }

    /// Step forward, wrapping past the last choice. Returns the new index.
    pub fn next(&mut self) -> usize {
        self.select_next();
        self.update()
    }

    /// Step backward, wrapping before the first choice. Returns the new index.
    pub fn previous(&mut self) -> usize {
        self.select_prev();
        self.update()
    }

    /// Register the selection listener, replacing any previous one.
    pub fn on_select(&mut self, listener: impl FnMut(&Choice<V>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Value of the current choice, `None` when there are no choices.
    pub fn value(&self) -> Option<&V> {
        self.selected().map(|choice| &choice.value)
    }

    pub fn selected(&self) -> Option<&Choice<V>> {
        self.selected_item()
    }

    /// Label currently on display (empty without choices).
    pub fn label(&self) -> &str {
        self.selected().map(|choice| choice.label.as_str()).unwrap_or("")
    }

    pub fn selection_index(&self) -> usize {
        self.selection_index
    }

    pub fn choices(&self) -> &[Choice<V>] {
        &self.choices
    }

    /// Normalize the index and notify the listener.
    fn update(&mut self) -> usize {
        if self.choices.is_empty() {
            self.selection_index = 0;
            return 0;
        }
        self.selection_index = wrap_index(self.selection_index as isize, self.choices.len());
        if let (Some(listener), Some(choice)) =
            (self.listener.as_mut(), self.choices.get(self.selection_index))
        {
            listener(choice);
        }
        self.selection_index
    }
}

impl<V> Picker for ChoiceSelector<V> {
    type Item = Choice<V>;

    fn items(&self) -> &[Choice<V>] {
        &self.choices
    }

    fn selected_index(&self) -> usize {
        self.selection_index
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selection_index = index;
    }
}

fn default_index<V>(choices: &[Choice<V>]) -> Option<usize> {
    choices.iter().position(|choice| choice.default)
}
