//! Generic picker module
//!
//! Cyclic list selection: the `Picker` trait with the wrap-around arithmetic,
//! and `ChoiceSelector`, the one-line left/right selector built on it.

mod selector;
mod traits;

pub use selector::ChoiceSelector;
pub use traits::Picker;
