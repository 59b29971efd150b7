//! Choice records shown by the selector.

use serde::{Deserialize, Serialize};

/// A single selectable entry: an opaque value paired with its display label.
///
/// ```toml
/// [[choices]]
/// value = 3
/// label = "Medium"
/// default = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice<V> {
    /// Value handed back to the host on selection
    pub value: V,

    /// Text shown between the arrows
    pub label: String,

    /// Marks the entry selected after (re)initialization
    #[serde(default)]
    pub default: bool,
}

impl<V> Choice<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            default: false,
        }
    }

    /// Mark this choice as the default (builder style)
    pub fn with_default(mut self) -> Self {
        self.default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flag_is_optional() {
        let choice: Choice<i64> = toml::from_str("value = 2\nlabel = \"Easy\"").unwrap();
        assert_eq!(choice, Choice::new(2, "Easy"));
        assert!(!choice.default);
    }

    #[test]
    fn test_with_default() {
        let choice = Choice::new("m", "Medium").with_default();
        assert!(choice.default);
        assert_eq!(choice.label, "Medium");
    }
}
