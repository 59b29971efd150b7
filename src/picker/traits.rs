//! Picker trait definition
//!
//! Cyclic index arithmetic shared by list-based selection components.

/// A generic picker over an ordered item list.
///
/// Implementors expose their items and a selection index; the default methods
/// rotate that index with wrap-around in both directions.
///
/// # Example
///
/// ```ignore
/// struct Difficulty {
///     levels: Vec<&'static str>,
///     selected: usize,
/// }
///
/// impl Picker for Difficulty {
///     type Item = &'static str;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.levels
///     }
///
///     fn selected_index(&self) -> usize {
///         self.selected
///     }
///
///     fn set_selected_index(&mut self, index: usize) {
///         self.selected = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index
    fn selected_index(&self) -> usize;

    /// Set the selected index
    fn set_selected_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Move the selection by `delta` positions, wrapping at both ends.
    ///
    /// Returns the new index. An empty picker always reports 0 and is left
    /// untouched.
    fn rotate(&mut self, delta: isize) -> usize {
        let len = self.len();
        if len == 0 {
            return 0;
        }
        let next = wrap_index(self.selected_index() as isize + delta, len);
        self.set_selected_index(next);
        next
    }

    /// Select the next item (wraps around)
    fn select_next(&mut self) -> usize {
        self.rotate(1)
    }

    /// Select the previous item (wraps around)
    fn select_prev(&mut self) -> usize {
        self.rotate(-1)
    }

    /// Get the currently selected item
    fn selected_item(&self) -> Option<&Self::Item> {
        self.items().get(self.selected_index())
    }
}

/// Normalize any signed position into `[0, len)`.
///
/// `len` must be non-zero.
pub fn wrap_index(position: isize, len: usize) -> usize {
    position.rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Levels {
        items: Vec<u8>,
        selected: usize,
    }

    impl Picker for Levels {
        type Item = u8;

        fn items(&self) -> &[u8] {
            &self.items
        }

        fn selected_index(&self) -> usize {
            self.selected
        }

        fn set_selected_index(&mut self, index: usize) {
            self.selected = index;
        }
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(3, 3), 0);
        assert_eq!(wrap_index(-1, 3), 2);
        assert_eq!(wrap_index(-7, 3), 2);
        assert_eq!(wrap_index(1, 3), 1);
    }

    #[test]
    fn test_select_next_wraps() {
        let mut levels = Levels { items: vec![1, 2, 3], selected: 2 };
        assert_eq!(levels.select_next(), 0);
        assert_eq!(levels.selected_item(), Some(&1));
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut levels = Levels { items: vec![1, 2, 3], selected: 0 };
        assert_eq!(levels.select_prev(), 2);
        assert_eq!(levels.selected_item(), Some(&3));
    }

    #[test]
    fn test_rotate_empty_is_noop() {
        let mut levels = Levels { items: vec![], selected: 0 };
        assert_eq!(levels.rotate(5), 0);
        assert_eq!(levels.rotate(-5), 0);
        assert!(levels.selected_item().is_none());
    }
}
