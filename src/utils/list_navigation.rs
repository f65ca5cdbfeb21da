//! List navigation utilities for TUI components.
//!
//! Extension methods for circular navigation over a ratatui `ListState`.

use ratatui::widgets::ListState;

/// Extension trait for `ListState` that provides wrapping navigation.
pub trait ListStateExt {
    /// Move up one item. Moving up from the first item goes to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Move down one item. Moving down from the last item goes to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    /// Select `index` clamped into range, or nothing for an empty list.
    fn select_clamped(&mut self, index: usize, total_items: usize);
}

impl ListStateExt for ListState {
    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        let new_index = if current == 0 {
            total_items - 1
        } else {
            current - 1
        };
        self.select(Some(new_index));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        let new_index = if current >= total_items - 1 {
            0
        } else {
            current + 1
        };
        self.select(Some(new_index));
    }

    fn select_clamped(&mut self, index: usize, total_items: usize) {
        if total_items == 0 {
            self.select(None);
        } else {
            self.select(Some(index.min(total_items - 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_navigation() {
        let mut state = ListState::default();
        state.select(Some(0));

        // Wrap from first to last
        state.select_previous_wrap(5);
        assert_eq!(state.selected(), Some(4));

        // Wrap from last to first
        state.select_next_wrap(5);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_next_wrap_is_modular() {
        for start in 0..4 {
            for presses in 0..10 {
                let mut state = ListState::default();
                state.select(Some(start));
                for _ in 0..presses {
                    state.select_next_wrap(4);
                }
                assert_eq!(state.selected(), Some((start + presses) % 4));
            }
        }
    }

    #[test]
    fn test_empty_list() {
        let mut state = ListState::default();

        state.select_next_wrap(0);
        assert_eq!(state.selected(), None);

        state.select_previous_wrap(0);
        assert_eq!(state.selected(), None);

        state.select_clamped(3, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_select_clamped() {
        let mut state = ListState::default();
        state.select_clamped(10, 3);
        assert_eq!(state.selected(), Some(2));
        state.select_clamped(1, 3);
        assert_eq!(state.selected(), Some(1));
    }
}
