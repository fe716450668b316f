use crate::entities::{Dimension, SelectionState};

/// Select-on-first-click, deselect-on-repeat-click.
///
/// Clicking the value that is already selected clears it; clicking anything
/// else selects (or replaces with) the clicked value.
pub fn toggle(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(value) if value == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

impl SelectionState {
    /// Applies a click on the given dimension's chart and returns the new
    /// state. Other dimensions are left as they are. A `None` click (nothing
    /// was clicked since the last render) leaves the state unchanged.
    pub fn with_click(mut self, dimension: Dimension, clicked: Option<&str>) -> Self {
        if let Some(clicked) = clicked {
            let next = toggle(self.get(dimension), clicked);
            *self.slot_mut(dimension) = next;
        }
        self
    }
}
