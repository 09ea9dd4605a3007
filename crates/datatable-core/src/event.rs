//! Mouse presses and the events a table reacts to.

use crate::sort::SortControl;
use crate::sort::SortDirection;
use crate::sort::SortState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub fn none() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A mouse button press. Handed to row-click callbacks as the originating event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    /// A plain left-button press at `(x, y)`.
    pub fn click(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            button: MouseButton::Left,
            modifiers: KeyModifiers::none(),
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_left_click(&self) -> bool {
        self.button == MouseButton::Left
    }
}

/// Input routed to [`crate::table::Table::handle_event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// One of the two sort controls of column `column` was clicked.
    SortClick {
        column: String,
        control: SortControl,
    },
    /// The row at `index` was clicked.
    RowClick { index: usize, mouse: MouseEvent },
}

impl TableEvent {
    pub fn sort_click(column: impl Into<String>, control: SortControl) -> Self {
        TableEvent::SortClick {
            column: column.into(),
            control,
        }
    }

    /// Builds a sort click from the `data-sort-column` / `data-sort-direction` attribute values
    /// emitted on indicator anchors.
    pub fn from_sort_data(column: &str, direction: &str) -> Option<Self> {
        let direction = SortDirection::parse(direction)?;
        Some(Self::sort_click(column, direction.into()))
    }

    pub fn row_click(index: usize, mouse: MouseEvent) -> Self {
        TableEvent::RowClick { index, mouse }
    }
}

/// What a table did in response to a [`TableEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableAction {
    None,
    /// The sort state changed; the caller should reorder its items.
    SortChanged(SortState),
    /// The row-click callback ran for this row index.
    RowClicked(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indicator_data_attributes() {
        assert_eq!(
            TableEvent::from_sort_data("age", "desc"),
            Some(TableEvent::sort_click("age", SortControl::Down))
        );
        assert_eq!(TableEvent::from_sort_data("age", "sideways"), None);
    }

    #[test]
    fn click_is_left_button_down() {
        assert!(MouseEvent::click(1, 2).is_left_click());
        let right = MouseEvent::click(1, 2).with_button(MouseButton::Right);
        assert!(!right.is_left_click());
    }
}
