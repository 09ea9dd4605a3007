//! The two-arrow sort control shown in a column header.

use crate::icons::IconSet;
use crate::markup::Element;
use crate::markup::Node;
use crate::sort::IndicatorState;
use crate::sort::SortControl;
use crate::sort::SortDirection;
use crate::theme::ClassNames;

/// Sort-direction affordance for one column.
///
/// Stateless: `state` is fully controlled by the owner, and a click only reports the requested
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortIndicator<'a> {
    name: &'a str,
    disabled: bool,
    state: IndicatorState,
}

impl<'a> SortIndicator<'a> {
    /// `name` is only used for accessibility labels and data attributes.
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            disabled: false,
            state: IndicatorState::Neutral,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn state(mut self, state: IndicatorState) -> Self {
        self.state = state;
        self
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn indicator_state(&self) -> IndicatorState {
        self.state
    }

    /// The state to style: neutral whenever the indicator is disabled.
    pub fn visual_state(&self) -> IndicatorState {
        if self.disabled {
            IndicatorState::Neutral
        } else {
            self.state
        }
    }

    /// The direction a click on `control` requests, or `None` when the click is a no-op.
    ///
    /// A click is a no-op while disabled, or when the control's direction is already the
    /// displayed state.
    pub fn click(&self, control: SortControl) -> Option<SortDirection> {
        if self.disabled {
            return None;
        }
        match (control, self.state) {
            (SortControl::Up, IndicatorState::Ascending)
            | (SortControl::Down, IndicatorState::Descending) => None,
            (control, _) => Some(control.direction()),
        }
    }

    /// Invokes `on_change` with the requested direction, if any. Returns whether it ran.
    pub fn click_with(&self, control: SortControl, on_change: impl FnOnce(SortDirection)) -> bool {
        match self.click(control) {
            Some(direction) => {
                on_change(direction);
                true
            }
            None => false,
        }
    }

    pub fn render(&self, classes: &ClassNames, icons: &dyn IconSet) -> Node {
        let state_class = match self.visual_state() {
            IndicatorState::Ascending => classes.ascending.as_str(),
            IndicatorState::Descending => classes.descending.as_str(),
            IndicatorState::Neutral => "",
        };
        Element::new("div")
            .class(&classes.indicator_group)
            .class(state_class)
            .child(self.render_control(SortControl::Up, icons.caret_up()))
            .child(self.render_control(SortControl::Down, icons.caret_down()))
            .into()
    }

    fn render_control(&self, control: SortControl, icon: Node) -> Element {
        let (class, label) = match control {
            SortControl::Up => ("up", "sort ascending"),
            SortControl::Down => ("down", "sort descending"),
        };
        let mut anchor = Element::new("a")
            .attr("role", "button")
            .attr("class", class)
            .attr("aria-label", format!("{}: {label}", self.name))
            .attr("data-sort-column", self.name)
            .attr("data-sort-direction", control.direction().as_str());
        if self.disabled {
            anchor = anchor.attr("aria-disabled", "true");
        }
        anchor.child(icon)
    }
}
