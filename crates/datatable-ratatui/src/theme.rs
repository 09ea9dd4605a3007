use ratatui::style::Modifier;
use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub header: Style,
    pub border: Style,
    /// Applied to every other body row when the table is striped.
    pub stripe: Style,
    /// Glyph of the "sort ascending" control.
    pub sort_up: String,
    /// Glyph of the "sort descending" control.
    pub sort_down: String,
    /// Decoration appended to the empty-state message.
    pub empty_icon: String,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            header: Style::default().add_modifier(Modifier::BOLD),
            border: Style::default().dark_gray(),
            stripe: Style::default().add_modifier(Modifier::DIM),
            sort_up: "▲".to_string(),
            sort_down: "▼".to_string(),
            empty_icon: "⊘".to_string(),
        }
    }
}
