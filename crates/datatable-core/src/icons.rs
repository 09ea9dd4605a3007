//! Icon artwork used by the table.
//!
//! The table treats icons as opaque decoration. Implement [`IconSet`] to plug in another icon
//! library.

use crate::markup::Element;
use crate::markup::Node;

pub trait IconSet {
    /// Glyph of the "sort ascending" control.
    fn caret_up(&self) -> Node;

    /// Glyph of the "sort descending" control.
    fn caret_down(&self) -> Node;

    /// Decoration shown next to the empty-state message.
    fn empty(&self) -> Node;
}

const CARET_UP_PATH: &str = "M464 352L256 96 48 352h416z";
const CARET_DOWN_PATH: &str = "M48 160l208 256 208-256H48z";
const BAN_PATH: &str = "M425.706,86.294A240,240,0,0,0,86.294,425.705,240,240,0,0,0,425.706,86.294ZM256,48A207.1,207.1,0,0,1,391.528,98.345L98.345,391.528A207.1,207.1,0,0,1,48,256C48,141.309,141.309,48,256,48Zm0,416a207.084,207.084,0,0,1-134.986-49.887l293.1-293.1A207.084,207.084,0,0,1,464,256C464,370.691,370.691,464,256,464Z";

/// Inline SVG icons: sharp carets for sorting and a "ban" glyph for the empty state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgIcons;

fn caret(path: &str) -> Node {
    Element::new("svg")
        .attr("stroke", "currentColor")
        .attr("fill", "currentColor")
        .attr("stroke-width", "0")
        .attr("viewBox", "0 0 512 512")
        .attr("height", "1em")
        .attr("width", "1em")
        .attr("aria-hidden", "true")
        .child(Element::new("path").attr("d", path))
        .into()
}

impl IconSet for SvgIcons {
    fn caret_up(&self) -> Node {
        caret(CARET_UP_PATH)
    }

    fn caret_down(&self) -> Node {
        caret(CARET_DOWN_PATH)
    }

    fn empty(&self) -> Node {
        Element::new("svg")
            .attr("width", "30")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", "0 0 512 512")
            .attr("class", "c-icon c-icon-custom-size text-danger mb-2")
            .attr("role", "img")
            .child(
                Element::new("path")
                    .attr("fill", "var(--ci-primary-color, currentColor)")
                    .attr("d", BAN_PATH)
                    .attr("class", "ci-primary"),
            )
            .into()
    }
}

/// Plain-text glyph icons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextIcons {
    pub up: String,
    pub down: String,
    pub empty: String,
}

impl Default for TextIcons {
    fn default() -> Self {
        Self {
            up: "▲".to_string(),
            down: "▼".to_string(),
            empty: "⊘".to_string(),
        }
    }
}

impl IconSet for TextIcons {
    fn caret_up(&self) -> Node {
        Node::text(self.up.clone())
    }

    fn caret_down(&self) -> Node {
        Node::text(self.down.clone())
    }

    fn empty(&self) -> Node {
        Node::text(self.empty.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::to_html;

    #[test]
    fn svg_carets_are_inline_svg() {
        let html = to_html(&SvgIcons.caret_up());
        assert!(html.starts_with("<svg "));
        assert!(html.contains(CARET_UP_PATH));
        assert!(html.ends_with("</svg>"));
    }

    #[test]
    fn text_icons_have_no_markup() {
        let icons = TextIcons::default();
        assert_eq!(icons.caret_down().text_content(), "▼");
        assert_eq!(to_html(&icons.empty()), "⊘");
    }
}
