//! `datatable-ratatui` draws [`datatable_core::table::Table`]s into a ratatui [`ratatui::buffer::Buffer`].
//!
//! The view renders from the same model as the HTML surface: header labels, sort indicators, the
//! optional filter row, body rows and the empty-state line. It records where each sort control
//! and row landed so mouse clicks can be routed back through
//! [`datatable_core::table::Table::handle_event`].
//!
//! ## Getting started
//!
//! Call [`view::TableView::render`] from your draw closure, then feed mouse events to
//! [`view::TableView::handle_mouse`]. With the `crossterm` feature,
//! [`crossterm_input::mouse_event_from_crossterm`] converts terminal events.
//!
//! Useful entry points:
//! - [`view::TableView`]: rendering and hit-testing.
//! - [`theme::Theme`]: styles and sort/empty glyphs.
//! - [`render::render_str_clipped`]: width-aware string drawing.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod view;
