//! `datatable` is the facade over the data table crates.
//!
//! Everything from `datatable-core` is re-exported at the root. Enable the `ratatui` feature for
//! the terminal surface under [`tui`], and `crossterm` for terminal mouse input conversion.
pub use datatable_core::*;

#[cfg(feature = "ratatui")]
pub use datatable_ratatui as tui;
