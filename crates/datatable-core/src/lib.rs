//! `datatable-core` is a headless, generic data table widget.
//!
//! It turns a list of column descriptors and a slice of records into table markup, with optional
//! per-column sort indicators, a column filter row, custom cell renderers and an empty-state
//! placeholder. Rendering surfaces (HTML here, a terminal buffer in `datatable-ratatui`) consume
//! the same [`table::TableModel`].
//!
//! ## Design goals
//!
//! - The caller owns the data: the table never reorders or filters items. Sort indicator clicks
//!   are reported as a [`sort::SortState`] and the caller passes reordered items on the next
//!   render.
//! - Event-loop agnostic: route clicks in through [`table::Table::handle_event`] and react to the
//!   returned [`event::TableAction`] (or the configured callbacks).
//! - Styling and icons are swappable: class names come from [`theme::ClassNames`], glyphs from an
//!   [`icons::IconSet`].
//!
//! ## Getting started
//!
//! ```
//! use datatable_core::field::Field;
//! use datatable_core::field::FieldSpec;
//! use datatable_core::record::JsonRecord;
//! use datatable_core::table::Table;
//! use serde_json::json;
//!
//! let items = JsonRecord::from_array(
//!     json!([{"id": 1, "firstName": "Ada", "admin": true}]),
//!     "id",
//! )
//! .unwrap();
//!
//! let fields = [
//!     FieldSpec::from("firstName"),
//!     Field::new("admin").label("Admin?").into(),
//! ];
//! let table = Table::builder(fields)
//!     .sorter(true)
//!     .build()
//!     .unwrap();
//!
//! let html = table.to_html(&items);
//! assert!(html.contains("First Name"));
//! assert!(html.contains("<td>true</td>"));
//! ```
//!
//! Useful entry points:
//! - [`table::Table`] / [`table::TableBuilder`]: the component and its configuration.
//! - [`sort_indicator::SortIndicator`]: the stand-alone two-arrow sort control.
//! - [`record::Record`]: implement it for your row type, or use [`record::JsonRecord`].
//! - [`html::to_html`]: serialize any [`markup::Node`].
pub mod error;
pub mod event;
pub mod field;
pub mod html;
pub mod icons;
pub mod label;
pub mod markup;
pub mod options;
pub mod record;
pub mod sort;
pub mod sort_indicator;
pub mod table;
pub mod theme;
pub mod value;
