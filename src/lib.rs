//! Tabcat - Terminal Record Table Browser
//!
//! This library provides the core functionality for Tabcat: fetching a JSON
//! record set from a selectable endpoint and presenting it as a sortable,
//! searchable, paginated table with a detail panel and a validated add-row
//! form.
//!
//! The binary in `src/main.rs` wires these modules to a crossterm/ratatui
//! terminal; everything below renders from, or transitions, the [`app::App`]
//! view state.

pub mod app;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod form;
pub mod sort;
pub mod theme;
pub mod types;
pub mod ui;
pub mod validate;
