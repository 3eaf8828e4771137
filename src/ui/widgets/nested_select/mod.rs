//! Nested Select Widget
//!
//! A hierarchical multi-select over a flat option list with parent
//! references. Supports parent-child selection fan-out, partial parent
//! states, chips or a count badge, search forwarding and lazy loading.
//!
//! # Module Structure
//!
//! - `render` - Text rendering of the field, search line and rows
//! - `input` - Keyboard/mouse mapping and the interactive loop
//!
//! State lives in [`crate::controller::InteractionController`].

mod input;
mod render;

pub use input::{apply_click, classify_click, key_to_action, run_interactive, ClickTarget};
pub use render::{
    render, render_chip, render_dropdown, render_field, render_help_bar, render_option_row,
    render_search_line, render_status_bar, truncate_to_width, DrawOptionRow, TextRows,
};
