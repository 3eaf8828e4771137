//! Text rendering for the nested select control.
//!
//! Rows go through the [`DrawOptionRow`] contract so a host can swap the
//! row format; everything here renders to plain strings.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::controller::{FieldDisplay, InteractionController, VisibleRow};
use crate::events::SelectEvents;
use crate::models::SelectionState;
use crate::ui::theme::{glyph, icons, icons_ascii};

/// Draws a single dropdown row
pub trait DrawOptionRow {
    fn draw_row(&self, row: &VisibleRow, is_active: bool) -> String;
}

/// Default row drawer: cursor, indent, expansion icon, checkbox, label
#[derive(Debug, Clone, Copy)]
pub struct TextRows {
    pub unicode: bool,
    pub hide_parent_checkbox: bool,
}

impl DrawOptionRow for TextRows {
    fn draw_row(&self, row: &VisibleRow, is_active: bool) -> String {
        render_option_row(row, is_active, self.unicode, self.hide_parent_checkbox)
    }
}

/// Render a single option row to a string
pub fn render_option_row(
    row: &VisibleRow,
    is_active: bool,
    unicode: bool,
    hide_parent_checkbox: bool,
) -> String {
    let indent = "  ".repeat(row.depth);
    let cursor = if is_active { "> " } else { "  " };

    // Expansion icon (only for parents)
    let expand_icon = if row.is_parent {
        if row.expanded {
            format!("{} ", glyph(unicode, icons::EXPAND, icons_ascii::EXPAND))
        } else {
            format!("{} ", glyph(unicode, icons::COLLAPSE, icons_ascii::COLLAPSE))
        }
    } else {
        String::from("  ")
    };

    let state_icon = if row.is_parent && hide_parent_checkbox {
        String::new()
    } else {
        let icon = match row.state {
            SelectionState::Selected => glyph(unicode, icons::SELECTED, icons_ascii::SELECTED),
            SelectionState::Unselected => {
                glyph(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
            }
            SelectionState::Partial => glyph(unicode, icons::PARTIAL, icons_ascii::PARTIAL),
        };
        format!("{} ", icon)
    };

    format!(
        "{}{}{}{}{}",
        cursor, indent, expand_icon, state_icon, row.label
    )
}

/// Render the collapsed field: label, then chips, count badge or placeholder
pub fn render_field<E: SelectEvents>(controller: &InteractionController<E>, unicode: bool) -> String {
    let props = controller.props();

    let mut out = String::new();
    if !props.label.is_empty() {
        out.push_str(&props.label);
        if props.is_required {
            out.push_str(" *");
        }
        out.push_str(": ");
    }

    match controller.field_display() {
        FieldDisplay::Placeholder(text) => out.push_str(&text),
        FieldDisplay::Count(n) => out.push_str(&format!("({} selected)", n)),
        FieldDisplay::Chips(labels) => {
            let chips: Vec<String> = labels
                .iter()
                .map(|label| render_chip(label, unicode, !props.is_locked()))
                .collect();
            out.push_str(&chips.join(" "));
        }
    }

    let arrow = if controller.is_open() {
        glyph(unicode, icons::DROPDOWN_OPEN, icons_ascii::DROPDOWN_OPEN)
    } else {
        glyph(unicode, icons::DROPDOWN_CLOSED, icons_ascii::DROPDOWN_CLOSED)
    };

    match props.width {
        Some(width) => {
            // Keep room for " <arrow>" at the end
            let reserved = UnicodeWidthStr::width(arrow) + 1;
            let budget = (width as usize).saturating_sub(reserved);
            let ellipsis = glyph(unicode, icons::ELLIPSIS, icons_ascii::ELLIPSIS);
            format!("{} {}", truncate_to_width(&out, budget, ellipsis), arrow)
        }
        None => format!("{} {}", out, arrow),
    }
}

/// Render one chip; dismissible chips carry the dismiss mark
pub fn render_chip(label: &str, unicode: bool, dismissible: bool) -> String {
    let open = glyph(unicode, icons::CHIP_OPEN, icons_ascii::CHIP_OPEN);
    let close = glyph(unicode, icons::CHIP_CLOSE, icons_ascii::CHIP_CLOSE);
    if dismissible {
        let dismiss = glyph(unicode, icons::DISMISS, icons_ascii::DISMISS);
        format!("{}{} {}{}", open, label, dismiss, close)
    } else {
        format!("{}{}{}", open, label, close)
    }
}

/// Render the search input line
pub fn render_search_line(query: &str, unicode: bool) -> String {
    format!("{} {}", glyph(unicode, icons::SEARCH, icons_ascii::SEARCH), query)
}

/// Render the dropdown rows inside the scroll window
pub fn render_dropdown<E: SelectEvents>(
    controller: &InteractionController<E>,
    drawer: &impl DrawOptionRow,
) -> String {
    let mut out = String::new();
    let offset = controller.scroll_offset();
    for (i, row) in controller.window().iter().enumerate() {
        let is_active = offset + i == controller.cursor_position();
        out.push_str(&drawer.draw_row(row, is_active));
        out.push('\n');
    }
    out
}

/// Render the whole control: field line, then search and rows when open
pub fn render<E: SelectEvents>(controller: &InteractionController<E>, unicode: bool) -> String {
    let mut out = render_field(controller, unicode);
    out.push('\n');
    if controller.is_open() {
        if controller.props().show_search {
            out.push_str(&render_search_line(controller.search(), unicode));
            out.push('\n');
        }
        let drawer = TextRows {
            unicode,
            hide_parent_checkbox: controller.props().hide_parent_checkbox,
        };
        out.push_str(&render_dropdown(controller, &drawer));
    }
    out
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, unicode: bool) -> String {
    format!(
        "Selected: {}/{}\n\n{} = selected    {} = partial    {} = not selected",
        selected,
        total,
        glyph(unicode, icons::SELECTED, icons_ascii::SELECTED),
        glyph(unicode, icons::PARTIAL, icons_ascii::PARTIAL),
        glyph(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(show_search: bool) -> String {
    let mut help = String::from(
        "[Tab] Open/Close    [a] All    [c] Clear    [Enter] Confirm    [Esc] Close/Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
    );
    if show_search {
        help.push_str("\n(Type to search; letters go to the search box)");
    }
    help
}

/// Cut `text` to at most `width` display columns, ending in `ellipsis` when cut
pub fn truncate_to_width(text: &str, width: usize, ellipsis: &str) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let ellipsis_width = UnicodeWidthStr::width(ellipsis);
    if width < ellipsis_width {
        return String::new();
    }
    let budget = width - ellipsis_width;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ellipsis);
    out
}
