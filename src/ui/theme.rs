use crossterm::style::Color;

/// Design tokens for the nested select UI.
///
/// Design constraints:
/// - Only 2 semantic colors (`colors::*`)
/// - All icons and chip delimiters must be sourced from this module
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const ACCENT: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    // Field.
    pub const CHIP_OPEN: &str = "⟨";
    pub const CHIP_CLOSE: &str = "⟩";
    pub const DISMISS: &str = "×";
    pub const SEARCH: &str = "⌕";
    pub const ELLIPSIS: &str = "…";
    pub const DROPDOWN_OPEN: &str = "▴";
    pub const DROPDOWN_CLOSED: &str = "▾";
}

pub mod icons_ascii {
    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    // Field.
    pub const CHIP_OPEN: &str = "<";
    pub const CHIP_CLOSE: &str = ">";
    pub const DISMISS: &str = "x";
    pub const SEARCH: &str = "?";
    pub const ELLIPSIS: &str = "...";
    pub const DROPDOWN_OPEN: &str = "^";
    pub const DROPDOWN_CLOSED: &str = "v";
}

/// Pick the unicode or ASCII variant of a token
pub fn glyph(unicode: bool, fancy: &'static str, plain: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        plain
    }
}
