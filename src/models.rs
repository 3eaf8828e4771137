//! Core data structures for nested-select

use serde::{Deserialize, Serialize};

/// A selectable node in the option forest.
///
/// Options arrive as a flat list; hierarchy is expressed only through
/// `parent_value`. An option whose parent is not in the list is kept but
/// is unreachable from the roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique identity of the option
    pub value: String,

    /// Display text
    #[serde(default)]
    pub label: String,

    /// Value of the parent option, `None` for a root
    #[serde(
        default,
        alias = "parentValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_value: Option<String>,

    /// Children may exist even if none are loaded yet
    #[serde(default, alias = "isParent", skip_serializing_if = "is_false")]
    pub is_parent: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl SelectOption {
    /// Create a root option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            parent_value: None,
            is_parent: false,
        }
    }

    /// Create an option nested under `parent`
    pub fn child(
        value: impl Into<String>,
        label: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            parent_value: Some(parent.into()),
            is_parent: false,
        }
    }

    /// Mark the option as a parent whose children load on demand
    pub fn with_lazy_children(mut self) -> Self {
        self.is_parent = true;
        self
    }

    /// Check if this option has no parent
    pub fn is_root(&self) -> bool {
        self.parent_value.is_none()
    }

    /// Label to show, falling back to the value when no label was given
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.value
        } else {
            &self.label
        }
    }
}

/// Selection cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    /// At most one option selected; selecting closes the control
    Single,
    /// Any number of options selected
    #[default]
    Multiple,
}

impl SelectMode {
    pub fn is_single(self) -> bool {
        self == SelectMode::Single
    }
}

/// Selection state of a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Option is selected (●)
    Selected,
    /// Option and all its descendants are unselected (○)
    Unselected,
    /// Option is unselected but some descendants are selected (◐)
    Partial,
}
