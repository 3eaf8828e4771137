//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::models::{SelectMode, SelectOption};

/// Every input the control accepts, with its default.
///
/// This is the unit passed to `InteractionController::configure`. The
/// same struct is read from the `[select]` table of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectProps {
    #[serde(default)]
    pub options: Vec<SelectOption>,

    #[serde(default)]
    pub label: String,

    #[serde(default, deserialize_with = "deserialize_initial_values")]
    pub initial_values: Vec<SelectOption>,

    #[serde(default)]
    pub mode: SelectMode,

    #[serde(default)]
    pub show_search: bool,

    #[serde(default)]
    pub is_disabled: bool,

    #[serde(default)]
    pub is_read_only: bool,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default = "default_true")]
    pub are_parents_selectable: bool,

    #[serde(default)]
    pub width: Option<u16>,

    /// Maximum number of dropdown rows shown at once
    #[serde(default)]
    pub height: Option<u16>,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub show_count: bool,

    #[serde(default)]
    pub should_always_sync: bool,

    #[serde(default)]
    pub hide_parent_checkbox: bool,

    #[serde(default = "default_true")]
    pub implicitly_select_children: bool,
}

impl Default for SelectProps {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            label: String::new(),
            initial_values: Vec::new(),
            mode: SelectMode::Multiple,
            show_search: false,
            is_disabled: false,
            is_read_only: false,
            is_required: false,
            are_parents_selectable: true,
            width: None,
            height: None,
            placeholder: default_placeholder(),
            show_count: false,
            should_always_sync: false,
            hide_parent_checkbox: false,
            implicitly_select_children: true,
        }
    }
}

impl SelectProps {
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_initial_values(mut self, initial: Vec<SelectOption>) -> Self {
        self.initial_values = initial;
        self
    }

    pub fn with_mode(mut self, mode: SelectMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check if user interaction is blocked
    pub fn is_locked(&self) -> bool {
        self.is_disabled || self.is_read_only
    }

    /// Fill in initial values given only by value from the option list.
    ///
    /// Values not in the list are kept as-is; they are a caller concern.
    pub fn resolve_initial_values(&mut self) {
        for initial in &mut self.initial_values {
            if initial.label.is_empty() {
                if let Some(found) = self.options.iter().rev().find(|o| o.value == initial.value) {
                    *initial = found.clone();
                }
            }
        }
    }
}

/// Initial values accept bare strings or full option tables:
///   initial_values = ["a", { value = "b", label = "B" }]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum InitialValueDe {
    Value(String),
    Option(SelectOption),
}

fn deserialize_initial_values<'de, D>(deserializer: D) -> Result<Vec<SelectOption>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<InitialValueDe>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| match v {
            InitialValueDe::Value(value) => SelectOption::new(value, ""),
            InitialValueDe::Option(option) => option,
        })
        .collect())
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub unicode: bool,

    #[serde(default)]
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            json: false,
        }
    }
}

/// Full configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub select: SelectProps,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    "Select options".to_string()
}
