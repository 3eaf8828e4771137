//! Ordered, value-unique selection set.
//!
//! Every mutation reports whether the set changed so the owner can fire
//! exactly one notification per settled change.

use std::collections::HashSet;

use crate::models::{SelectMode, SelectOption};

/// Currently selected options, unique by `value`, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    mode: SelectMode,
    selected: Vec<SelectOption>,
}

impl SelectionStore {
    /// Create an empty store
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    /// Create a store seeded with initial values
    pub fn with_initial(mode: SelectMode, initial: &[SelectOption]) -> Self {
        let mut store = Self::new(mode);
        store.replace(initial);
        store
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Switch cardinality. Going to single keeps only the first selection.
    pub fn set_mode(&mut self, mode: SelectMode) -> bool {
        self.mode = mode;
        if mode.is_single() && self.selected.len() > 1 {
            self.selected.truncate(1);
            return true;
        }
        false
    }

    /// Remove `option` if selected, otherwise select it.
    ///
    /// In single mode a selecting toggle first drops every prior selection.
    pub fn toggle(&mut self, option: &SelectOption) -> bool {
        if let Some(pos) = self.position(&option.value) {
            self.selected.remove(pos);
        } else {
            if self.mode.is_single() {
                self.selected.clear();
            }
            self.selected.push(option.clone());
        }
        true
    }

    /// Append the options not already selected, in input order
    pub fn add_many(&mut self, options: &[SelectOption]) -> bool {
        let mut present: HashSet<String> = self.values().map(str::to_string).collect();
        let before = self.selected.len();
        for option in options {
            if present.insert(option.value.clone()) {
                self.selected.push(option.clone());
            }
        }
        self.selected.len() != before
    }

    /// Remove every selected option whose value appears in `options`
    pub fn remove_many(&mut self, options: &[SelectOption]) -> bool {
        let doomed: HashSet<&str> = options.iter().map(|o| o.value.as_str()).collect();
        let before = self.selected.len();
        self.selected.retain(|o| !doomed.contains(o.value.as_str()));
        self.selected.len() != before
    }

    /// Remove every selection
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Set the selection to exactly `options`; later duplicates are dropped
    pub fn replace(&mut self, options: &[SelectOption]) -> bool {
        let mut seen: HashSet<&str> = HashSet::new();
        let next: Vec<SelectOption> = options
            .iter()
            .filter(|o| seen.insert(o.value.as_str()))
            .cloned()
            .collect();
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.selected.iter().position(|o| o.value == value)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected values in order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(|o| o.value.as_str())
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.selected
    }

    /// Owned copy of the current selection
    pub fn snapshot(&self) -> Vec<SelectOption> {
        self.selected.clone()
    }
}
