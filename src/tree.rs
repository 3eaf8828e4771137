//! Parent→children index over a flat option list.
//!
//! The tree is derived data: it is rebuilt whenever the option list
//! changes and never mutated in place.

use std::collections::{HashMap, HashSet};

use crate::models::SelectOption;

/// Bucket key: `None` is the no-parent sentinel holding the roots
pub type ParentKey = Option<String>;

/// Group options by parent key, preserving input order inside each bucket.
///
/// Every option lands in exactly one bucket. Options whose parent is not
/// in the list still get their own bucket; nothing reaches it from the
/// roots.
pub fn build(options: &[SelectOption]) -> HashMap<ParentKey, Vec<SelectOption>> {
    let mut buckets: HashMap<ParentKey, Vec<SelectOption>> = HashMap::new();
    for option in options {
        buckets
            .entry(option.parent_value.clone())
            .or_default()
            .push(option.clone());
    }
    buckets
}

/// Read-only index over an option forest
#[derive(Debug, Clone, Default)]
pub struct OptionTree {
    options: Vec<SelectOption>,
    children: HashMap<ParentKey, Vec<SelectOption>>,
    by_value: HashMap<String, usize>,
}

impl OptionTree {
    /// Build the index from a flat option list
    pub fn new(options: Vec<SelectOption>) -> Self {
        let children = build(&options);
        // Later duplicates overwrite earlier ones
        let by_value = options
            .iter()
            .enumerate()
            .map(|(i, o)| (o.value.clone(), i))
            .collect();
        Self {
            options,
            children,
            by_value,
        }
    }

    /// Source options in their original order
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options without a parent, in input order
    pub fn roots(&self) -> &[SelectOption] {
        self.bucket(&None)
    }

    /// Direct children of `value`, in input order
    pub fn children(&self, value: &str) -> &[SelectOption] {
        self.bucket(&Some(value.to_string()))
    }

    fn bucket(&self, key: &ParentKey) -> &[SelectOption] {
        self.children.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if any loaded option names `value` as its parent
    pub fn has_children(&self, value: &str) -> bool {
        !self.children(value).is_empty()
    }

    /// Look up an option by value
    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.by_value.get(value).map(|&i| &self.options[i])
    }

    pub fn contains(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    /// Check if the option has children, loaded or not
    pub fn is_parent(&self, option: &SelectOption) -> bool {
        option.is_parent || self.has_children(&option.value)
    }

    /// All transitive descendants of `value` in depth-first pre-order.
    ///
    /// Each value is visited at most once, so a cyclic parent chain
    /// terminates instead of looping.
    pub fn descendants(&self, value: &str) -> Vec<SelectOption> {
        let mut out = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(value);
        let mut stack: Vec<&SelectOption> = self.children(value).iter().rev().collect();
        while let Some(option) = stack.pop() {
            if !seen.insert(option.value.as_str()) {
                continue;
            }
            out.push(option.clone());
            stack.extend(self.children(&option.value).iter().rev());
        }
        out
    }

    /// Ancestor values of `value`, nearest first
    pub fn ancestors(&self, value: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(value.to_string());
        let mut current = self.get(value).and_then(|o| o.parent_value.clone());
        while let Some(parent) = current {
            if !seen.insert(parent.clone()) {
                break;
            }
            current = self.get(&parent).and_then(|o| o.parent_value.clone());
            out.push(parent);
        }
        out
    }
}
