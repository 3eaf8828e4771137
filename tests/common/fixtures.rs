//! Reusable option lists.

#![allow(dead_code)]

use nested_select::SelectOption;

/// Org chart used across CLI tests
pub const TEAMS_JSON: &str = r#"[
  {"value": "eng", "label": "Engineering"},
  {"value": "be", "label": "Backend", "parentValue": "eng"},
  {"value": "fe", "label": "Frontend", "parentValue": "eng"},
  {"value": "ops", "label": "Operations"}
]"#;

pub const TEAMS_YAML: &str = r#"options:
  - value: eng
    label: Engineering
  - value: be
    label: Backend
    parentValue: eng
  - value: fe
    label: Frontend
    parentValue: eng
  - value: ops
    label: Operations
"#;

/// a -> b -> c chain
pub fn chain() -> Vec<SelectOption> {
    vec![
        SelectOption::new("a", "A"),
        SelectOption::child("b", "B", "a"),
        SelectOption::child("c", "C", "b"),
    ]
}

pub fn teams() -> Vec<SelectOption> {
    vec![
        SelectOption::new("eng", "Engineering"),
        SelectOption::child("be", "Backend", "eng"),
        SelectOption::child("fe", "Frontend", "eng"),
        SelectOption::new("ops", "Operations"),
    ]
}
