//! Scenario: Owner-Controlled Selection
//!
//! Journey: An owner keeps its own copy of the selection and pushes it
//! back through `configure`, with and without always-sync.
//!
//! Success Criteria:
//! - Always-sync makes the control follow the owner's values when they change
//! - Re-configuring with unchanged values keeps the user's picks
//! - Without it, later initial values are ignored
//! - Owner-driven changes never echo back as updates

use nested_select::{InteractionController, RecordedEvents, SelectOption, SelectProps};

use crate::common::*;

fn values(c: &InteractionController<RecordedEvents>) -> Vec<&str> {
    c.selection().iter().map(|o| o.value.as_str()).collect()
}

#[test]
fn scenario_always_sync_follows_owner() {
    let mut props = SelectProps::default().with_options(teams());
    props.should_always_sync = true;
    let mut c = InteractionController::new(props.clone(), RecordedEvents::new());

    c.toggle_option("ops");
    assert_eq!(values(&c), vec!["ops"]);
    assert_eq!(c.events().updates.len(), 1);

    // Owner rejects the change and pushes its own value
    props.initial_values = vec![SelectOption::child("be", "Backend", "eng")];
    c.configure(props.clone());
    assert_eq!(values(&c), vec!["be"]);
    assert_eq!(c.events().updates.len(), 1);

    // Same values again: nothing to do
    c.configure(props);
    assert_eq!(values(&c), vec!["be"]);
}

#[test]
fn scenario_always_sync_keeps_picks_across_unrelated_updates() {
    let mut props = SelectProps::default().with_options(teams());
    props.should_always_sync = true;
    let mut c = InteractionController::new(props.clone(), RecordedEvents::new());

    c.toggle_option("be");
    assert_eq!(values(&c), vec!["be"]);

    // New data arrives with the same initial values
    props.options.push(SelectOption::child("sre", "SRE", "ops"));
    c.configure(props.clone());
    assert_eq!(values(&c), vec!["be"]);

    // A search filter narrows the list, still the same initial values
    props.options.retain(|o| o.value != "fe");
    c.configure(props);
    assert_eq!(values(&c), vec!["be"]);
    assert_eq!(c.events().updates.len(), 1);
}

#[test]
fn scenario_initial_values_apply_once_without_sync() {
    let props = SelectProps::default()
        .with_options(teams())
        .with_initial_values(vec![SelectOption::new("ops", "Operations")]);
    let mut c = InteractionController::new(props.clone(), RecordedEvents::new());
    assert_eq!(values(&c), vec!["ops"]);

    c.toggle_option("ops");
    assert!(c.selection().is_empty());

    c.configure(props);
    assert!(c.selection().is_empty());
}

#[test]
fn scenario_locking_closes_and_blocks_edits() {
    let mut props = SelectProps::default().with_options(teams());
    let mut c = InteractionController::new(props.clone(), RecordedEvents::new());
    c.activate();
    assert!(c.is_open());

    props.is_read_only = true;
    c.configure(props);
    assert!(!c.is_open());
    assert!(c.events().listener_balanced());

    assert!(!c.activate());
    assert!(!c.toggle_option("ops"));
    assert!(c.events().updates.is_empty());
}

#[test]
fn scenario_option_list_shrinks_under_selection() {
    let mut props = SelectProps::default().with_options(teams());
    let mut c = InteractionController::new(props.clone(), RecordedEvents::new());
    c.toggle_option("ops");

    props.options.retain(|o| o.value != "ops");
    c.configure(props);

    // The chip survives and can still be dismissed
    assert_eq!(values(&c), vec!["ops"]);
    assert!(c.remove_option("ops"));
    assert!(c.selection().is_empty());
}
