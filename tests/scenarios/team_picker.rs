//! Scenario: Picking Teams
//!
//! Journey: A user opens the picker, selects a whole department, drops
//! one team from it, and dismisses a chip.
//!
//! Success Criteria:
//! - Selecting a parent selects everything under it
//! - Dropping a child leaves the parent and its other children selected
//! - A parent with only some children selected shows as partial
//! - One update per user action

use nested_select::{
    ControlState, FieldDisplay, InteractionController, RecordedEvents, SelectAction, SelectProps,
    SelectionState,
};

use crate::common::*;

fn values(c: &InteractionController<RecordedEvents>) -> Vec<&str> {
    c.selection().iter().map(|o| o.value.as_str()).collect()
}

#[test]
fn scenario_select_department_then_drop_a_team() {
    let props = SelectProps::default().with_options(teams());
    let mut c = InteractionController::new(props, RecordedEvents::new());

    // Step 1: open
    assert!(c.activate());
    assert_eq!(c.state(), ControlState::Open);
    assert_eq!(c.events().attached, 1);

    // Step 2: select Engineering with the cursor on row 0
    c.handle_action(SelectAction::Toggle);
    assert_eq!(values(&c), vec!["eng", "be", "fe"]);
    assert_eq!(c.events().updates.len(), 1);

    // Step 3: expand and drop Frontend; Engineering stays selected
    c.handle_action(SelectAction::Expand);
    assert!(c.is_expanded("eng"));
    c.handle_action(SelectAction::Down);
    c.handle_action(SelectAction::Down);
    assert_eq!(c.current_row().map(|r| r.value.as_str()), Some("fe"));
    c.handle_action(SelectAction::Toggle);
    assert_eq!(values(&c), vec!["eng", "be"]);
    assert_eq!(c.events().updates.len(), 2);
    assert_eq!(c.visible_rows()[2].state, SelectionState::Unselected);

    // Step 4: dismiss the Engineering chip, which takes its team along
    assert_eq!(
        c.field_display(),
        FieldDisplay::Chips(vec!["Engineering".into(), "Backend".into()])
    );
    assert!(c.remove_option("eng"));
    assert!(c.selection().is_empty());
    assert_eq!(c.events().updates.len(), 3);

    // Step 5: pick Backend alone and see Engineering as partial
    c.toggle_option("be");
    assert_eq!(c.visible_rows()[0].state, SelectionState::Partial);
    assert!(c.remove_option("be"));
    assert_eq!(c.events().updates.len(), 5);

    // Step 6: click outside
    assert!(c.outside_click());
    assert_eq!(c.state(), ControlState::Closed);
    assert!(c.events().listener_balanced());
}

#[test]
fn scenario_chain_fan_out_and_clear() {
    let props = SelectProps::default().with_options(chain());
    let mut c = InteractionController::new(props, RecordedEvents::new());
    c.activate();

    c.toggle_option("a");
    assert_eq!(values(&c), vec!["a", "b", "c"]);
    assert_eq!(c.events().last_update_values(), Some(vec!["a", "b", "c"]));

    c.clear();
    assert!(c.selection().is_empty());
    assert_eq!(c.state(), ControlState::Closed);
    assert_eq!(c.events().updates.len(), 2);
    assert_eq!(c.events().last_update_values(), Some(vec![]));
    assert!(c.events().listener_balanced());
}

#[test]
fn scenario_leaf_only_picking() {
    let mut props = SelectProps::default().with_options(teams());
    props.are_parents_selectable = false;
    let mut c = InteractionController::new(props, RecordedEvents::new());
    c.activate();

    // Toggle on an unselectable parent expands it instead
    c.handle_action(SelectAction::Toggle);
    assert!(c.selection().is_empty());
    assert!(c.is_expanded("eng"));

    c.handle_action(SelectAction::SelectAll);
    assert_eq!(values(&c), vec!["be", "fe", "ops"]);
    assert_eq!(c.events().updates.len(), 1);
}

#[test]
fn scenario_single_mode_closes_on_pick() {
    let props = SelectProps::default()
        .with_options(teams())
        .with_mode(nested_select::SelectMode::Single);
    let mut c = InteractionController::new(props, RecordedEvents::new());

    c.activate();
    c.toggle_option("ops");
    assert_eq!(values(&c), vec!["ops"]);
    assert!(!c.is_open());

    c.activate();
    c.toggle_option("eng");
    // No fan-out in single mode
    assert_eq!(values(&c), vec!["eng"]);
    assert_eq!(c.events().updates.len(), 2);
    assert!(c.events().listener_balanced());
}
