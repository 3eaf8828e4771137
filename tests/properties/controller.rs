//! Property tests for the interaction controller.

use std::collections::HashSet;

use proptest::prelude::*;

use nested_select::{
    InteractionController, RecordedEvents, SelectAction, SelectMode, SelectOption, SelectProps,
};

fn forest() -> impl Strategy<Value = Vec<SelectOption>> {
    (1usize..10).prop_flat_map(|n| {
        proptest::collection::vec(proptest::option::of(0..n), n).prop_map(|parents| {
            parents
                .into_iter()
                .enumerate()
                .map(|(i, parent)| SelectOption {
                    value: format!("v{i}"),
                    label: format!("Option {i}"),
                    // Only point backwards so the forest is acyclic
                    parent_value: parent.filter(|p| *p < i).map(|p| format!("v{p}")),
                    is_parent: false,
                })
                .collect()
        })
    })
}

fn action() -> impl Strategy<Value = SelectAction> {
    prop_oneof![
        Just(SelectAction::Up),
        Just(SelectAction::Down),
        Just(SelectAction::Toggle),
        Just(SelectAction::Expand),
        Just(SelectAction::Collapse),
        Just(SelectAction::SelectAll),
        Just(SelectAction::Clear),
        Just(SelectAction::Activate),
        Just(SelectAction::Dismiss),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a toggle notifies exactly when it reports a change.
    #[test]
    fn property_one_notification_per_change(
        options in forest(),
        picks in proptest::collection::vec(0usize..10, 0..20),
        single in any::<bool>(),
    ) {
        let mode = if single { SelectMode::Single } else { SelectMode::Multiple };
        let props = SelectProps::default().with_options(options.clone()).with_mode(mode);
        let mut c = InteractionController::new(props, RecordedEvents::new());

        for pick in picks {
            let value = &options[pick % options.len()].value;
            let before = c.events().updates.len();
            let changed = c.toggle_option(value);
            prop_assert_eq!(c.events().updates.len(), before + usize::from(changed));
            if changed {
                prop_assert_eq!(c.events().updates.last().map(Vec::as_slice), Some(c.selection()));
            }

            let unique: HashSet<&str> = c.selection().iter().map(|o| o.value.as_str()).collect();
            prop_assert_eq!(unique.len(), c.selection().len());
            if single {
                prop_assert!(c.selection().len() <= 1);
            }
        }
    }

    /// PROPERTY: toggling the same option twice returns the selection to its
    /// original content. When nothing in the option's subtree was selected,
    /// the order comes back too.
    #[test]
    fn property_double_toggle_restores_content(
        options in forest(),
        seed_picks in proptest::collection::vec(0usize..10, 0..8),
        target in 0usize..10,
    ) {
        let props = SelectProps::default().with_options(options.clone());
        let mut c = InteractionController::new(props, RecordedEvents::new());
        for pick in seed_picks {
            c.toggle_option(&options[pick % options.len()].value);
        }

        let target = options[target % options.len()].value.clone();
        let mut subtree: Vec<String> = vec![target.clone()];
        subtree.extend(c.tree().descendants(&target).into_iter().map(|o| o.value));
        let selected_in_subtree = subtree.iter().filter(|v| c.is_selected(v)).count();

        let before = c.selection().to_vec();
        c.toggle_option(&target);
        c.toggle_option(&target);

        if selected_in_subtree == 0 {
            prop_assert_eq!(c.selection(), before.as_slice());
        } else if selected_in_subtree == subtree.len() {
            let before: HashSet<&str> = before.iter().map(|o| o.value.as_str()).collect();
            let after: HashSet<&str> = c.selection().iter().map(|o| o.value.as_str()).collect();
            prop_assert_eq!(before, after);
        }
    }

    /// PROPERTY: deselecting a child never removes anything outside its subtree.
    #[test]
    fn property_deselect_stays_inside_subtree(
        options in forest(),
        seed_picks in proptest::collection::vec(0usize..10, 0..8),
        target in 0usize..10,
    ) {
        let props = SelectProps::default().with_options(options.clone());
        let mut c = InteractionController::new(props, RecordedEvents::new());
        for pick in seed_picks {
            c.toggle_option(&options[pick % options.len()].value);
        }
        let target = options[target % options.len()].value.clone();
        prop_assume!(c.is_selected(&target));

        let mut subtree: HashSet<String> = HashSet::from([target.clone()]);
        subtree.extend(c.tree().descendants(&target).into_iter().map(|o| o.value));
        let outside_before: Vec<String> = c
            .selection()
            .iter()
            .filter(|o| !subtree.contains(&o.value))
            .map(|o| o.value.clone())
            .collect();

        c.toggle_option(&target);
        let after: Vec<String> = c.selection().iter().map(|o| o.value.clone()).collect();
        prop_assert_eq!(after, outside_before);
    }

    /// PROPERTY: the outside-click listener is attached only while open and
    /// always released once the controller is gone.
    #[test]
    fn property_listener_tracks_open_state(
        options in forest(),
        actions in proptest::collection::vec(action(), 0..40),
    ) {
        let mut events = RecordedEvents::new();
        {
            let props = SelectProps::default().with_options(options);
            let mut c = InteractionController::new(props, &mut events);
            for action in actions {
                c.handle_action(action);
                let live = c.events().attached - c.events().detached;
                prop_assert_eq!(live, usize::from(c.is_open()));
            }
        }
        prop_assert!(events.listener_balanced());
    }
}
