//! Callbacks the control emits to its owner.

use crate::models::SelectOption;

/// Consumer side of the control.
///
/// Every method defaults to a no-op so owners implement only what they
/// need. Calls are fire-and-forget: nothing returned is read back, and
/// new data reaches the control through a later `configure`.
pub trait SelectEvents {
    /// Fired once per settled selection change with the full snapshot
    fn on_update(&mut self, _selection: &[SelectOption]) {}

    /// Raw search text, forwarded on every keystroke
    fn on_search(&mut self, _query: &str) {}

    /// A parent with unloaded children was expanded
    fn load_data(&mut self, _option: &SelectOption) {}

    /// Start listening for clicks outside the control
    fn attach_outside_click(&mut self) {}

    /// Stop listening for clicks outside the control
    fn detach_outside_click(&mut self) {}
}

/// Owner that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl SelectEvents for NoopEvents {}

impl<T: SelectEvents + ?Sized> SelectEvents for &mut T {
    fn on_update(&mut self, selection: &[SelectOption]) {
        (**self).on_update(selection);
    }

    fn on_search(&mut self, query: &str) {
        (**self).on_search(query);
    }

    fn load_data(&mut self, option: &SelectOption) {
        (**self).load_data(option);
    }

    fn attach_outside_click(&mut self) {
        (**self).attach_outside_click();
    }

    fn detach_outside_click(&mut self) {
        (**self).detach_outside_click();
    }
}

/// Records every event; used by tests and the non-interactive CLI path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedEvents {
    pub updates: Vec<Vec<SelectOption>>,
    pub searches: Vec<String>,
    pub loads: Vec<String>,
    pub attached: usize,
    pub detached: usize,
}

impl RecordedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values of the most recent update, if any
    pub fn last_update_values(&self) -> Option<Vec<&str>> {
        self.updates
            .last()
            .map(|u| u.iter().map(|o| o.value.as_str()).collect())
    }

    /// Check if every attach was matched by a detach
    pub fn listener_balanced(&self) -> bool {
        self.attached == self.detached
    }
}

impl SelectEvents for RecordedEvents {
    fn on_update(&mut self, selection: &[SelectOption]) {
        self.updates.push(selection.to_vec());
    }

    fn on_search(&mut self, query: &str) {
        self.searches.push(query.to_string());
    }

    fn load_data(&mut self, option: &SelectOption) {
        self.loads.push(option.value.clone());
    }

    fn attach_outside_click(&mut self) {
        self.attached += 1;
    }

    fn detach_outside_click(&mut self) {
        self.detached += 1;
    }
}
