//! Interaction state for the nested select control.
//!
//! The controller owns the transient UI state (open/closed, search text,
//! expanded nodes, cursor) and is the only writer of the selection. User
//! events come in through the public methods or [`SelectAction`]s; every
//! settled selection change is reported to the [`SelectEvents`] owner
//! exactly once.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::config::SelectProps;
use crate::events::{NoopEvents, SelectEvents};
use crate::models::{SelectOption, SelectionState};
use crate::selection::SelectionStore;
use crate::tree::OptionTree;

/// Whether the dropdown is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Closed,
    Open,
}

/// One row of the expanded option tree, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Option value this row draws
    pub value: String,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Display label
    pub label: String,
    /// Selection state, `Partial` for parents with some selected descendants
    pub state: SelectionState,
    /// Whether this node is expanded
    pub expanded: bool,
    /// Whether this node has or may load children
    pub is_parent: bool,
    /// Whether toggling this row changes the selection
    pub selectable: bool,
}

/// What the collapsed field shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDisplay {
    /// Nothing selected
    Placeholder(String),
    /// One dismissible chip per selected option
    Chips(Vec<String>),
    /// Single badge with the number of selections
    Count(usize),
}

/// Control action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle the option under the cursor
    Toggle,
    /// Expand the node under the cursor
    Expand,
    /// Collapse the node under the cursor
    Collapse,
    /// Select every selectable option
    SelectAll,
    /// Clear the selection and close
    Clear,
    /// Open or close the dropdown
    Activate,
    /// Close the dropdown, or leave when already closed
    Dismiss,
    /// Append a character to the search text
    SearchInput(char),
    /// Delete the last search character
    SearchBackspace,
    /// Confirm the selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Nested select control state machine
pub struct InteractionController<E: SelectEvents = NoopEvents> {
    props: SelectProps,
    tree: OptionTree,
    store: SelectionStore,
    state: ControlState,
    search: String,
    expanded: HashSet<String>,
    cursor: usize,
    scroll_offset: usize,
    rows: Vec<VisibleRow>,
    listening: bool,
    events: E,
}

impl InteractionController<NoopEvents> {
    /// Create a controller that reports to nobody
    pub fn detached(props: SelectProps) -> Self {
        Self::new(props, NoopEvents)
    }
}

impl<E: SelectEvents> InteractionController<E> {
    /// Create a controller seeded with `props.initial_values`
    pub fn new(props: SelectProps, events: E) -> Self {
        let tree = OptionTree::new(props.options.clone());
        let store = SelectionStore::with_initial(props.mode, &props.initial_values);
        let mut controller = Self {
            props,
            tree,
            store,
            state: ControlState::Closed,
            search: String::new(),
            expanded: HashSet::new(),
            cursor: 0,
            scroll_offset: 0,
            rows: Vec::new(),
            listening: false,
            events,
        };
        controller.rebuild_rows();
        controller
    }

    /// Apply new inputs.
    ///
    /// Rebuilds the option tree when the list changed. The selection is
    /// left alone unless `should_always_sync` is set and the initial values
    /// themselves changed since the last call; re-configuring with the same
    /// initial values (new options, a search filter) keeps user picks.
    /// Caller-driven changes do not fire `on_update`.
    pub fn configure(&mut self, props: SelectProps) {
        if props.options != self.props.options {
            debug!(options = props.options.len(), "rebuilding option tree");
            self.tree = OptionTree::new(props.options.clone());
        }

        if self.store.set_mode(props.mode) {
            debug!("selection truncated for single mode");
        }

        if props.should_always_sync
            && props.initial_values != self.props.initial_values
            && props.initial_values.as_slice() != self.store.as_slice()
        {
            debug!(
                values = props.initial_values.len(),
                "syncing selection to initial values"
            );
            self.store.replace(&props.initial_values);
        }

        self.props = props;

        if self.props.is_locked() && self.is_open() {
            self.close();
        }

        self.rebuild_rows();
    }

    pub fn props(&self) -> &SelectProps {
        &self.props
    }

    pub fn tree(&self) -> &OptionTree {
        &self.tree
    }

    /// Current selection snapshot
    pub fn selection(&self) -> &[SelectOption] {
        self.store.as_slice()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.store.contains(value)
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ControlState::Open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    // ------------------------------------------------------------------
    // Open / closed
    // ------------------------------------------------------------------

    /// Open when closed, close when open. Locked controls never open.
    pub fn activate(&mut self) -> bool {
        match self.state {
            ControlState::Closed => {
                if self.props.is_locked() {
                    debug!("activate ignored on locked control");
                    return false;
                }
                self.open();
            }
            ControlState::Open => self.close(),
        }
        true
    }

    /// A click landed outside the control
    pub fn outside_click(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    fn open(&mut self) {
        self.state = ControlState::Open;
        if !self.listening {
            self.events.attach_outside_click();
            self.listening = true;
        }
        debug!("control opened");
    }

    /// Close the dropdown and release the outside-click listener
    pub fn close(&mut self) {
        self.state = ControlState::Closed;
        self.release_listener();
        debug!("control closed");
    }

    fn release_listener(&mut self) {
        if self.listening {
            self.events.detach_outside_click();
            self.listening = false;
        }
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Replace the search text and forward it verbatim
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.events.on_search(&self.search);
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.search);
        query.push(c);
        self.set_search(query);
    }

    pub fn pop_search_char(&mut self) {
        let mut query = std::mem::take(&mut self.search);
        query.pop();
        self.set_search(query);
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    fn is_selectable(&self, option: &SelectOption) -> bool {
        !self.tree.is_parent(option) || self.props.are_parents_selectable
    }

    fn notify(&mut self) {
        trace!(selected = self.store.len(), "selection updated");
        self.events.on_update(self.store.as_slice());
    }

    /// Select or deselect the option with `value`.
    ///
    /// Parents fan out to their descendants when implicit child selection
    /// is on. In single mode a selection closes the control.
    pub fn toggle_option(&mut self, value: &str) -> bool {
        if self.props.is_locked() {
            return false;
        }
        let Some(option) = self.tree.get(value).cloned() else {
            debug!(value, "toggle ignored for unknown option");
            return false;
        };
        if !self.is_selectable(&option) {
            debug!(value, "toggle ignored for unselectable parent");
            return false;
        }

        let changed = if self.props.mode.is_single() {
            self.store.toggle(&option)
        } else if self.store.contains(value) {
            let batch = self.deselect_batch(&option);
            self.store.remove_many(&batch)
        } else {
            let batch = self.select_batch(&option);
            self.store.add_many(&batch)
        };

        if changed {
            self.notify();
            self.rebuild_rows();
        }
        if self.props.mode.is_single() && self.store.contains(value) && self.is_open() {
            self.close();
        }
        changed
    }

    fn select_batch(&self, option: &SelectOption) -> Vec<SelectOption> {
        let mut batch = vec![option.clone()];
        if self.props.implicitly_select_children {
            batch.extend(
                self.tree
                    .descendants(&option.value)
                    .into_iter()
                    .filter(|o| self.is_selectable(o)),
            );
        }
        trace!(value = %option.value, batch = batch.len(), "select fan-out");
        batch
    }

    fn deselect_batch(&self, option: &SelectOption) -> Vec<SelectOption> {
        let mut batch = vec![option.clone()];
        if self.props.implicitly_select_children {
            batch.extend(self.tree.descendants(&option.value));
        }
        trace!(value = %option.value, batch = batch.len(), "deselect fan-out");
        batch
    }

    /// Dismiss a chip. Works for selected values missing from the option list.
    pub fn remove_option(&mut self, value: &str) -> bool {
        if self.props.is_locked() {
            return false;
        }
        let Some(option) = self.store.as_slice().iter().find(|o| o.value == value).cloned() else {
            return false;
        };
        let batch = self.deselect_batch(&option);
        let changed = self.store.remove_many(&batch);
        if changed {
            self.notify();
            self.rebuild_rows();
        }
        changed
    }

    /// Select every selectable option as one change. Multi-select only.
    pub fn select_all(&mut self) -> bool {
        if self.props.is_locked() || self.props.mode.is_single() {
            return false;
        }
        let batch: Vec<SelectOption> = self
            .tree
            .options()
            .iter()
            .filter(|o| self.is_selectable(o))
            .cloned()
            .collect();
        let changed = self.store.add_many(&batch);
        if changed {
            self.notify();
            self.rebuild_rows();
        }
        changed
    }

    /// Empty the selection and close, with exactly one notification
    pub fn clear(&mut self) {
        self.store.clear();
        self.close();
        self.notify();
        self.rebuild_rows();
    }

    // ------------------------------------------------------------------
    // Expansion
    // ------------------------------------------------------------------

    /// Expand a parent, requesting its children if none are loaded
    pub fn expand(&mut self, value: &str) -> bool {
        let Some(option) = self.tree.get(value).cloned() else {
            return false;
        };
        if !self.tree.is_parent(&option) || self.expanded.contains(value) {
            return false;
        }
        self.expanded.insert(option.value.clone());
        if !self.tree.has_children(value) {
            debug!(value, "requesting children");
            self.events.load_data(&option);
        }
        self.rebuild_rows();
        true
    }

    pub fn collapse(&mut self, value: &str) -> bool {
        let removed = self.expanded.remove(value);
        if removed {
            self.rebuild_rows();
        }
        removed
    }

    pub fn toggle_expanded(&mut self, value: &str) -> bool {
        if self.expanded.contains(value) {
            self.collapse(value)
        } else {
            self.expand(value)
        }
    }

    pub fn is_expanded(&self, value: &str) -> bool {
        self.expanded.contains(value)
    }

    // ------------------------------------------------------------------
    // Rows and cursor
    // ------------------------------------------------------------------

    /// Rebuild the flattened row list
    fn rebuild_rows(&mut self) {
        let selected: HashSet<&str> = self.store.values().collect();
        let mut rows = Vec::new();
        let mut path: HashSet<&str> = HashSet::new();
        for root in self.tree.roots() {
            self.flatten(root, 0, &selected, &mut path, &mut rows);
        }
        self.rows = rows;
        // Ensure cursor is within bounds
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
        self.ensure_cursor_visible();
    }

    fn flatten<'a>(
        &'a self,
        option: &'a SelectOption,
        depth: usize,
        selected: &HashSet<&str>,
        path: &mut HashSet<&'a str>,
        rows: &mut Vec<VisibleRow>,
    ) {
        if !path.insert(option.value.as_str()) {
            return;
        }
        let is_parent = self.tree.is_parent(option);
        let expanded = self.expanded.contains(&option.value);
        let state = if selected.contains(option.value.as_str()) {
            SelectionState::Selected
        } else if is_parent
            && self
                .tree
                .descendants(&option.value)
                .iter()
                .any(|d| selected.contains(d.value.as_str()))
        {
            SelectionState::Partial
        } else {
            SelectionState::Unselected
        };

        rows.push(VisibleRow {
            value: option.value.clone(),
            depth,
            label: option.display_label().to_string(),
            state,
            expanded,
            is_parent,
            selectable: !self.props.is_locked() && self.is_selectable(option),
        });

        if expanded {
            for child in self.tree.children(&option.value) {
                self.flatten(child, depth + 1, selected, path, rows);
            }
        }
        path.remove(option.value.as_str());
    }

    /// All rows of the expanded tree
    pub fn visible_rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    /// Rows inside the scroll window set by `height`
    pub fn window(&self) -> &[VisibleRow] {
        let end = match self.props.height {
            Some(h) if h > 0 => (self.scroll_offset + h as usize).min(self.rows.len()),
            _ => self.rows.len(),
        };
        &self.rows[self.scroll_offset.min(end)..end]
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `pos`, clamped to the last row
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.rows.len().saturating_sub(1));
        self.ensure_cursor_visible();
    }

    /// Row under the cursor
    pub fn current_row(&self) -> Option<&VisibleRow> {
        self.rows.get(self.cursor)
    }

    fn ensure_cursor_visible(&mut self) {
        let Some(height) = self.props.height.filter(|h| *h > 0).map(usize::from) else {
            self.scroll_offset = 0;
            return;
        };
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        let max_offset = self.rows.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// What the collapsed field shows
    pub fn field_display(&self) -> FieldDisplay {
        if self.store.is_empty() {
            FieldDisplay::Placeholder(self.props.placeholder.clone())
        } else if self.props.show_count {
            FieldDisplay::Count(self.store.len())
        } else {
            FieldDisplay::Chips(
                self.store
                    .as_slice()
                    .iter()
                    .map(|o| o.display_label().to_string())
                    .collect(),
            )
        }
    }

    /// Handle a control action. Returns true when the interaction is over.
    pub fn handle_action(&mut self, action: SelectAction) -> bool {
        match action {
            SelectAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.ensure_cursor_visible();
                }
                false
            }
            SelectAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                    self.ensure_cursor_visible();
                }
                false
            }
            SelectAction::Toggle => {
                if let Some(row) = self.current_row().cloned() {
                    if row.selectable {
                        self.toggle_option(&row.value);
                    } else if row.is_parent {
                        self.toggle_expanded(&row.value);
                    }
                }
                false
            }
            SelectAction::Expand => {
                if let Some(value) = self.current_row().map(|r| r.value.clone()) {
                    self.expand(&value);
                }
                false
            }
            SelectAction::Collapse => {
                if let Some(row) = self.current_row().cloned() {
                    if row.expanded {
                        self.collapse(&row.value);
                    } else {
                        self.move_cursor_to_parent(&row.value);
                    }
                }
                false
            }
            SelectAction::SelectAll => {
                self.select_all();
                false
            }
            SelectAction::Clear => {
                self.clear();
                false
            }
            SelectAction::Activate => {
                self.activate();
                false
            }
            SelectAction::Dismiss => {
                if self.is_open() {
                    self.close();
                    false
                } else {
                    true
                }
            }
            SelectAction::SearchInput(c) => {
                if self.props.show_search {
                    self.push_search_char(c);
                }
                false
            }
            SelectAction::SearchBackspace => {
                if self.props.show_search && !self.search.is_empty() {
                    self.pop_search_char();
                }
                false
            }
            SelectAction::Confirm => true,
            SelectAction::Quit => true,
        }
    }

    fn move_cursor_to_parent(&mut self, value: &str) {
        let parent = self.tree.get(value).and_then(|o| o.parent_value.clone());
        if let Some(parent) = parent {
            if let Some(pos) = self.rows.iter().position(|r| r.value == parent) {
                self.cursor = pos;
                self.ensure_cursor_visible();
            }
        }
    }
}

impl<E: SelectEvents> Drop for InteractionController<E> {
    fn drop(&mut self) {
        self.release_listener();
    }
}
