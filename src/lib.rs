//! nested-select - hierarchical multi-select control
//!
//! Takes a flat option list where each option may name a parent, and
//! maintains a selection over the resulting forest: selecting a parent
//! selects its descendants, partially selected parents are reported as
//! such, and every settled change reaches the owner as one snapshot.

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod selection;
pub mod tree;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, SelectProps};
pub use controller::{ControlState, FieldDisplay, InteractionController, SelectAction, VisibleRow};
pub use error::{NestedSelectError, NestedSelectResult};
pub use events::{NoopEvents, RecordedEvents, SelectEvents};
pub use models::{SelectMode, SelectOption, SelectionState};
pub use selection::SelectionStore;
pub use tree::OptionTree;
