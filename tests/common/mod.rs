//! Common test utilities for nested-select CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - Fixtures: reusable option lists

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
