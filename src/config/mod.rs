//! Configuration for nested-select
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NESTED_SELECT_*)
//! 3. `--config` file, else project config (./.nested-select.toml)
//! 4. User config (~/.config/nested-select/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_options, load_or_default, load_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, SelectProps};
