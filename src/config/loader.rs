//! Configuration and option-list loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NestedSelectError, NestedSelectResult};
use crate::models::{SelectMode, SelectOption};

use super::types::Config;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = ".nested-select.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NestedSelectResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NestedSelectError::Toml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

/// Load from an explicit path, the project file, the user config, or defaults.
///
/// An explicit path must load; the fallbacks are skipped silently when
/// missing or broken.
pub fn load_or_default(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> NestedSelectResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            if let Ok((config, warnings)) = load_with_warnings(&project_config) {
                return Ok((with_env_overrides(config), warnings));
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            if let Ok((config, warnings)) = load_with_warnings(&user_config) {
                return Ok((with_env_overrides(config), warnings));
            }
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `~/.config/nested-select/config.toml` or the platform equivalent
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("nested-select").join("config.toml"))
}

/// Apply environment variable overrides (NESTED_SELECT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // NESTED_SELECT_MODE
    if let Some(mode) = get_env("NESTED_SELECT_MODE") {
        match mode.to_lowercase().as_str() {
            "single" => config.select.mode = SelectMode::Single,
            "multiple" | "multi" => config.select.mode = SelectMode::Multiple,
            _ => {}
        }
    }

    // NESTED_SELECT_SHOW_COUNT
    if let Some(val) = get_env("NESTED_SELECT_SHOW_COUNT") {
        config.select.show_count = is_truthy(&val);
    }

    // NESTED_SELECT_UNICODE
    if let Some(val) = get_env("NESTED_SELECT_UNICODE") {
        config.output.unicode = is_truthy(&val);
    }

    config
}

fn is_truthy(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

/// Option list files may be a bare array or a table with an `options` key
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionsFile {
    List(Vec<SelectOption>),
    Table { options: Vec<SelectOption> },
}

impl OptionsFile {
    fn into_options(self) -> Vec<SelectOption> {
        match self {
            OptionsFile::List(options) | OptionsFile::Table { options } => options,
        }
    }
}

/// Read an option list from `.json`, `.yaml`/`.yml` or `.toml`
pub fn load_options(path: &Path) -> NestedSelectResult<Vec<SelectOption>> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !matches!(extension.as_str(), "json" | "yaml" | "yml" | "toml") {
        return Err(NestedSelectError::UnsupportedFormat {
            file: path.to_path_buf(),
            extension,
        });
    }
    let content = fs::read_to_string(path)?;
    parse_options(&content, &extension, path)
}

fn parse_options(
    content: &str,
    extension: &str,
    path: &Path,
) -> NestedSelectResult<Vec<SelectOption>> {
    let parsed: OptionsFile = match extension {
        "json" => serde_json::from_str(content).map_err(|e| NestedSelectError::Json {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?,
        "yaml" | "yml" => serde_yaml_ng::from_str(content).map_err(|e| NestedSelectError::Yaml {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?,
        "toml" => toml::from_str(content).map_err(|e| NestedSelectError::Toml {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?,
        other => {
            return Err(NestedSelectError::UnsupportedFormat {
                file: path.to_path_buf(),
                extension: other.to_string(),
            })
        }
    };
    Ok(parsed.into_options())
}
