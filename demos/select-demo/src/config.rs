//! Loading options and keymaps from disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tui_select::{default_keymap, Keybindings, KeybindingsError, SelectCommand, SelectOption};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid options file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid keymap: {0}")]
    Keymap(#[from] KeybindingsError),
}

const DEFAULT_OPTIONS: &[&str] = &[
    "Apple",
    "Banana",
    "Cherry",
    "Durian",
    "Elderberry",
    "Fig",
    "Grape",
    "Honeydew",
    "Kiwi",
    "Lemon",
];

/// Built-in option list, numbered from 1
pub fn default_options() -> Vec<SelectOption> {
    DEFAULT_OPTIONS
        .iter()
        .zip(1i64..)
        .map(|(label, value)| SelectOption::new(value, *label))
        .collect()
}

/// Parse a JSON array of `{ "value": .., "label": .. }` objects
pub fn options_from_str(json: &str) -> Result<Vec<SelectOption>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_options(path: Option<&Path>) -> Result<Vec<SelectOption>, ConfigError> {
    match path {
        Some(path) => options_from_str(&read(path)?),
        None => Ok(default_options()),
    }
}

/// Default keymap, with the commands named in the file replaced
pub fn load_keymap(path: Option<&Path>) -> Result<Keybindings<SelectCommand>, ConfigError> {
    let Some(path) = path else {
        return Ok(default_keymap());
    };
    let user = Keybindings::from_json_str(&read(path)?)?;
    Ok(Keybindings::merge(default_keymap(), user))
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
