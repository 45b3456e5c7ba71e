//! Keymaps from key strings to typed commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

/// A command a keymap can bind keys to
///
/// Implemented by small unit enums such as a select widget's
/// `Toggle`/`Prev`/`Next`/`Close`. The names are what config files use.
pub trait KeyCommand: Copy + Eq + Hash + 'static {
    /// Command name used in config files
    fn name(&self) -> &'static str;

    /// Parse a command from its config name
    fn from_name(name: &str) -> Option<Self>;

    /// Every command, in lookup priority order
    fn all() -> &'static [Self];
}

/// Errors raised while building a keymap from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindingsError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("invalid key `{key}` bound to `{command}`")]
    InvalidKey { command: String, key: String },
    #[error("malformed keymap: {0}")]
    Malformed(String),
}

/// One parsed key, remembering how the user spelled it
#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    spec: String,
    key: KeyEvent,
}

/// Keymap from key presses to commands of type `C`
///
/// Keys are parsed once, when bound; lookups compare code and modifiers.
/// Serializes as `{ "command": ["key", ...] }`.
#[derive(Debug, Clone)]
pub struct Keybindings<C: KeyCommand> {
    bindings: HashMap<C, Vec<Binding>>,
}

impl<C: KeyCommand> Default for Keybindings<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: KeyCommand> Keybindings<C> {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Replace the keys bound to `command`
    pub fn bind<S: AsRef<str>>(
        &mut self,
        command: C,
        keys: &[S],
    ) -> Result<(), KeybindingsError> {
        let parsed = keys
            .iter()
            .map(|spec| {
                let spec = spec.as_ref();
                parse_key_string(spec)
                    .map(|key| Binding {
                        spec: spec.trim().to_lowercase(),
                        key,
                    })
                    .ok_or_else(|| KeybindingsError::InvalidKey {
                        command: command.name().to_string(),
                        key: spec.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.bindings.insert(command, parsed);
        Ok(())
    }

    /// Find the command bound to a key press
    ///
    /// Character keys compare case-insensitively. When two commands share a
    /// key, the one listed first in [`KeyCommand::all`] wins.
    pub fn command_for(&self, key: &KeyEvent) -> Option<C> {
        C::all().iter().copied().find(|command| {
            self.bindings
                .get(command)
                .is_some_and(|bindings| bindings.iter().any(|b| keys_match(&b.key, key)))
        })
    }

    /// Key strings bound to `command`, as written in the config
    pub fn keys_for(&self, command: C) -> Vec<&str> {
        self.bindings
            .get(&command)
            .map(|bindings| bindings.iter().map(|b| b.spec.as_str()).collect())
            .unwrap_or_default()
    }

    /// Short display hint for the first key bound to `command` (e.g. "Enter")
    pub fn hint(&self, command: C) -> Option<String> {
        self.bindings
            .get(&command)
            .and_then(|bindings| bindings.first())
            .map(|b| format_key_for_display(&b.spec))
    }

    /// Overlay user bindings onto defaults; a command the user rebinds loses its default keys
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        defaults.bindings.extend(user.bindings);
        defaults
    }

    /// Parse a keymap from JSON of the form `{ "command": ["key", ...] }`
    pub fn from_json_str(json: &str) -> Result<Self, KeybindingsError> {
        let raw: HashMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| KeybindingsError::Malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: HashMap<String, Vec<String>>) -> Result<Self, KeybindingsError> {
        let mut keybindings = Self::new();
        for (name, keys) in raw {
            let command =
                C::from_name(&name).ok_or_else(|| KeybindingsError::UnknownCommand(name.clone()))?;
            keybindings.bind(command, &keys)?;
        }
        Ok(keybindings)
    }
}

impl<C: KeyCommand> Serialize for Keybindings<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for command in C::all() {
            if self.bindings.contains_key(command) {
                map.serialize_entry(command.name(), &self.keys_for(*command))?;
            }
        }
        map.end()
    }
}

impl<'de, C: KeyCommand> Deserialize<'de> for Keybindings<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, Vec<String>> = HashMap::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(D::Error::custom)
    }
}

fn keys_match(bound: &KeyEvent, pressed: &KeyEvent) -> bool {
    let codes_match = match (bound.code, pressed.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
        (a, b) => a == b,
    };
    codes_match && bound.modifiers == pressed.modifiers
}

/// Parse a key string like "q", "esc", "ctrl+p", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    let press = |code, modifiers| KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    };

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // "+" on its own is a key, not a separator
    let (modifier_part, key_part) = match key_str.rsplit_once('+') {
        Some(("", "")) => ("", "+"),
        Some((mods, "")) => (mods.strip_suffix('+')?, "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
        modifiers |= match part.trim() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return None,
        };
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(press(code, modifiers))
}

/// Format a key string for display (e.g., "ctrl+p" -> "^P", "space" -> "Space")
///
/// Strings that don't parse are returned unchanged.
pub fn format_key_for_display(key_str: &str) -> String {
    let Some(key) = parse_key_string(key_str) else {
        return key_str.to_string();
    };

    let key_display = match key.code {
        KeyCode::BackTab => return "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Insert => "Ins".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().collect(),
        other => format!("{:?}", other),
    };

    let mut prefix = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push('^');
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        prefix.push_str("Shift+");
    }
    format!("{}{}", prefix, key_display)
}
