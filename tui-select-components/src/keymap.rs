//! Keyboard commands understood by the select widget

use tui_select_core::{KeyCommand, Keybindings};

/// What a key press asks the select widget to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectCommand {
    /// Open the list, or commit the highlighted option and close it
    Toggle,
    /// Move the highlight up (opens a closed list)
    Prev,
    /// Move the highlight down (opens a closed list)
    Next,
    /// Close without committing
    Close,
}

impl KeyCommand for SelectCommand {
    fn name(&self) -> &'static str {
        match self {
            SelectCommand::Toggle => "toggle",
            SelectCommand::Prev => "prev",
            SelectCommand::Next => "next",
            SelectCommand::Close => "close",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "toggle" => Some(SelectCommand::Toggle),
            "prev" => Some(SelectCommand::Prev),
            "next" => Some(SelectCommand::Next),
            "close" => Some(SelectCommand::Close),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[
            SelectCommand::Toggle,
            SelectCommand::Prev,
            SelectCommand::Next,
            SelectCommand::Close,
        ]
    }
}

const DEFAULT_KEYS: &[(SelectCommand, &[&str])] = &[
    (SelectCommand::Toggle, &["enter", "space"]),
    (SelectCommand::Prev, &["up"]),
    (SelectCommand::Next, &["down"]),
    (SelectCommand::Close, &["esc"]),
];

/// Enter/Space toggle, arrows move, Escape closes
pub fn default_keymap() -> Keybindings<SelectCommand> {
    let mut keymap = Keybindings::new();
    for &(command, keys) in DEFAULT_KEYS {
        keymap
            .bind(command, keys)
            .unwrap_or_else(|e| unreachable!("built-in key spec rejected: {e}"));
    }
    keymap
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_select_core::testing::key;

    #[test]
    fn test_default_keymap() {
        let keymap = default_keymap();
        assert_eq!(keymap.command_for(&key("enter")), Some(SelectCommand::Toggle));
        assert_eq!(keymap.command_for(&key("space")), Some(SelectCommand::Toggle));
        assert_eq!(keymap.command_for(&key("up")), Some(SelectCommand::Prev));
        assert_eq!(keymap.command_for(&key("down")), Some(SelectCommand::Next));
        assert_eq!(keymap.command_for(&key("esc")), Some(SelectCommand::Close));
        assert_eq!(keymap.command_for(&key("j")), None);
    }

    #[test]
    fn test_user_keymap_merges_over_defaults() {
        let user =
            Keybindings::<SelectCommand>::from_json_str(r#"{ "next": ["down", "j", "tab"] }"#)
                .unwrap();
        let keymap = Keybindings::merge(default_keymap(), user);

        assert_eq!(keymap.command_for(&key("j")), Some(SelectCommand::Next));
        assert_eq!(keymap.command_for(&key("tab")), Some(SelectCommand::Next));
        assert_eq!(keymap.command_for(&key("esc")), Some(SelectCommand::Close));
    }

    #[test]
    fn test_command_names_roundtrip() {
        for command in SelectCommand::all() {
            assert_eq!(SelectCommand::from_name(command.name()), Some(*command));
        }
    }
}
