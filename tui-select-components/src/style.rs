//! Swappable look of the select widget

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;
const BADGE_BG: Color = Color::Rgb(45, 50, 70);
const HIGHLIGHT_BG: Color = Color::Rgb(60, 70, 100);
const TEXT_PRIMARY: Color = Color::Rgb(240, 240, 245);

/// Styles and glyphs for every part of the widget
///
/// The widget only reads this; swap the whole value to re-theme.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Control border while focused
    pub container_focused: Style,
    /// Control border while not focused
    pub container: Style,
    /// Label of the selected option (single mode)
    pub value: Style,
    /// Text shown when nothing is selected
    pub placeholder: Style,
    /// One selected option (multi mode)
    pub badge: Style,
    /// Remove glyph inside a badge
    pub badge_remove: Style,
    /// Clear-all button
    pub clear_button: Style,
    /// Separator between clear button and caret
    pub divider: Style,
    /// Open/closed indicator
    pub caret: Style,
    /// Border of the option list
    pub options: Style,
    /// Option row
    pub option: Style,
    /// Patched onto rows whose option is selected
    pub option_selected: Style,
    /// Patched onto the highlighted row
    pub option_highlighted: Style,

    pub clear_symbol: &'static str,
    pub remove_symbol: &'static str,
    pub divider_symbol: &'static str,
    pub caret_closed_symbol: &'static str,
    pub caret_open_symbol: &'static str,
    /// Prefix of selected rows; unselected rows get the same width of blanks
    pub selected_marker: &'static str,
    /// Row shown when there are no options
    pub empty_text: &'static str,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            container_focused: Style::default().fg(ACCENT),
            container: Style::default().fg(MUTED),
            value: Style::default().fg(TEXT_PRIMARY),
            placeholder: Style::default().fg(MUTED),
            badge: Style::default().fg(TEXT_PRIMARY).bg(BADGE_BG),
            badge_remove: Style::default().fg(Color::LightRed).bg(BADGE_BG),
            clear_button: Style::default().fg(MUTED),
            divider: Style::default().fg(MUTED),
            caret: Style::default().fg(MUTED),
            options: Style::default().fg(ACCENT),
            option: Style::default().fg(TEXT_PRIMARY),
            option_selected: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            option_highlighted: Style::default().bg(HIGHLIGHT_BG),
            clear_symbol: "×",
            remove_symbol: "×",
            divider_symbol: "│",
            caret_closed_symbol: "▾",
            caret_open_symbol: "▴",
            selected_marker: "✓ ",
            empty_text: "No options",
        }
    }
}

impl SelectStyle {
    /// Style for an option row given its state
    pub fn option_style(&self, selected: bool, highlighted: bool) -> Style {
        let mut style = self.option;
        if selected {
            style = style.patch(self.option_selected);
        }
        if highlighted {
            style = style.patch(self.option_highlighted);
        }
        style
    }

    /// Plain-ASCII glyphs for terminals without good Unicode fonts
    pub fn ascii() -> Self {
        Self {
            clear_symbol: "x",
            remove_symbol: "x",
            divider_symbol: "|",
            caret_closed_symbol: "v",
            caret_open_symbol: "^",
            selected_marker: "* ",
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_style_layers() {
        let style = SelectStyle::default();

        let plain = style.option_style(false, false);
        assert_eq!(plain, style.option);

        let both = style.option_style(true, true);
        assert_eq!(both.bg, Some(HIGHLIGHT_BG));
        assert_eq!(both.fg, Some(ACCENT));
        assert!(both.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_ascii_keeps_colors() {
        let ascii = SelectStyle::ascii();
        assert_eq!(ascii.caret_closed_symbol, "v");
        assert_eq!(ascii.badge, SelectStyle::default().badge);
    }
}
