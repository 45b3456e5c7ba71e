//! Dropdown select with single and multi selection

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear},
    Frame,
};
use tracing::debug;
use tui_select_core::{rect_contains, Component, EventKind, Keybindings};

use crate::keymap::{default_keymap, SelectCommand};
use crate::option::SelectOption;
use crate::selection::SelectMode;
use crate::style::SelectStyle;

/// Rows taken by the closed control (border, value line, border)
pub const CONTROL_HEIGHT: u16 = 3;

const DEFAULT_MAX_VISIBLE: usize = 8;

/// Props for Select component
pub struct SelectProps<'a, A> {
    /// Options to choose from, in display order
    pub options: &'a [SelectOption],
    /// Current selection and its change callback
    pub mode: SelectMode<'a, A>,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Shown when nothing is selected
    pub placeholder: &'a str,
}

impl<A> Clone for SelectProps<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for SelectProps<'_, A> {}

impl<'a, A> SelectProps<'a, A> {
    /// Props for a single-selection dropdown
    pub fn single(
        options: &'a [SelectOption],
        value: Option<&'a SelectOption>,
        on_change: fn(Option<SelectOption>) -> A,
    ) -> Self {
        Self {
            options,
            mode: SelectMode::Single { value, on_change },
            is_focused: false,
            placeholder: "",
        }
    }

    /// Props for a multi-selection dropdown
    pub fn multiple(
        options: &'a [SelectOption],
        value: &'a [SelectOption],
        on_change: fn(Vec<SelectOption>) -> A,
    ) -> Self {
        Self {
            options,
            mode: SelectMode::Multiple { value, on_change },
            is_focused: false,
            placeholder: "",
        }
    }

    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Screen regions of the last render, used for mouse hit-testing
#[derive(Debug, Default, Clone)]
struct HitLayout {
    control: Rect,
    clear_button: Rect,
    /// (badge area, index into the selection)
    badges: Vec<(Rect, usize)>,
    list: Rect,
    /// (row area, index into the options)
    rows: Vec<(Rect, usize)>,
}

impl HitLayout {
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(area, _)| rect_contains(*area, column, row))
            .map(|(_, index)| *index)
    }

    fn badge_at(&self, column: u16, row: u16) -> Option<usize> {
        self.badges
            .iter()
            .find(|(area, _)| rect_contains(*area, column, row))
            .map(|(_, index)| *index)
    }
}

/// A dropdown that shows the caller's selection and asks for changes through actions
///
/// The selection itself lives with the caller (see [`SelectMode`]). The
/// widget keeps only UI state: whether the list is open, which row the
/// keyboard cursor is on, the list scroll offset, and where things were
/// drawn last frame.
///
/// Keys (default keymap, only while focused): Enter/Space toggle and commit,
/// Up/Down open or move, Esc closes. Mouse: click the body to toggle, a row
/// to pick it, `×` to clear, a badge to remove it; hover highlights; a click
/// anywhere else closes.
pub struct Select {
    is_open: bool,
    highlighted_index: usize,
    scroll_offset: usize,
    has_focus: bool,
    max_visible: usize,
    style: SelectStyle,
    keymap: Keybindings<SelectCommand>,
    layout: HitLayout,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    /// Create a closed Select with the default style and keymap
    pub fn new() -> Self {
        Self {
            is_open: false,
            highlighted_index: 0,
            scroll_offset: 0,
            has_focus: false,
            max_visible: DEFAULT_MAX_VISIBLE,
            style: SelectStyle::default(),
            keymap: default_keymap(),
            layout: HitLayout::default(),
        }
    }

    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_keymap(mut self, keymap: Keybindings<SelectCommand>) -> Self {
        self.keymap = keymap;
        self
    }

    /// Cap the number of option rows shown at once (at least one)
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    pub fn keymap(&self) -> &Keybindings<SelectCommand> {
        &self.keymap
    }

    /// Open a closed list, close an open one
    pub fn toggle_open(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the list with the highlight on the first option
    pub fn open(&mut self) {
        self.is_open = true;
        self.highlighted_index = 0;
        self.scroll_offset = 0;
        debug!("select opened");
    }

    pub fn close(&mut self) {
        if self.is_open {
            debug!(highlighted = self.highlighted_index, "select closed");
        }
        self.is_open = false;
        self.layout.list = Rect::default();
        self.layout.rows.clear();
    }

    /// Focus moved elsewhere
    pub fn blur(&mut self) {
        self.has_focus = false;
        self.close();
    }

    /// Whether a screen cell hits the control or the open list
    ///
    /// Callers use this to move focus on click.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.layout.control, column, row)
            || (self.is_open && rect_contains(self.layout.list, column, row))
    }

    fn sync_focus(&mut self, is_focused: bool) {
        if self.has_focus && !is_focused {
            self.close();
        }
        self.has_focus = is_focused;
    }

    fn move_highlight(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let last = len - 1;
        let current = self.highlighted_index.min(last);
        self.highlighted_index = current.saturating_add_signed(delta).min(last);
    }

    /// Commit the highlighted option and close
    fn commit<A>(&mut self, props: &SelectProps<'_, A>) -> Option<A> {
        let action = props
            .options
            .get(self.highlighted_index)
            .and_then(|option| props.mode.select_option(option));
        if action.is_some() {
            debug!(index = self.highlighted_index, "select option committed");
        }
        self.close();
        action
    }

    fn handle_key<A>(&mut self, key: &KeyEvent, props: &SelectProps<'_, A>) -> Option<A> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match self.keymap.command_for(key)? {
            SelectCommand::Toggle => {
                if self.is_open {
                    self.commit(props)
                } else {
                    self.open();
                    None
                }
            }
            command @ (SelectCommand::Prev | SelectCommand::Next) => {
                if !self.is_open {
                    self.open();
                } else {
                    let delta = if command == SelectCommand::Next { 1 } else { -1 };
                    self.move_highlight(delta, props.options.len());
                }
                None
            }
            SelectCommand::Close => {
                self.close();
                None
            }
        }
    }

    fn handle_mouse<A>(&mut self, mouse: &MouseEvent, props: &SelectProps<'_, A>) -> Option<A> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                if self.is_open {
                    if let Some(index) = self.layout.row_at(column, row) {
                        self.highlighted_index = index;
                    }
                }
                None
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(column, row, props),
            _ => None,
        }
    }

    fn handle_click<A>(&mut self, column: u16, row: u16, props: &SelectProps<'_, A>) -> Option<A> {
        if self.is_open {
            if let Some(index) = self.layout.row_at(column, row) {
                self.highlighted_index = index;
                return self.commit(props);
            }
            // list border or the empty-list row
            if rect_contains(self.layout.list, column, row) {
                return None;
            }
        }

        if rect_contains(self.layout.clear_button, column, row) {
            debug!("select cleared");
            return Some(props.mode.clear());
        }

        if let Some(index) = self.layout.badge_at(column, row) {
            return props
                .mode
                .selected()
                .get(index)
                .and_then(|option| props.mode.select_option(option));
        }

        if rect_contains(self.layout.control, column, row) {
            self.toggle_open();
        } else {
            self.close();
        }
        None
    }

    fn render_control<A>(&mut self, buf: &mut Buffer, control: Rect, props: &SelectProps<'_, A>) {
        let style = &self.style;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                style.container_focused
            } else {
                style.container
            });
        let inner = block.inner(control);
        ratatui::widgets::Widget::render(block, control, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = Rect { height: 1, ..inner };
        let [value_area, clear_area, divider_area, caret_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(line);

        put(buf, clear_area, style.clear_symbol, style.clear_button);
        put(
            buf,
            divider_area,
            &format!(" {} ", style.divider_symbol),
            style.divider,
        );
        let caret = if self.is_open {
            style.caret_open_symbol
        } else {
            style.caret_closed_symbol
        };
        put(buf, caret_area, caret, style.caret);
        self.layout.clear_button = clear_area;

        match props.mode {
            SelectMode::Single {
                value: Some(option),
                ..
            } => put(buf, value_area, &option.label, style.value),
            SelectMode::Multiple { value, .. } if !value.is_empty() => {
                self.layout.badges = layout_badges(buf, value_area, value, style);
            }
            _ => put(buf, value_area, props.placeholder, style.placeholder),
        }
    }

    fn render_list<A>(&mut self, buf: &mut Buffer, control: Rect, props: &SelectProps<'_, A>) {
        let style = &self.style;
        let len = props.options.len();
        let rows = u16::try_from(len.clamp(1, self.max_visible)).unwrap_or(u16::MAX);
        let list = place_list(control, buf.area, rows.saturating_add(2));
        if list.height < 3 {
            return;
        }

        ratatui::widgets::Widget::render(Clear, list, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style.options);
        let inner = block.inner(list);
        ratatui::widgets::Widget::render(block, list, buf);
        self.layout.list = list;

        if len == 0 {
            put(buf, inner, style.empty_text, style.placeholder);
            return;
        }

        self.highlighted_index = self.highlighted_index.min(len - 1);
        let viewport = inner.height as usize;
        ensure_visible(&mut self.scroll_offset, self.highlighted_index, viewport);

        let blank_marker = " ".repeat(text_width(style.selected_marker) as usize);
        for (offset, index) in (self.scroll_offset..len).take(viewport).enumerate() {
            let option = &props.options[index];
            let area = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
            let selected = props.mode.is_selected(option);
            let row_style = style.option_style(selected, index == self.highlighted_index);
            let marker = if selected {
                style.selected_marker
            } else {
                blank_marker.as_str()
            };

            buf.set_style(area, row_style);
            put(buf, area, &format!("{}{}", marker, option.label), row_style);
            self.layout.rows.push((area, index));
        }
    }
}

impl<A> Component<A> for Select {
    type Props<'a> = SelectProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.sync_focus(props.is_focused);

        match event {
            EventKind::Key(key) if props.is_focused => self.handle_key(key, &props),
            EventKind::Mouse(mouse) => self.handle_mouse(mouse, &props),
            EventKind::Scroll { column, row, delta }
                if self.is_open && rect_contains(self.layout.list, *column, *row) =>
            {
                self.move_highlight(*delta, props.options.len());
                None
            }
            EventKind::FocusLost => {
                self.close();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync_focus(props.is_focused);

        let control = Rect {
            height: area.height.min(CONTROL_HEIGHT),
            ..area
        };
        self.layout = HitLayout {
            control,
            ..HitLayout::default()
        };

        let buf = frame.buffer_mut();
        self.render_control(buf, control, &props);
        if self.is_open {
            self.render_list(buf, control, &props);
        }
    }
}

/// Draw `text` clipped to the first line of `area`
fn put(buf: &mut Buffer, area: Rect, text: &str, style: ratatui::style::Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// Draw one badge per selected option, left to right, and return their areas
///
/// Badges that don't fit are replaced by an ellipsis.
fn layout_badges(
    buf: &mut Buffer,
    area: Rect,
    value: &[SelectOption],
    style: &SelectStyle,
) -> Vec<(Rect, usize)> {
    let mut badges = Vec::with_capacity(value.len());
    let mut x = area.x;
    for (index, option) in value.iter().enumerate() {
        let label = format!("{} ", option.label);
        let label_width = text_width(&label);
        let width = label_width.saturating_add(text_width(style.remove_symbol));
        if x.saturating_add(width) > area.right() {
            if x < area.right() {
                buf.set_stringn(x, area.y, "…", 1, style.placeholder);
            }
            break;
        }

        buf.set_string(x, area.y, &label, style.badge);
        buf.set_string(x + label_width, area.y, style.remove_symbol, style.badge_remove);
        badges.push((Rect::new(x, area.y, width, 1), index));
        x = x.saturating_add(width + 1);
    }
    badges
}

/// Place the list below the control, or above it when there is more room there
fn place_list(control: Rect, bounds: Rect, wanted: u16) -> Rect {
    let below = bounds.bottom().saturating_sub(control.bottom());
    let above = control.y.saturating_sub(bounds.y);
    let area = if below >= wanted || below >= above {
        Rect::new(control.x, control.bottom(), control.width, wanted.min(below))
    } else {
        let height = wanted.min(above);
        Rect::new(control.x, control.y - height, control.width, height)
    };
    area.intersection(bounds)
}

/// Scroll just enough to keep `selected` inside a `viewport`-row window
fn ensure_visible(offset: &mut usize, selected: usize, viewport: usize) {
    if viewport == 0 {
        return;
    }
    if selected < *offset {
        *offset = selected;
    } else if selected >= *offset + viewport {
        *offset = selected + 1 - viewport;
    }
}
