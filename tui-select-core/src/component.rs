//! Component trait for controlled UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A controlled UI component that renders from props and emits actions
///
/// Components follow these rules:
/// 1. Props carry ALL caller-owned data needed for rendering (the option
///    list, the current selection, focus)
/// 2. `handle_event` returns actions, never mutates caller-owned state
/// 3. `render` draws from props plus internal UI state
///
/// Internal UI state (open/closed, highlighted row, scroll offset, the
/// hit-test layout of the last frame) lives in `&mut self` and is dropped
/// with the component. Changes to the data itself go through actions.
///
/// # Focus
///
/// Components receive `EventKind` (the raw event) rather than a routed event.
/// Whether the component currently has focus is passed through `Props`.
///
/// # Example
///
/// ```ignore
/// use tui_select::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// struct ToggleProps {
///     on: bool,
///     is_focused: bool,
///     on_change: fn(bool) -> AppAction,
/// }
///
/// impl Component<AppAction> for Toggle {
///     type Props<'a> = ToggleProps;
///
///     fn handle_event(
///         &mut self,
///         event: &EventKind,
///         props: Self::Props<'_>,
///     ) -> impl IntoIterator<Item = AppAction> {
///         if !props.is_focused {
///             return None;
///         }
///         match event {
///             EventKind::Key(key) if key.code == KeyCode::Enter => {
///                 Some((props.on_change)(!props.on))
///             }
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = if props.on { "[x]" } else { "[ ]" };
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `[a, b]` or `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
