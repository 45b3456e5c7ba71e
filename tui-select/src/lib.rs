//! tui-select: single- and multi-selection dropdown for Rust TUI apps
//!
//! The dropdown is a controlled component. Your state holds the selection,
//! the widget renders it and turns keys and clicks into actions for your
//! reducer.
//!
//! # Example
//! ```ignore
//! use tui_select::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     ToppingsChange(Vec<SelectOption>),
//! }
//!
//! let props = SelectProps::multiple(&state.toppings, &state.picked, AppAction::ToppingsChange)
//!     .focused(true);
//! for action in toppings.handle_event(&event, props) {
//!     store.dispatch(action);
//! }
//! ```

// Re-export everything from core
pub use tui_select_core::*;

// Re-export components
pub use tui_select_components::*;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use tui_select_core::{Action, Component, KeyCommand};

    // Events
    pub use tui_select_core::{
        process_raw_event, rect_contains, spawn_event_poller, EventKind, RawEvent,
    };

    // Keybindings
    pub use tui_select_core::{format_key_for_display, parse_key_string, Keybindings};

    // Store
    pub use tui_select_core::{
        LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store, StoreWithMiddleware,
    };

    // Select
    pub use tui_select_components::prelude::*;

    // Ratatui re-exports
    pub use tui_select_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
