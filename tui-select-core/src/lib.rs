//! Core traits and types for tui-select
//!
//! The dropdown in `tui-select-components` is a *controlled component*: it
//! never owns the selection it shows. This crate provides the pieces that
//! pattern rests on.
//!
//! # Core Concepts
//!
//! - **Action**: what a component asks the caller to do
//! - **Component**: renders from props, turns events into actions
//! - **Store**: caller-side state container with a reducer
//! - **Keybindings**: key strings mapped onto typed commands
//! - **Input**: crossterm polling into [`EventKind`]
//!
//! # Basic Example
//!
//! ```ignore
//! use tui_select_core::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     SizeChange(Option<SelectOption>),
//! }
//!
//! impl Action for AppAction {
//!     fn name(&self) -> &'static str {
//!         "SizeChange"
//!     }
//! }
//!
//! fn reducer(state: &mut AppState, action: AppAction) -> bool {
//!     match action {
//!         AppAction::SizeChange(size) => {
//!             state.size = size;
//!             true
//!         }
//!     }
//! }
//!
//! let mut store = Store::new(AppState::default(), reducer);
//! for action in select.handle_event(&event, props) {
//!     store.dispatch(action);
//! }
//! ```

pub mod action;
pub mod component;
pub mod event;
pub mod input;
pub mod keybindings;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::Action;
pub use component::Component;

// Event exports
pub use event::{rect_contains, EventKind};
pub use input::{process_raw_event, spawn_event_poller, RawEvent};

// Keybindings exports
pub use keybindings::{
    format_key_for_display, parse_key_string, KeyCommand, Keybindings, KeybindingsError,
};

// Store exports
pub use store::{
    LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store, StoreWithMiddleware,
};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_to_string_plain, char_key, click, hover, key, key_event, key_events, RenderHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::event::{rect_contains, EventKind};
    pub use crate::input::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::keybindings::{
        format_key_for_display, parse_key_string, KeyCommand, Keybindings, KeybindingsError,
    };
    pub use crate::store::{
        LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store, StoreWithMiddleware,
    };

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
