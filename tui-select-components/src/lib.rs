//! Dropdown select component for tui-select
//!
//! [`Select`] implements the `Component<A>` trait. It never owns the
//! selection: the caller passes the current value in through
//! [`SelectProps`] and gets change requests back as actions built by the
//! `on_change` callback.
//!
//! # Example
//!
//! ```ignore
//! use tui_select_components::{Select, SelectProps};
//!
//! // Once, next to the rest of your UI state:
//! let mut size = Select::new();
//!
//! // In your render function:
//! size.render(
//!     frame,
//!     area,
//!     SelectProps::single(&state.sizes, state.size.as_ref(), Action::SizeChange)
//!         .focused(state.focus == Focus::Size)
//!         .placeholder("Pick a size"),
//! );
//!
//! // In your event loop:
//! for action in size.handle_event(&event, props) {
//!     store.dispatch(action);
//! }
//! ```

mod keymap;
mod option;
mod select;
mod selection;
mod style;

pub use keymap::{default_keymap, SelectCommand};
pub use option::{OptionValue, SelectOption};
pub use select::{Select, SelectProps, CONTROL_HEIGHT};
pub use selection::SelectMode;
pub use style::SelectStyle;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        default_keymap, OptionValue, Select, SelectCommand, SelectMode, SelectOption,
        SelectProps, SelectStyle, CONTROL_HEIGHT,
    };
}
