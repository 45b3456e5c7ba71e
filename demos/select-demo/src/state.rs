//! Demo state: one option list shown by two selects

use tui_select::SelectOption;

/// Which select receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Favorite,
    Basket,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Favorite => Focus::Basket,
            Focus::Basket => Focus::Favorite,
        }
    }

    // Two targets, so cycling either way lands on the other one
    pub fn prev(self) -> Self {
        self.next()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub options: Vec<SelectOption>,
    /// Single-select value
    pub favorite: Option<SelectOption>,
    /// Multi-select value, in pick order
    pub basket: Vec<SelectOption>,
    pub focus: Focus,
}

impl AppState {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }
}
