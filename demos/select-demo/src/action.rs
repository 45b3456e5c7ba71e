//! Demo actions

use tui_select::SelectOption;

use crate::state::Focus;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Single select asked for a new value
    FavoriteChange(Option<SelectOption>),
    /// Multi select asked for a new value
    BasketChange(Vec<SelectOption>),
    FocusNext,
    FocusPrev,
    /// Click landed on a select
    FocusSet(Focus),
    Quit,
}

impl tui_select::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::FavoriteChange(_) => "FavoriteChange",
            Action::BasketChange(_) => "BasketChange",
            Action::FocusNext => "FocusNext",
            Action::FocusPrev => "FocusPrev",
            Action::FocusSet(_) => "FocusSet",
            Action::Quit => "Quit",
        }
    }

    /// Labels only, the values add nothing in a log line
    fn summary(&self) -> String {
        match self {
            Action::FavoriteChange(Some(option)) => format!("FavoriteChange({:?})", option.label),
            Action::BasketChange(options) => {
                let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
                format!("BasketChange({:?})", labels)
            }
            _ => format!("{:?}", self),
        }
    }
}
