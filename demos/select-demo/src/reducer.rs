//! Reducer - returns true when the screen needs a redraw

use crate::action::Action;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::FavoriteChange(favorite) => {
            state.favorite = favorite;
            true
        }
        Action::BasketChange(basket) => {
            state.basket = basket;
            true
        }
        Action::FocusNext => {
            state.focus = state.focus.next();
            true
        }
        Action::FocusPrev => {
            state.focus = state.focus.prev();
            true
        }
        Action::FocusSet(focus) => {
            let changed = state.focus != focus;
            state.focus = focus;
            changed
        }
        Action::Quit => false, // handled in main loop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use tui_select::SelectOption;

    #[test]
    fn test_selection_changes_replace_value() {
        let apple = SelectOption::new(1, "Apple");
        let mut state = AppState::new(vec![apple.clone()]);

        assert!(reducer(&mut state, Action::FavoriteChange(Some(apple.clone()))));
        assert_eq!(state.favorite, Some(apple.clone()));

        assert!(reducer(&mut state, Action::BasketChange(vec![apple.clone()])));
        assert!(reducer(&mut state, Action::BasketChange(vec![])));
        assert!(state.basket.is_empty());
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = AppState::default();
        assert_eq!(state.focus, Focus::Favorite);

        reducer(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Basket);
        reducer(&mut state, Action::FocusPrev);
        assert_eq!(state.focus, Focus::Favorite);

        assert!(!reducer(&mut state, Action::FocusSet(Focus::Favorite)));
        assert!(reducer(&mut state, Action::FocusSet(Focus::Basket)));
    }

    #[test]
    fn test_quit_does_not_redraw() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Quit));
    }
}
