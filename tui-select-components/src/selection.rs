//! Caller-owned selection and the changes the widget can request

use crate::option::SelectOption;

/// Current selection plus the callback that turns a new selection into an action
///
/// The variant decides both the shape of the value and the callback
/// signature, so a multi-select can't be handed a single value.
pub enum SelectMode<'a, A> {
    /// At most one option
    Single {
        value: Option<&'a SelectOption>,
        on_change: fn(Option<SelectOption>) -> A,
    },
    /// Any subset of the options, in the order they were picked
    Multiple {
        value: &'a [SelectOption],
        on_change: fn(Vec<SelectOption>) -> A,
    },
}

impl<A> Clone for SelectMode<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for SelectMode<'_, A> {}

impl<'a, A> SelectMode<'a, A> {
    /// Selected options, in selection order (zero or one in single mode)
    pub fn selected(&self) -> &'a [SelectOption] {
        match *self {
            SelectMode::Single { value, .. } => value.map(std::slice::from_ref).unwrap_or(&[]),
            SelectMode::Multiple { value, .. } => value,
        }
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected().contains(option)
    }

    /// Action for picking `option`
    ///
    /// Single mode: `None` when `option` is already the value. Multi mode:
    /// removes `option` if present, otherwise appends it.
    pub fn select_option(&self, option: &SelectOption) -> Option<A> {
        match *self {
            SelectMode::Single { value, on_change } => {
                (value != Some(option)).then(|| on_change(Some(option.clone())))
            }
            SelectMode::Multiple { value, on_change } => {
                let next = if value.contains(option) {
                    value.iter().filter(|o| *o != option).cloned().collect()
                } else {
                    let mut next = value.to_vec();
                    next.push(option.clone());
                    next
                };
                Some(on_change(next))
            }
        }
    }

    /// Action that empties the selection
    pub fn clear(&self) -> A {
        match *self {
            SelectMode::Single { on_change, .. } => on_change(None),
            SelectMode::Multiple { on_change, .. } => on_change(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Single(Option<SelectOption>),
        Multi(Vec<SelectOption>),
    }

    fn abc() -> Vec<SelectOption> {
        vec![
            SelectOption::new(1, "A"),
            SelectOption::new(2, "B"),
            SelectOption::new(3, "C"),
        ]
    }

    fn single(value: Option<&SelectOption>) -> SelectMode<'_, TestAction> {
        SelectMode::Single {
            value,
            on_change: TestAction::Single,
        }
    }

    fn multi(value: &[SelectOption]) -> SelectMode<'_, TestAction> {
        SelectMode::Multiple {
            value,
            on_change: TestAction::Multi,
        }
    }

    #[test]
    fn test_single_select_new_option() {
        let options = abc();
        let mode = single(Some(&options[0]));

        assert_eq!(
            mode.select_option(&options[1]),
            Some(TestAction::Single(Some(options[1].clone())))
        );
    }

    #[test]
    fn test_single_reselect_is_noop() {
        let options = abc();
        let mode = single(Some(&options[2]));

        assert_eq!(mode.select_option(&options[2]), None);
    }

    #[test]
    fn test_single_select_from_empty() {
        let options = abc();
        assert_eq!(
            single(None).select_option(&options[0]),
            Some(TestAction::Single(Some(options[0].clone())))
        );
    }

    #[test]
    fn test_multi_appends_preserving_order() {
        let options = abc();
        let value = vec![options[2].clone(), options[0].clone()];

        assert_eq!(
            multi(&value).select_option(&options[1]),
            Some(TestAction::Multi(vec![
                options[2].clone(),
                options[0].clone(),
                options[1].clone()
            ]))
        );
    }

    #[test]
    fn test_multi_removes_exactly_the_selected_option() {
        let options = abc();
        let value = vec![options[1].clone(), options[0].clone(), options[2].clone()];

        assert_eq!(
            multi(&value).select_option(&options[0]),
            Some(TestAction::Multi(vec![options[1].clone(), options[2].clone()]))
        );
    }

    #[test]
    fn test_clear() {
        let options = abc();
        assert_eq!(single(Some(&options[0])).clear(), TestAction::Single(None));
        assert_eq!(single(None).clear(), TestAction::Single(None));
        assert_eq!(multi(&options).clear(), TestAction::Multi(vec![]));
        assert_eq!(multi(&[]).clear(), TestAction::Multi(vec![]));
    }

    #[test]
    fn test_is_selected() {
        let options = abc();
        let value = vec![options[1].clone()];

        assert!(multi(&value).is_selected(&options[1]));
        assert!(!multi(&value).is_selected(&options[0]));
        assert!(single(Some(&options[2])).is_selected(&options[2]));
        assert!(!single(None).is_selected(&options[2]));
    }

    #[test]
    fn test_selected_slice() {
        let options = abc();
        assert_eq!(single(Some(&options[0])).selected(), &options[..1]);
        assert!(single(None).selected().is_empty());
        assert_eq!(multi(&options[1..]).selected(), &options[1..]);
    }
}
