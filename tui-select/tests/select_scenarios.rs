//! End-to-end flows: a caller-owned selection fed back into the widget

use ratatui::layout::Rect;
use tui_select::prelude::*;
use tui_select::testing::{click, key_events, RenderHarness};
use tui_select::{assert_emitted, count_emitted};

#[derive(Debug, Clone, PartialEq)]
enum AppAction {
    FruitChange(Option<SelectOption>),
    ToppingsChange(Vec<SelectOption>),
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::FruitChange(_) => "FruitChange",
            AppAction::ToppingsChange(_) => "ToppingsChange",
        }
    }
}

#[derive(Default)]
struct AppState {
    fruit: Option<SelectOption>,
    toppings: Vec<SelectOption>,
}

fn reducer(state: &mut AppState, action: AppAction) -> bool {
    match action {
        AppAction::FruitChange(fruit) => {
            state.fruit = fruit;
            true
        }
        AppAction::ToppingsChange(toppings) => {
            state.toppings = toppings;
            true
        }
    }
}

const AREA: Rect = Rect::new(0, 0, 30, 3);
// Caret cell of the control; badges never reach it
const CARET_X: u16 = 28;
// First option row of the open list, below the 3-row control
const FIRST_ROW_Y: u16 = 4;

fn abc() -> Vec<SelectOption> {
    vec![
        SelectOption::new(1, "A"),
        SelectOption::new(2, "B"),
        SelectOption::new(3, "C"),
    ]
}

/// Render, open with a click on the caret, render again, click a row
///
/// Returns what the row click emitted, after dispatching it.
fn pick_with_mouse(
    select: &mut Select,
    harness: &mut RenderHarness,
    store: &mut Store<AppState, AppAction>,
    options: &[SelectOption],
    row: u16,
) -> Vec<AppAction> {
    let toppings = store.state().toppings.clone();
    let props = SelectProps::multiple(options, &toppings, AppAction::ToppingsChange).focused(true);

    harness.render(|frame| select.render(frame, AREA, props));
    let opened: Vec<_> = select
        .handle_event(&click(CARET_X, 1), props)
        .into_iter()
        .collect();
    assert!(opened.is_empty());
    assert!(select.is_open());

    harness.render(|frame| select.render(frame, AREA, props));
    let picked: Vec<_> = select
        .handle_event(&click(5, FIRST_ROW_Y + row), props)
        .into_iter()
        .collect();
    for action in picked.iter().cloned() {
        store.dispatch(action);
    }
    assert!(!select.is_open());
    picked
}

#[test]
fn test_multi_select_click_sequence() {
    let options = abc();
    let mut store = Store::new(AppState::default(), reducer);
    let mut select = Select::new();
    let mut harness = RenderHarness::new(30, 12);

    pick_with_mouse(&mut select, &mut harness, &mut store, &options, 1);
    assert_eq!(store.state().toppings, vec![options[1].clone()]);

    pick_with_mouse(&mut select, &mut harness, &mut store, &options, 0);
    assert_eq!(
        store.state().toppings,
        vec![options[1].clone(), options[0].clone()]
    );

    // "A" now has a badge under the body; the caret still opens the list
    let picked = pick_with_mouse(&mut select, &mut harness, &mut store, &options, 1);
    let expected = vec![SelectOption::new(1, "A")];
    assert_eq!(picked, vec![AppAction::ToppingsChange(expected)]);
    assert_eq!(store.state().toppings, vec![options[0].clone()]);
}

#[test]
fn test_single_select_keyboard_flow() {
    let options = abc();
    let mut store = Store::new(AppState::default(), reducer);
    let mut select = Select::new();
    let mut actions = Vec::new();

    for event in key_events("down down enter") {
        let fruit = store.state().fruit.clone();
        let props =
            SelectProps::single(&options, fruit.as_ref(), AppAction::FruitChange).focused(true);
        actions.extend(select.handle_event(&event, props));
    }

    assert_eq!(actions, vec![AppAction::FruitChange(Some(options[1].clone()))]);
    assert!(!select.is_open());
    for action in actions {
        store.dispatch(action);
    }
    assert_eq!(store.state().fruit, Some(options[1].clone()));
}

#[test]
fn test_reopening_starts_at_first_option() {
    let options = abc();
    let mut select = Select::new();
    let props = SelectProps::single(&options, None, AppAction::FruitChange).focused(true);

    for event in key_events("down down down esc") {
        let _ = select.handle_event(&event, props).into_iter().count();
    }
    assert!(!select.is_open());

    let _ = select.handle_event(&key_events("enter")[0], props).into_iter().count();
    assert!(select.is_open());
    assert_eq!(select.highlighted_index(), 0);
}

#[test]
fn test_clear_button_empties_both_modes() {
    let options = abc();
    let mut harness = RenderHarness::new(30, 12);
    let clear = click(24, 1);

    let mut single = Select::new();
    let props = SelectProps::single(&options, Some(&options[0]), AppAction::FruitChange);
    harness.render(|frame| single.render(frame, AREA, props));
    let actions: Vec<_> = single.handle_event(&clear, props).into_iter().collect();
    assert_eq!(actions, vec![AppAction::FruitChange(None)]);

    let mut multi = Select::new();
    let value = options.clone();
    let props = SelectProps::multiple(&options, &value, AppAction::ToppingsChange);
    harness.render(|frame| multi.render(frame, AREA, props));
    let actions: Vec<_> = multi.handle_event(&clear, props).into_iter().collect();
    assert_emitted!(actions, AppAction::ToppingsChange(v) if v.is_empty());
    assert_eq!(count_emitted!(actions, AppAction::ToppingsChange(_)), 1);
}

#[test]
fn test_store_logs_through_middleware() {
    let options = abc();
    let mut store = StoreWithMiddleware::new(
        AppState::default(),
        reducer,
        LoggingMiddleware::new(),
    );

    let mode = SelectMode::Single {
        value: None,
        on_change: AppAction::FruitChange,
    };
    if let Some(action) = mode.select_option(&options[2]) {
        assert!(store.dispatch(action));
    }

    assert_eq!(store.state().fruit, Some(options[2].clone()));
    assert_eq!(store.middleware().dispatched(), 1);
}
