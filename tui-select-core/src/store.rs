//! Caller-side state store for controlled components

use crate::Action;

/// A reducer function that handles actions and mutates state
///
/// Returns `true` if the state changed and a re-render is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// State container owning the data that controlled components only display
///
/// A select widget never keeps its own selection: it emits an action, the
/// store's reducer writes the new selection, and the next render passes it
/// back in through props.
///
/// # Example
/// ```ignore
/// #[derive(Default)]
/// struct AppState {
///     fruit: Option<SelectOption>,
/// }
///
/// #[derive(Clone, Debug)]
/// enum AppAction {
///     FruitChange(Option<SelectOption>),
/// }
///
/// fn reducer(state: &mut AppState, action: AppAction) -> bool {
///     match action {
///         AppAction::FruitChange(fruit) => {
///             state.fruit = fruit;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(AppState::default(), reducer);
/// store.dispatch(AppAction::FruitChange(None));
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self { state, reducer }
    }

    /// Run the reducer on `action`; `true` means re-render
    pub fn dispatch(&mut self, action: A) -> bool {
        (self.reducer)(&mut self.state, action)
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Store with middleware support
///
/// Middleware sees every action before and after the reducer runs.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Dispatch an action through middleware and store
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

/// Middleware trait for intercepting actions
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the action is processed by the reducer
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs actions through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
    dispatched: u64,
}

impl LoggingMiddleware {
    /// Create a new logging middleware (log after only)
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
            dispatched: 0,
        }
    }

    /// Log both before and after
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            ..Self::new()
        }
    }

    /// Number of actions seen so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        self.dispatched += 1;
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                summary = %action.summary(),
                state_changed,
                "Action processed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TagAction {
        Toggle(&'static str),
        Clear,
    }

    impl Action for TagAction {
        fn name(&self) -> &'static str {
            match self {
                TagAction::Toggle(_) => "Toggle",
                TagAction::Clear => "Clear",
            }
        }
    }

    fn reducer(tags: &mut Vec<&'static str>, action: TagAction) -> bool {
        match action {
            TagAction::Toggle(tag) => {
                if let Some(pos) = tags.iter().position(|t| *t == tag) {
                    tags.remove(pos);
                } else {
                    tags.push(tag);
                }
                true
            }
            TagAction::Clear => {
                let changed = !tags.is_empty();
                tags.clear();
                changed
            }
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(Vec::new(), reducer);

        assert!(store.dispatch(TagAction::Toggle("rust")));
        assert!(store.dispatch(TagAction::Toggle("tui")));
        assert!(store.dispatch(TagAction::Toggle("rust")));
        assert_eq!(store.state(), &vec!["tui"]);

        assert!(store.dispatch(TagAction::Clear));
        assert!(!store.dispatch(TagAction::Clear));
    }

    #[test]
    fn test_store_with_logging_middleware_counts() {
        let mut store =
            StoreWithMiddleware::new(Vec::new(), reducer, LoggingMiddleware::verbose());

        store.dispatch(TagAction::Toggle("a"));
        store.dispatch(TagAction::Clear);

        assert_eq!(store.middleware().dispatched(), 2);
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_noop_middleware() {
        let mut store = StoreWithMiddleware::new(Vec::new(), reducer, NoopMiddleware);
        assert!(store.dispatch(TagAction::Toggle("x")));
        assert_eq!(store.state(), &vec!["x"]);
    }
}
