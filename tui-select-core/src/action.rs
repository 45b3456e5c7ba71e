//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions produced by components and dispatched to a store
///
/// Components never mutate caller-owned data. A select widget, for example,
/// turns "the user picked option B" into an action built by the caller's
/// change callback, and the caller's reducer applies it.
///
/// Actions should be:
/// - Clone: middleware may inspect an action after the reducer consumed it
/// - Debug: for logging
/// - Send + 'static: actions travel through channels from the input task
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;

    /// One-line description used by logging middleware
    ///
    /// Defaults to the `Debug` output. Override for actions carrying large
    /// payloads (a full option list, say).
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum PickAction {
        Pick(u32),
        Clear,
    }

    impl Action for PickAction {
        fn name(&self) -> &'static str {
            match self {
                PickAction::Pick(_) => "Pick",
                PickAction::Clear => "Clear",
            }
        }
    }

    #[test]
    fn test_default_summary_uses_debug() {
        assert_eq!(PickAction::Pick(3).summary(), "Pick(3)");
        assert_eq!(PickAction::Clear.name(), "Clear");
    }
}
