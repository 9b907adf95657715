// Page lifecycle decisions, free of DOM types so the host tests can reach them.

/// What the app does with its frame loop and timers on `pagehide`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    /// The document stays in the back/forward cache and may come back with
    /// its state intact; the loop and spawner must survive.
    Keep,
    /// The document is being discarded.
    Teardown,
}

/// Decide from `PageTransitionEvent.persisted` of a `pagehide`.
pub fn on_page_hide(persisted: bool) -> LifecycleAction {
    if persisted {
        LifecycleAction::Keep
    } else {
        LifecycleAction::Teardown
    }
}
