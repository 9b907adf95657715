// Host-side tests for the pagehide decision.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene_core {
    pub mod lifecycle {
        include!("../src/core/lifecycle.rs");
    }
}

use scene_core::lifecycle::{on_page_hide, LifecycleAction};

#[test]
fn cached_page_keeps_loop_and_spawner() {
    assert_eq!(on_page_hide(true), LifecycleAction::Keep);
}

#[test]
fn discarded_page_tears_down() {
    assert_eq!(on_page_hide(false), LifecycleAction::Teardown);
}

#[test]
fn repeated_cache_round_trips_never_tear_down() {
    // hide into the cache, come back, hide again
    let actions: Vec<_> = [true, true, true].iter().map(|&p| on_page_hide(p)).collect();
    assert!(actions.iter().all(|a| *a == LifecycleAction::Keep));
    assert_eq!(on_page_hide(false), LifecycleAction::Teardown);
}
