use std::cell::Cell;

use futures::executor::block_on;

use super::*;

#[test]
fn new_guard_is_alive() {
    assert!(TaskGuard::new().is_alive());
}

#[test]
fn cancel_is_visible_through_clones() {
    let guard = TaskGuard::new();
    let held_by_task = guard.clone();
    guard.cancel();
    assert!(!held_by_task.is_alive());
}

#[test]
fn action_runs_once_after_delay_when_alive() {
    let guard = TaskGuard::new();
    let calls = Cell::new(0);
    let fired = block_on(run_after(std::future::ready(()), &guard, || calls.set(calls.get() + 1)));
    assert!(fired);
    assert_eq!(calls.get(), 1);
}

#[test]
fn cancelled_before_expiry_never_runs() {
    let guard = TaskGuard::new();
    let calls = Cell::new(0);
    let teardown = guard.clone();
    let delay = async move {
        // Teardown happens while the timer is still pending.
        teardown.cancel();
    };
    let fired = block_on(run_after(delay, &guard, || calls.set(calls.get() + 1)));
    assert!(!fired);
    assert_eq!(calls.get(), 0);
}

#[test]
fn cancel_after_firing_has_no_effect_on_result() {
    let guard = TaskGuard::new();
    let fired = block_on(run_after(std::future::ready(()), &guard, || {}));
    guard.cancel();
    assert!(fired);
    assert!(!guard.is_alive());
}
