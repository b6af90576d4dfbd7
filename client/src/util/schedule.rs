//! One-shot tasks bound to the lifetime of the view that scheduled them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages schedule delayed navigations and await network reads. Both hold a
//! `TaskGuard`; the owning component cancels it from `on_cleanup`, so
//! nothing fires or writes state after the view is gone.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// A navigation that should happen after a fixed pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRedirect {
    pub path: &'static str,
    pub delay: Duration,
}

/// Shared liveness flag for work started by a component.
#[derive(Clone, Debug)]
pub struct TaskGuard {
    alive: Arc<AtomicBool>,
}

impl Default for TaskGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGuard {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a guard that is cancelled when the current reactive owner is
    /// disposed.
    #[must_use]
    pub fn bound_to_owner() -> Self {
        let guard = Self::new();
        let on_teardown = guard.clone();
        leptos::prelude::on_cleanup(move || on_teardown.cancel());
        guard
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Wait for `delay` to complete, then run `action` if `guard` is still live.
///
/// Returns whether the action ran.
pub async fn run_after<D, F>(delay: D, guard: &TaskGuard, action: F) -> bool
where
    D: Future<Output = ()>,
    F: FnOnce(),
{
    delay.await;
    if !guard.is_alive() {
        return false;
    }
    action();
    true
}

/// Spawn a browser task that performs `redirect` once its delay elapses,
/// unless the guard is cancelled first.
#[cfg(feature = "hydrate")]
pub fn spawn_navigation<N>(redirect: ScheduledRedirect, guard: TaskGuard, navigate: N)
where
    N: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    let ScheduledRedirect { path, delay } = redirect;
    log::debug!("navigation to {path} scheduled in {}ms", delay.as_millis());
    leptos::task::spawn_local(async move {
        let fired = run_after(gloo_timers::future::sleep(delay), &guard, || {
            navigate(path, leptos_router::NavigateOptions::default());
        })
        .await;
        if !fired {
            log::debug!("navigation to {path} cancelled by teardown");
        }
    });
}
