use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::util::schedule::{TaskGuard, run_after};

#[test]
fn continues_to_dashboard_after_one_second() {
    assert_eq!(
        continue_to_dashboard(),
        ScheduledRedirect { path: "/dashboard", delay: Duration::from_millis(1000) }
    );
}

#[test]
fn expiry_navigates_exactly_once() {
    let redirect = continue_to_dashboard();
    let guard = TaskGuard::new();
    let visited = RefCell::new(Vec::new());
    block_on(run_after(std::future::ready(()), &guard, || visited.borrow_mut().push(redirect.path)));
    assert_eq!(visited.into_inner(), vec!["/dashboard"]);
}

#[test]
fn teardown_before_expiry_navigates_nowhere() {
    let redirect = continue_to_dashboard();
    let guard = TaskGuard::new();
    guard.cancel();
    let visited = RefCell::new(Vec::<&str>::new());
    let fired = block_on(run_after(std::future::ready(()), &guard, || visited.borrow_mut().push(redirect.path)));
    assert!(!fired);
    assert!(visited.into_inner().is_empty());
}
