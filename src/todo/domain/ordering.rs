//! Canonical presentation ordering for todo lists.
//!
//! The ordering policy is a pure function over an in-memory slice so it
//! can be tested independently of any storage engine; repositories return
//! lists in insertion order and make no ordering promise beyond that.

use super::{Priority, Todo};
use chrono::NaiveDate;

/// Comparator rank for a priority value.
///
/// `None` covers values missing or unrecognized at an outer boundary and
/// sorts after every known level.
#[must_use]
pub const fn priority_rank(priority: Option<Priority>) -> u8 {
    match priority {
        Some(Priority::High) => 1,
        Some(Priority::Medium) => 2,
        Some(Priority::Low) => 3,
        None => 4,
    }
}

/// Sorts todos into the canonical presentation order.
///
/// Key, in order: incomplete before completed, priority rank ascending,
/// deadline ascending with no-deadline todos after all dated ones. The
/// sort is stable, so equal-key todos keep their insertion order.
pub fn sort_for_display(todos: &mut [Todo]) {
    todos.sort_by_key(sort_key);
}

fn sort_key(todo: &Todo) -> (bool, u8, bool, Option<NaiveDate>) {
    (
        todo.is_completed(),
        priority_rank(Some(todo.priority())),
        todo.deadline().is_none(),
        todo.deadline(),
    )
}
