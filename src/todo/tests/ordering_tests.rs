//! Tests for the canonical presentation ordering policy.

use crate::auth::domain::UserId;
use crate::todo::domain::{
    Priority, Todo, TodoChanges, priority_rank, sort_for_display,
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn todo(
    title: &str,
    completed: bool,
    priority: Priority,
    deadline: Option<NaiveDate>,
) -> Todo {
    let mut built = Todo::new(UserId::new(), title, deadline, priority, &DefaultClock)
        .expect("valid todo");
    if completed {
        let changes = TodoChanges::new(title, true, deadline, priority).expect("valid changes");
        built.apply(&changes);
    }
    built
}

fn titles(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(Todo::title).collect()
}

#[rstest]
fn completion_then_priority_then_deadline() {
    // The worked example from the design discussion: the high/incomplete
    // todo leads, then low/incomplete, with the completed one last, no
    // matter how they were inserted.
    let a = todo("low incomplete", false, Priority::Low, Some(date(2024, 2, 1)));
    let b = todo("high incomplete", false, Priority::High, Some(date(2024, 3, 1)));
    let c = todo("high completed", true, Priority::High, Some(date(2024, 1, 1)));

    let orders = [
        vec![a.clone(), b.clone(), c.clone()],
        vec![c.clone(), b.clone(), a.clone()],
        vec![b, c, a],
    ];
    for mut todos in orders {
        sort_for_display(&mut todos);
        assert_eq!(
            titles(&todos),
            vec!["high incomplete", "low incomplete", "high completed"]
        );
    }
}

#[rstest]
fn dated_todos_sort_before_undated_ones() {
    let undated = todo("undated", false, Priority::Medium, None);
    let late = todo("late", false, Priority::Medium, Some(date(2030, 12, 31)));
    let early = todo("early", false, Priority::Medium, Some(date(2024, 1, 1)));

    let mut todos = vec![undated, late, early];
    sort_for_display(&mut todos);

    assert_eq!(titles(&todos), vec!["early", "late", "undated"]);
}

#[rstest]
fn equal_keys_keep_insertion_order() {
    let first = todo("first", false, Priority::Medium, Some(date(2024, 5, 5)));
    let second = todo("second", false, Priority::Medium, Some(date(2024, 5, 5)));
    let third = todo("third", false, Priority::Medium, Some(date(2024, 5, 5)));

    let mut todos = vec![first.clone(), second.clone(), third.clone()];
    sort_for_display(&mut todos);

    assert_eq!(
        todos.iter().map(Todo::id).collect::<Vec<_>>(),
        vec![first.id(), second.id(), third.id()]
    );
}

#[rstest]
fn priority_ranks_follow_the_comparator_table() {
    assert_eq!(priority_rank(Some(Priority::High)), 1);
    assert_eq!(priority_rank(Some(Priority::Medium)), 2);
    assert_eq!(priority_rank(Some(Priority::Low)), 3);
    assert_eq!(priority_rank(None), 4);
}
