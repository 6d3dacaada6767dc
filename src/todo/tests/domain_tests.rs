//! Domain-focused tests for todo records and priorities.

use crate::auth::domain::UserId;
use crate::todo::domain::{
    ParsePriorityError, Priority, Todo, TodoChanges, TodoDomainError,
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[rstest]
fn todo_new_applies_defaults(clock: DefaultClock) {
    let owner = UserId::new();
    let todo = Todo::new(owner, "Buy milk", None, Priority::default(), &clock)
        .expect("valid todo");

    assert_eq!(todo.owner_id(), owner);
    assert_eq!(todo.title(), "Buy milk");
    assert_eq!(todo.priority(), Priority::Medium);
    assert!(!todo.is_completed());
    assert!(todo.deadline().is_none());
}

#[rstest]
fn todo_new_trims_title(clock: DefaultClock) {
    let todo = Todo::new(UserId::new(), "  Water plants  ", None, Priority::Low, &clock)
        .expect("valid todo");
    assert_eq!(todo.title(), "Water plants");
}

#[rstest]
#[case("")]
#[case("   ")]
fn todo_new_rejects_blank_title(clock: DefaultClock, #[case] title: &str) {
    let result = Todo::new(UserId::new(), title, None, Priority::Medium, &clock);
    assert_eq!(result, Err(TodoDomainError::EmptyTitle));
}

#[rstest]
fn todo_changes_enforce_the_same_title_rule() {
    let result = TodoChanges::new("   ", false, None, Priority::Medium);
    assert_eq!(result, Err(TodoDomainError::EmptyTitle));
}

#[rstest]
fn apply_rewrites_fields_but_not_identity(clock: DefaultClock) {
    let owner = UserId::new();
    let mut todo = Todo::new(owner, "Draft report", None, Priority::Medium, &clock)
        .expect("valid todo");
    let original_id = todo.id();

    let changes = TodoChanges::new(
        "Draft report v2",
        true,
        Some(date(2024, 6, 1)),
        Priority::High,
    )
    .expect("valid changes");
    todo.apply(&changes);

    assert_eq!(todo.id(), original_id);
    assert_eq!(todo.owner_id(), owner);
    assert_eq!(todo.title(), "Draft report v2");
    assert!(todo.is_completed());
    assert_eq!(todo.deadline(), Some(date(2024, 6, 1)));
    assert_eq!(todo.priority(), Priority::High);
}

#[rstest]
#[case("high", Priority::High)]
#[case(" MEDIUM ", Priority::Medium)]
#[case("Low", Priority::Low)]
fn priority_parses_canonical_and_noisy_forms(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_values() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn priority_serializes_to_its_storage_string() {
    assert_eq!(
        serde_json::to_value(Priority::High).expect("serializable"),
        json!("high")
    );
}

#[rstest]
fn todo_wire_shape_matches_the_presentation_contract(clock: DefaultClock) {
    let todo = Todo::new(
        UserId::new(),
        "Buy milk",
        Some(date(2024, 2, 1)),
        Priority::Medium,
        &clock,
    )
    .expect("valid todo");

    let value = serde_json::to_value(&todo).expect("serializable");
    assert_eq!(value["task"], json!("Buy milk"));
    assert_eq!(value["priority"], json!("medium"));
    assert_eq!(value["is_completed"], json!(false));
    assert_eq!(value["deadline"], json!("2024-02-01"));
    assert_eq!(value["user_id"], json!(todo.owner_id().to_string()));
}
