//! Behavioural integration tests for the session-gated todo flow.
//!
//! These tests wire the real session service (scrypt hashing, in-memory
//! stores) in front of the todo service and walk the flows a presentation
//! layer would drive: sign-up, login, create, list, toggle, delete, and
//! logout.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use daylist::auth::adapters::hashing::ScryptPasswordScheme;
use daylist::auth::adapters::memory::{InMemoryCredentialStore, InMemorySessionStore};
use daylist::auth::services::{SessionService, SessionServiceError};
use daylist::todo::adapters::memory::InMemoryTodoRepository;
use daylist::todo::domain::Priority;
use daylist::todo::services::{
    CreateTodoRequest, TodoService, TodoServiceError, UpdateTodoRequest,
};
use mockable::DefaultClock;

type Sessions = SessionService<
    InMemoryCredentialStore,
    InMemorySessionStore,
    ScryptPasswordScheme,
    DefaultClock,
>;
type Todos = TodoService<InMemoryTodoRepository, Sessions, DefaultClock>;

fn stack() -> (Arc<Sessions>, Todos) {
    let clock = Arc::new(DefaultClock);
    let sessions = Arc::new(SessionService::new(
        Arc::new(InMemoryCredentialStore::new()),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(ScryptPasswordScheme::new()),
        Arc::clone(&clock),
    ));
    let todos = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::clone(&sessions),
        clock,
    );
    (sessions, todos)
}

#[tokio::test(flavor = "multi_thread")]
async fn full_session_gated_todo_lifecycle() {
    let (sessions, todos) = stack();

    sessions
        .sign_up("alice", "correct horse")
        .await
        .expect("sign-up should succeed");
    let token = sessions
        .login("alice", "correct horse")
        .await
        .expect("login should succeed");

    let chore = todos
        .create(
            &token,
            CreateTodoRequest::new("Water plants").with_priority(Priority::Low),
        )
        .await
        .expect("create should succeed");
    todos
        .create(
            &token,
            CreateTodoRequest::new("File taxes").with_priority(Priority::High),
        )
        .await
        .expect("create should succeed");

    let listed = todos.list(&token).await.expect("list should succeed");
    assert_eq!(listed.len(), 2);
    let first = listed.first().expect("two todos listed");
    assert_eq!(first.title(), "File taxes");

    // Toggle the chore done the way a client does: resubmit what it read
    // with the flag flipped.
    todos
        .update(
            &token,
            chore.id(),
            UpdateTodoRequest::new(chore.title(), !chore.is_completed())
                .with_priority(chore.priority()),
        )
        .await
        .expect("toggle should succeed");

    let after_toggle = todos.list(&token).await.expect("list should succeed");
    let last = after_toggle.last().expect("two todos listed");
    assert_eq!(last.title(), "Water plants");
    assert!(last.is_completed());

    todos
        .delete(&token, chore.id())
        .await
        .expect("delete should succeed");
    let after_delete = todos.list(&token).await.expect("list should succeed");
    assert_eq!(after_delete.len(), 1);

    sessions.revoke(&token).await.expect("logout should succeed");
    let after_logout = todos.list(&token).await;
    assert!(matches!(after_logout, Err(TodoServiceError::Unauthorized)));
}

#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_and_unknown_user_fail_identically() {
    let (sessions, _todos) = stack();

    sessions
        .sign_up("alice", "correct horse")
        .await
        .expect("sign-up should succeed");

    let wrong_password = sessions
        .login("alice", "battery staple")
        .await
        .expect_err("wrong password must fail");
    let unknown_user = sessions
        .login("nobody", "battery staple")
        .await
        .expect_err("unknown user must fail");

    assert!(matches!(
        wrong_password,
        SessionServiceError::InvalidCredentials
    ));
    assert!(matches!(unknown_user, SessionServiceError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_sign_up_is_rejected_distinctly() {
    let (sessions, _todos) = stack();

    sessions
        .sign_up("alice", "first password")
        .await
        .expect("first sign-up should succeed");
    let collision = sessions
        .sign_up("alice", "second password")
        .await
        .expect_err("second sign-up must fail");

    assert!(matches!(
        collision,
        SessionServiceError::DuplicateUsername(ref name) if name == "alice"
    ));
    // The first registration still works end to end.
    sessions
        .login("alice", "first password")
        .await
        .expect("original credentials should still log in");
}
