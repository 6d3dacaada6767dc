//! Application services for session-gated todo operations.

mod todos;

pub use todos::{
    CreateTodoRequest, TodoService, TodoServiceError, TodoServiceResult, UpdateTodoRequest,
};
