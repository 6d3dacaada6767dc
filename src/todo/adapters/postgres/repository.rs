//! `PostgreSQL` todo repository implementation.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::auth::domain::UserId;
use crate::todo::{
    domain::{PersistedTodoData, Priority, Todo, TodoChanges, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn list(&self, owner: UserId) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .filter(todos::user_id.eq(owner.into_inner()))
                .order(todos::created_at.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn insert(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let todo_id = todo.id();
        let new_row = to_new_row(todo);

        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::DuplicateTodo(todo_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        owner: UserId,
        id: TodoId,
        changes: &TodoChanges,
    ) -> TodoRepositoryResult<()> {
        let scoped = changes.clone();
        self.run_blocking(move |connection| {
            // The predicate covers both id and owner; the affected-row
            // count is deliberately ignored so a foreign id behaves
            // exactly like an absent one.
            diesel::update(
                todos::table
                    .filter(todos::id.eq(id.into_inner()))
                    .filter(todos::user_id.eq(owner.into_inner())),
            )
            .set((
                todos::task.eq(scoped.title().to_owned()),
                todos::is_completed.eq(scoped.is_completed()),
                todos::deadline.eq(scoped.deadline()),
                todos::priority.eq(scoped.priority().as_str().to_owned()),
            ))
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, owner: UserId, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(
                todos::table
                    .filter(todos::id.eq(id.into_inner()))
                    .filter(todos::user_id.eq(owner.into_inner())),
            )
            .execute(connection)
            .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(todo: &Todo) -> NewTodoRow {
    NewTodoRow {
        id: todo.id().into_inner(),
        user_id: todo.owner_id().into_inner(),
        task: todo.title().to_owned(),
        deadline: todo.deadline(),
        priority: todo.priority().as_str().to_owned(),
        is_completed: todo.is_completed(),
        created_at: todo.created_at(),
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(TodoRepositoryError::persistence)?;

    let data = PersistedTodoData {
        id: TodoId::from_uuid(row.id),
        owner_id: UserId::from_uuid(row.user_id),
        title: row.task,
        deadline: row.deadline,
        priority,
        is_completed: row.is_completed,
        created_at: row.created_at,
    };
    Ok(Todo::from_persisted(data))
}
