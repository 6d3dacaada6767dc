//! `PostgreSQL` credential store implementation.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::auth::{
    domain::{User, UserId},
    ports::{CredentialStore, CredentialStoreError, CredentialStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by auth adapters.
pub type AuthPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed credential store.
#[derive(Debug, Clone)]
pub struct PostgresCredentialStore {
    pool: AuthPgPool,
}

impl PostgresCredentialStore {
    /// Creates a new credential store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AuthPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CredentialStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CredentialStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CredentialStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CredentialStoreError::persistence)?
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn create_user(&self, user: &User) -> CredentialStoreResult<()> {
        let new_row = to_new_row(user);
        let username = user.username().to_owned();

        self.run_blocking(move |connection| {
            // No pre-check: the unique index on username is the only
            // duplicate detection, which closes the check-then-insert race.
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CredentialStoreError::DuplicateUsername(username.clone())
                    }
                    _ => CredentialStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_username(&self, username: &str) -> CredentialStoreResult<Option<User>> {
        let lookup = username.to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::username.eq(&lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(CredentialStoreError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }
}

fn to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().into_inner(),
        username: user.username().to_owned(),
        password_hash: user.password_hash().to_owned(),
    }
}

fn row_to_user(row: UserRow) -> User {
    User::from_persisted(UserId::from_uuid(row.id), row.username, row.password_hash)
}
