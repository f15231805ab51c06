//! PostgreSQL-backed user read adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::User;
use crate::domain::ports::{UserPersistenceError, UserRepository};

use super::diesel_helpers::{StoreError, classify_diesel_error, classify_pool_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user read port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_store_error(error: StoreError) -> UserPersistenceError {
    match error {
        StoreError::Connection(message) => UserPersistenceError::connection(message),
        StoreError::Query(message) | StoreError::ForeignKey(message) => {
            UserPersistenceError::query(message)
        }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_store_error(classify_pool_error(error))
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_store_error(classify_diesel_error(error))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert!(matches!(error, UserPersistenceError::Connection { .. }));
    }

    #[test]
    fn diesel_failures_map_to_query_errors() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(error, UserPersistenceError::Query { .. }));
    }
}
