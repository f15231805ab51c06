//! PostgreSQL-backed restaurant read adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Restaurant;
use crate::domain::ports::{RestaurantPersistenceError, RestaurantRepository};

use super::diesel_helpers::{StoreError, classify_diesel_error, classify_pool_error};
use super::models::RestaurantRow;
use super::pool::{DbPool, PoolError};
use super::schema::restaurants;

/// Diesel-backed implementation of the restaurant read port.
#[derive(Clone)]
pub struct DieselRestaurantRepository {
    pool: DbPool,
}

impl DieselRestaurantRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_store_error(error: StoreError) -> RestaurantPersistenceError {
    match error {
        StoreError::Connection(message) => RestaurantPersistenceError::connection(message),
        StoreError::Query(message) | StoreError::ForeignKey(message) => {
            RestaurantPersistenceError::query(message)
        }
    }
}

fn map_pool_error(error: PoolError) -> RestaurantPersistenceError {
    map_store_error(classify_pool_error(error))
}

fn map_diesel_error(error: diesel::result::Error) -> RestaurantPersistenceError {
    map_store_error(classify_diesel_error(error))
}

#[async_trait]
impl RestaurantRepository for DieselRestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = restaurants::table
            .select(RestaurantRow::as_select())
            .order(restaurants::id.asc())
            .load::<RestaurantRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }
}
