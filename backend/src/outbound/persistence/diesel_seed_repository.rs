//! PostgreSQL-backed seeding adapter.
//!
//! Implements the destructive reset applied at startup: the schema is
//! dropped and recreated wholesale rather than migrated, and every insert
//! returns the stored row so the seeder can resolve foreign keys from the
//! ids the database actually generated.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{RunQueryDsl, SimpleAsyncConnection};
use tracing::debug;

use crate::domain::ports::{SeedPersistenceError, SeedRepository};
use crate::domain::{Reservation, Restaurant, RestaurantId, User, UserId};

use super::diesel_helpers::{StoreError, classify_diesel_error, classify_pool_error};
use super::models::{
    NewReservationRow, NewRestaurantRow, NewUserRow, ReservationRow, RestaurantRow, UserRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{reservations, restaurants, users};

/// DDL applied by [`SeedRepository::recreate_schema`].
///
/// `DROP ... CASCADE` removes dependent foreign keys so the statement
/// order never matters; the reservations table is dropped implicitly
/// when either parent goes.
const RECREATE_SCHEMA_SQL: &str = "\
DROP TABLE IF EXISTS reservations CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TABLE IF EXISTS restaurants CASCADE;

CREATE TABLE users (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE restaurants (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    location DOUBLE PRECISION[] NOT NULL DEFAULT '{}',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE reservations (
    id SERIAL PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users (id),
    restaurant_id INTEGER NOT NULL REFERENCES restaurants (id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

/// Diesel-backed implementation of the seeding port.
#[derive(Clone)]
pub struct DieselSeedRepository {
    pool: DbPool,
}

impl DieselSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_store_error(error: StoreError) -> SeedPersistenceError {
    match error {
        StoreError::Connection(message) => SeedPersistenceError::connection(message),
        StoreError::Query(message) | StoreError::ForeignKey(message) => {
            SeedPersistenceError::query(message)
        }
    }
}

fn map_pool_error(error: PoolError) -> SeedPersistenceError {
    map_store_error(classify_pool_error(error))
}

fn map_diesel_error(error: diesel::result::Error) -> SeedPersistenceError {
    map_store_error(classify_diesel_error(error))
}

#[async_trait]
impl SeedRepository for DieselSeedRepository {
    async fn recreate_schema(&self) -> Result<(), SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        debug!("dropping and recreating schema");
        conn.batch_execute(RECREATE_SCHEMA_SQL)
            .await
            .map_err(map_diesel_error)
    }

    async fn insert_restaurant(
        &self,
        name: &str,
        location: Vec<f64>,
    ) -> Result<Restaurant, SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(restaurants::table)
            .values(NewRestaurantRow {
                name,
                location: &location,
            })
            .returning(RestaurantRow::as_returning())
            .get_result::<RestaurantRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Restaurant::from(row))
    }

    async fn insert_user(&self, name: &str) -> Result<User, SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(users::table)
            .values(NewUserRow { name })
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(User::from(row))
    }

    async fn insert_reservation(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Reservation, SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(reservations::table)
            .values(NewReservationRow {
                user_id: user_id.as_i32(),
                restaurant_id: restaurant_id.as_i32(),
            })
            .returning(ReservationRow::as_returning())
            .get_result::<ReservationRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Reservation::from(row))
    }
}
