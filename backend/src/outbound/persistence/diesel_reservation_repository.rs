//! PostgreSQL-backed reservation adapter.
//!
//! Foreign key enforcement is left to the database: a create referencing a
//! missing user or restaurant surfaces as
//! [`ReservationPersistenceError::InvalidReference`] after the store rejects
//! the insert, and nothing is written. Deletes execute as a single statement
//! so the row check and removal cannot race.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ReservationPersistenceError, ReservationRepository};
use crate::domain::{Reservation, ReservationId, RestaurantId, UserId};

use super::diesel_helpers::{StoreError, classify_diesel_error, classify_pool_error};
use super::models::{NewReservationRow, ReservationRow};
use super::pool::{DbPool, PoolError};
use super::schema::reservations;

/// Diesel-backed implementation of the reservation port.
#[derive(Clone)]
pub struct DieselReservationRepository {
    pool: DbPool,
}

impl DieselReservationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_store_error(error: StoreError) -> ReservationPersistenceError {
    match error {
        StoreError::Connection(message) => ReservationPersistenceError::connection(message),
        StoreError::Query(message) => ReservationPersistenceError::query(message),
        StoreError::ForeignKey(message) => ReservationPersistenceError::invalid_reference(message),
    }
}

fn map_pool_error(error: PoolError) -> ReservationPersistenceError {
    map_store_error(classify_pool_error(error))
}

fn map_diesel_error(error: diesel::result::Error) -> ReservationPersistenceError {
    map_store_error(classify_diesel_error(error))
}

#[async_trait]
impl ReservationRepository for DieselReservationRepository {
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Reservation>, ReservationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = reservations::table
            .filter(reservations::user_id.eq(user_id.as_i32()))
            .select(ReservationRow::as_select())
            .order(reservations::id.asc())
            .load::<ReservationRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn create(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Reservation, ReservationPersistenceError> {
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

    async fn delete(&self, id: ReservationId) -> Result<(), ReservationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted =
            diesel::delete(reservations::table.filter(reservations::id.eq(id.as_i32())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(ReservationPersistenceError::not_found());
        }
        Ok(())
    }
}
