//! Port abstraction for the destructive seed run.
//!
//! The seeding procedure wipes the schema and repopulates it from a
//! fixed dataset at startup. Adapters provide the primitives; ordering
//! and foreign-key resolution live in [`crate::domain::Seeder`].

use async_trait::async_trait;

use crate::domain::{Reservation, Restaurant, RestaurantId, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by seed repository adapters.
    pub enum SeedPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "seed store connection failed: {message}",
        /// A DDL statement or insertion failed during execution.
        Query { message: String } => "seed query failed: {message}",
    }
}

/// Primitives for resetting and repopulating the store.
///
/// Implementations must drop and recreate all tables in
/// [`recreate_schema`](SeedRepository::recreate_schema) — a full wipe,
/// not an incremental migration — and return the freshly inserted
/// records, including their generated ids, from each insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Drop and recreate the users, restaurants, and reservations tables.
    async fn recreate_schema(&self) -> Result<(), SeedPersistenceError>;

    /// Insert a restaurant and return the created record.
    async fn insert_restaurant(
        &self,
        name: &str,
        location: Vec<f64>,
    ) -> Result<Restaurant, SeedPersistenceError>;

    /// Insert a user and return the created record.
    async fn insert_user(&self, name: &str) -> Result<User, SeedPersistenceError>;

    /// Insert a reservation between already-seeded rows.
    async fn insert_reservation(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Reservation, SeedPersistenceError>;
}
