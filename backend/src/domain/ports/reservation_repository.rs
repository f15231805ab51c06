//! Port abstraction for reservation reads and mutations.

use async_trait::async_trait;

use crate::domain::{Reservation, ReservationId, RestaurantId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by reservation repository adapters.
    pub enum ReservationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "reservation store connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "reservation query failed: {message}",
        /// A foreign key did not resolve to an existing row.
        InvalidReference { message: String } => "reservation references a missing row: {message}",
        /// No reservation row matched the requested id.
        NotFound => "reservation not found",
    }
}

/// Reservation reads and mutations.
///
/// Implementations must:
/// - Surface a store-enforced foreign key violation on create as
///   [`ReservationPersistenceError::InvalidReference`] and insert nothing.
/// - Delete in a single atomic statement and report
///   [`ReservationPersistenceError::NotFound`] when no row matched,
///   rather than looking the row up first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// List the reservations owned by `user_id`.
    ///
    /// No existence check is performed on the user; a user with no
    /// matching rows yields an empty vector, not an error.
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Reservation>, ReservationPersistenceError>;

    /// Insert a reservation linking `user_id` to `restaurant_id`.
    async fn create(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Reservation, ReservationPersistenceError>;

    /// Delete the reservation with the given id.
    async fn delete(&self, id: ReservationId) -> Result<(), ReservationPersistenceError>;
}
