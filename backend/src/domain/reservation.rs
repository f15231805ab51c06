//! Reservation entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ReservationId, RestaurantId, UserId};

/// A booking linking exactly one user to exactly one restaurant.
///
/// Both foreign keys are required and must resolve to existing rows at
/// creation time; the store enforces this. Reservations are the only
/// entity that can be deleted, and deleting one has no cascading effect.
///
/// Serialises camelCase: `{"id":9,"userId":1,"restaurantId":5,"createdAt":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: ReservationId,
    user_id: UserId,
    restaurant_id: RestaurantId,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Assemble a reservation from persisted values.
    pub const fn new(
        id: ReservationId,
        user_id: UserId,
        restaurant_id: RestaurantId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            restaurant_id,
            created_at,
        }
    }

    /// Stable identifier.
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Owning user.
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Booked restaurant.
    pub const fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    /// Row creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
