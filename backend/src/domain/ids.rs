//! Identifier newtypes for the persisted entities.
//!
//! All primary keys are database-assigned serial integers. The newtypes
//! keep user, restaurant, and reservation identifiers from being mixed
//! up across the port boundaries.

use serde::{Deserialize, Serialize};

/// Identifier of a [`crate::domain::User`] row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw database identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value as stored in the database.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`crate::domain::Restaurant`] row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(i32);

impl RestaurantId {
    /// Wrap a raw database identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value as stored in the database.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`crate::domain::Reservation`] row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i32);

impl ReservationId {
    /// Wrap a raw database identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value as stored in the database.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialise_as_bare_integers() {
        let json = serde_json::to_string(&UserId::new(7)).expect("serialise id");
        assert_eq!(json, "7");
        let back: UserId = serde_json::from_str(&json).expect("deserialise id");
        assert_eq!(back, UserId::new(7));
    }

    #[test]
    fn ids_display_their_raw_value() {
        assert_eq!(ReservationId::new(42).to_string(), "42");
        assert_eq!(RestaurantId::new(3).as_i32(), 3);
    }
}
