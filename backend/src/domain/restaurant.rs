//! Restaurant entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RestaurantId;

/// A venue that reservations can be booked against.
///
/// `location` is an ordered `[longitude, latitude]` pair of coordinates,
/// or empty when unspecified. No validation beyond the element type is
/// performed; out-of-range coordinates are accepted and stored as-is.
///
/// Serialises camelCase, e.g.
/// `{"id":5,"name":"Tamarind","location":[-74.008929,40.718977],"createdAt":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    #[serde(default)]
    location: Vec<f64>,
    created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Assemble a restaurant from persisted values.
    pub fn new(
        id: RestaurantId,
        name: impl Into<String>,
        location: Vec<f64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            created_at,
        }
    }

    /// Stable identifier.
    pub const fn id(&self) -> RestaurantId {
        self.id
    }

    /// Display name. Duplicates are permitted.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Ordered `[longitude, latitude]` pair, or empty when unspecified.
    pub fn location(&self) -> &[f64] {
        self.location.as_slice()
    }

    /// Row creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_defaults_to_empty_when_absent() {
        let json = r#"{"id":1,"name":"Raos","createdAt":"2026-01-01T00:00:00Z"}"#;
        let restaurant: Restaurant = serde_json::from_str(json).expect("deserialise restaurant");
        assert!(restaurant.location().is_empty());
    }

    #[test]
    fn preserves_coordinate_order() {
        let restaurant = Restaurant::new(
            RestaurantId::new(1),
            "Raos",
            vec![-73.932, 40.794],
            Utc::now(),
        );
        assert_eq!(restaurant.location(), &[-73.932, 40.794]);
    }
}
