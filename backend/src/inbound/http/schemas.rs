//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with the current state of the store.
    #[schema(rename = "conflict")]
    Conflict,
    /// The store is temporarily unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "restaurantId must be a positive integer id")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "0f9d7c2a-4b1e-4c3d-9a8b-7e6f5d4c3b2a")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// Application user with stable identifier and display name.
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(example = 1)]
    id: i32,
    /// Display name shown to other users.
    #[schema(example = "moe")]
    name: String,
    /// Row creation instant.
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::Restaurant`].
///
/// Bookable restaurant with a geographic coordinate pair.
#[derive(ToSchema)]
#[schema(as = crate::domain::Restaurant, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RestaurantSchema {
    /// Stable restaurant identifier.
    #[schema(example = 5)]
    id: i32,
    /// Restaurant name shown to clients.
    #[schema(example = "Tamarind")]
    name: String,
    /// Longitude/latitude pair; empty when no coordinates were recorded.
    #[schema(example = json!([-74.0071, 40.7145]))]
    location: Vec<f64>,
    /// Row creation instant.
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::Reservation`].
///
/// Booking linking one user to one restaurant.
#[derive(ToSchema)]
#[schema(as = crate::domain::Reservation, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReservationSchema {
    /// Stable reservation identifier.
    #[schema(example = 9)]
    id: i32,
    /// Owning user id.
    #[schema(example = 1)]
    user_id: i32,
    /// Booked restaurant id.
    #[schema(example = 5)]
    restaurant_id: i32,
    /// Row creation instant.
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}
