//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (users,
//!   restaurants, reservations, health)
//! - **Schemas**: Domain type wrappers that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi_dump` for external tooling.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, ReservationSchema, RestaurantSchema, UserSchema,
};
use crate::inbound::http::users::CreateReservationRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Acme reservations API",
        description = "HTTP interface for listing users and restaurants and managing reservations.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::list_user_reservations,
        crate::inbound::http::users::create_reservation,
        crate::inbound::http::restaurants::list_restaurants,
        crate::inbound::http::reservations::delete_reservation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        RestaurantSchema,
        ReservationSchema,
        CreateReservationRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "restaurants", description = "Operations related to restaurants"),
        (name = "reservations", description = "Reservation reads and mutations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
