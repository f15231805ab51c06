//! Domain entities, ports, and the seeding procedure.
//!
//! Types here are immutable and transport agnostic; serde contracts are
//! documented on each entity. The inbound HTTP adapter and the Diesel
//! persistence adapters depend on this module, never the reverse.

pub mod error;
mod ids;
pub mod ports;
mod reservation;
mod restaurant;
mod seed;
mod user;

pub use self::error::{Error, ErrorCode};
pub use self::ids::{ReservationId, RestaurantId, UserId};
pub use self::reservation::Reservation;
pub use self::restaurant::Restaurant;
pub use self::seed::{SeedOutcome, Seeder, SeedingError};
pub use self::user::User;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("missing"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
