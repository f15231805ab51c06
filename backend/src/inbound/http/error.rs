//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers turn
//! failures into consistent JSON responses and status codes. Port errors
//! from the persistence layer are classified here so every endpoint
//! distinguishes not-found, constraint-violation, and store-unavailable
//! conditions instead of collapsing them into one generic response.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::ports::{
    ReservationPersistenceError, RestaurantPersistenceError, UserPersistenceError,
};
use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header(("trace-id", id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// Classify user repository failures.
pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Classify restaurant repository failures.
pub(crate) fn map_restaurant_error(error: RestaurantPersistenceError) -> Error {
    match error {
        RestaurantPersistenceError::Connection { message } => Error::service_unavailable(message),
        RestaurantPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Classify reservation repository failures.
pub(crate) fn map_reservation_error(error: ReservationPersistenceError) -> Error {
    match error {
        ReservationPersistenceError::Connection { message } => Error::service_unavailable(message),
        ReservationPersistenceError::Query { message } => Error::internal(message),
        ReservationPersistenceError::InvalidReference { message } => Error::conflict(message),
        ReservationPersistenceError::NotFound => Error::not_found("reservation not found"),
    }
}
