//! Reservation API handlers.

use actix_web::{HttpResponse, delete, web};

use crate::domain::ReservationId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_reservation_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

/// Delete a reservation by id.
///
/// The delete is a single statement; a zero-row result maps to 404
/// rather than being checked with a prior lookup.
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(("id" = String, Path, description = "Reservation id")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No reservation with that id", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "deleteReservation"
)]
#[delete("/reservations/{id}")]
pub async fn delete_reservation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path.into_inner(), FieldName::new("id"))?;
    state
        .reservations
        .delete(ReservationId::new(id))
        .await
        .map_err(map_reservation_error)?;
    Ok(HttpResponse::NoContent().finish())
}
