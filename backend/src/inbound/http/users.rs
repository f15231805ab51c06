//! User API handlers.
//!
//! ```text
//! GET  /api/users
//! GET  /api/users/{user_id}/reservations
//! POST /api/users/{user_id}/reservations {"restaurantId":"5"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Reservation, RestaurantId, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{map_reservation_error, map_user_error};
use crate::inbound::http::schemas::{ErrorSchema, ReservationSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_id};

/// Request body for `POST /api/users/{user_id}/reservations`.
///
/// The restaurant id travels as a string and is validated at the
/// boundary; a missing or non-numeric value never reaches the store.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    /// Id of the restaurant being booked.
    #[schema(example = "5")]
    pub restaurant_id: Option<String>,
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await.map_err(map_user_error)?;
    Ok(web::Json(users))
}

/// List the reservations owned by one user.
///
/// No existence check is performed on the user id; an unknown id yields
/// an empty array.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/reservations",
    params(("user_id" = String, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Reservations", body = [ReservationSchema]),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "listUserReservations"
)]
#[get("/users/{user_id}/reservations")]
pub async fn list_user_reservations(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Reservation>>> {
    let user_id = parse_id(&path.into_inner(), FieldName::new("userId"))?;
    let reservations = state
        .reservations
        .list_for_user(UserId::new(user_id))
        .await
        .map_err(map_reservation_error)?;
    Ok(web::Json(reservations))
}

/// Create a reservation for the user in the path at the restaurant in
/// the body.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/reservations",
    params(("user_id" = String, Path, description = "Owning user id")),
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationSchema),
        (status = 400, description = "Malformed or missing id", body = ErrorSchema),
        (status = 409, description = "Unknown user or restaurant id", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/users/{user_id}/reservations")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CreateReservationRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_id(&path.into_inner(), FieldName::new("userId"))?;
    let field = FieldName::new("restaurantId");
    let raw = payload
        .into_inner()
        .restaurant_id
        .ok_or_else(|| missing_field_error(field))?;
    let restaurant_id = parse_id(&raw, field)?;

    let reservation = state
        .reservations
        .create(UserId::new(user_id), RestaurantId::new(restaurant_id))
        .await
        .map_err(map_reservation_error)?;
    Ok(HttpResponse::Created().json(reservation))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        MockReservationRepository, MockRestaurantRepository, MockUserRepository,
        ReservationPersistenceError, UserPersistenceError,
    };
    use crate::domain::ReservationId;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use chrono::Utc;
    use serde_json::{Value, json};

    fn state_with(
        users: MockUserRepository,
        reservations: MockReservationRepository,
    ) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(users),
            Arc::new(MockRestaurantRepository::new()),
            Arc::new(reservations),
        ))
    }

    async fn init(
        state: web::Data<HttpState>,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        actix_test::init_service(
            App::new().app_data(state).service(
                web::scope("/api")
                    .service(list_users)
                    .service(list_user_reservations)
                    .service(create_reservation),
            ),
        )
        .await
    }

    #[actix_web::test]
    async fn list_users_returns_camel_case_json() {
        let mut users = MockUserRepository::new();
        users.expect_list().returning(|| {
            Ok(vec![User::new(UserId::new(1), "moe", Utc::now())])
        });
        let app = init(state_with(users, MockReservationRepository::new())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/users").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let first = body.as_array().and_then(|a| a.first()).expect("one user");
        assert_eq!(first.get("name").and_then(Value::as_str), Some("moe"));
        assert!(first.get("createdAt").is_some());
    }

    #[actix_web::test]
    async fn list_users_maps_connection_failure_to_503() {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .returning(|| Err(UserPersistenceError::connection("refused")));
        let app = init(state_with(users, MockReservationRepository::new())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/users").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn list_reservations_rejects_malformed_user_id() {
        let app = init(state_with(
            MockUserRepository::new(),
            MockReservationRepository::new(),
        ))
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/users/abc/reservations")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        let details = body.get("details").expect("details present");
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("invalid_id")
        );
    }

    #[actix_web::test]
    async fn list_reservations_returns_empty_array_for_unmatched_user() {
        let mut reservations = MockReservationRepository::new();
        reservations
            .expect_list_for_user()
            .returning(|_| Ok(Vec::new()));
        let app = init(state_with(MockUserRepository::new(), reservations)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/users/999/reservations")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn create_reservation_returns_201_with_foreign_keys() {
        let mut reservations = MockReservationRepository::new();
        reservations
            .expect_create()
            .withf(|user_id, restaurant_id| {
                *user_id == UserId::new(1) && *restaurant_id == RestaurantId::new(5)
            })
            .returning(|user_id, restaurant_id| {
                Ok(Reservation::new(
                    ReservationId::new(9),
                    user_id,
                    restaurant_id,
                    Utc::now(),
                ))
            });
        let app = init(state_with(MockUserRepository::new(), reservations)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/users/1/reservations")
                .set_json(json!({ "restaurantId": "5" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("userId").and_then(Value::as_i64), Some(1));
        assert_eq!(body.get("restaurantId").and_then(Value::as_i64), Some(5));
    }

    #[actix_web::test]
    async fn create_reservation_maps_dangling_reference_to_409() {
        let mut reservations = MockReservationRepository::new();
        reservations.expect_create().returning(|_, _| {
            Err(ReservationPersistenceError::invalid_reference(
                "restaurant id does not resolve",
            ))
        });
        let app = init(state_with(MockUserRepository::new(), reservations)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/users/1/reservations")
                .set_json(json!({ "restaurantId": "424242" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("code").and_then(Value::as_str), Some("conflict"));
    }

    #[actix_web::test]
    async fn create_reservation_rejects_missing_restaurant_id() {
        let app = init(state_with(
            MockUserRepository::new(),
            MockReservationRepository::new(),
        ))
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/users/1/reservations")
                .set_json(json!({}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        let details = body.get("details").expect("details present");
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("missing_field")
        );
        assert_eq!(
            details.get("field").and_then(Value::as_str),
            Some("restaurantId")
        );
    }
}
