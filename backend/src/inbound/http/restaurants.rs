//! Restaurant API handlers.

use actix_web::{get, web};

use crate::domain::Restaurant;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_restaurant_error;
use crate::inbound::http::schemas::{ErrorSchema, RestaurantSchema};
use crate::inbound::http::state::HttpState;

/// List all restaurants.
#[utoipa::path(
    get,
    path = "/api/restaurants",
    responses(
        (status = 200, description = "Restaurants", body = [RestaurantSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurants"
)]
#[get("/restaurants")]
pub async fn list_restaurants(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Restaurant>>> {
    let restaurants = state
        .restaurants
        .list()
        .await
        .map_err(map_restaurant_error)?;
    Ok(web::Json(restaurants))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::RestaurantId;
    use crate::domain::ports::{
        MockReservationRepository, MockRestaurantRepository, MockUserRepository,
        RestaurantPersistenceError,
    };
    use actix_web::{App, http::StatusCode, test as actix_test};
    use chrono::Utc;
    use serde_json::Value;

    async fn init(
        restaurants: MockRestaurantRepository,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let state = web::Data::new(HttpState::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(restaurants),
            Arc::new(MockReservationRepository::new()),
        ));
        actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(list_restaurants)),
        )
        .await
    }

    #[actix_web::test]
    async fn list_restaurants_includes_location_coordinates() {
        let mut restaurants = MockRestaurantRepository::new();
        restaurants.expect_list().returning(|| {
            Ok(vec![Restaurant::new(
                RestaurantId::new(1),
                "Tamarind",
                vec![-74.0071, 40.7145],
                Utc::now(),
            )])
        });
        let app = init(restaurants).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/restaurants")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let first = body
            .as_array()
            .and_then(|a| a.first())
            .expect("one restaurant");
        assert_eq!(first.get("name").and_then(Value::as_str), Some("Tamarind"));
        let location = first
            .get("location")
            .and_then(Value::as_array)
            .expect("location array");
        assert_eq!(location.len(), 2);
        assert!((location[0].as_f64().expect("longitude") - -74.0071).abs() < f64::EPSILON);
    }

    #[actix_web::test]
    async fn list_restaurants_maps_query_failure_to_500() {
        let mut restaurants = MockRestaurantRepository::new();
        restaurants
            .expect_list()
            .returning(|| Err(RestaurantPersistenceError::query("bad sql")));
        let app = init(restaurants).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/restaurants")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
