//! End-to-end API behaviour over a seeded in-memory store.
//!
//! Exercises the full request path (routing, validation, error mapping)
//! against the same seeded dataset the binary boots with, swapping only
//! the PostgreSQL adapters for the in-memory fake.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{http::StatusCode, test as actix_test, web};
use serde_json::{Value, json};

use backend::domain::Seeder;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::build_app;
use backend::test_support::InMemoryStore;

struct Fixture {
    store: Arc<InMemoryStore>,
}

impl Fixture {
    async fn seeded() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Seeder::new(store.clone())
            .reset_and_seed()
            .await
            .expect("seed run succeeds");
        Self { store }
    }

    async fn app(
        &self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
    {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        let http_state = web::Data::new(HttpState::new(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
        ));
        actix_test::init_service(build_app(health_state, http_state)).await
    }
}

async fn get_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> Value {
    let res = actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
    actix_test::read_body_json(res).await
}

fn user_id_by_name(users: &Value, name: &str) -> i64 {
    users
        .as_array()
        .expect("users array")
        .iter()
        .find(|user| user.get("name").and_then(Value::as_str) == Some(name))
        .and_then(|user| user.get("id"))
        .and_then(Value::as_i64)
        .unwrap_or_else(|| panic!("user {name} should be seeded"))
}

#[actix_web::test]
async fn seeded_users_and_restaurants_are_listed() {
    let fixture = Fixture::seeded().await;
    let app = fixture.app().await;

    let users = get_json(&app, "/api/users").await;
    let names: Vec<&str> = users
        .as_array()
        .expect("users array")
        .iter()
        .filter_map(|user| user.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names.len(), 3);
    for name in ["moe", "lucy", "larry"] {
        assert!(names.contains(&name), "{name} should be seeded");
    }

    let restaurants = get_json(&app, "/api/restaurants").await;
    let restaurants = restaurants.as_array().expect("restaurants array");
    assert_eq!(restaurants.len(), 17);
    assert!(
        restaurants
            .iter()
            .any(|r| r.get("name").and_then(Value::as_str) == Some("Tamarind"))
    );
}

#[actix_web::test]
async fn seeded_reservations_match_the_fixed_pairs() {
    let fixture = Fixture::seeded().await;
    let app = fixture.app().await;
    let users = get_json(&app, "/api/users").await;

    let moe = user_id_by_name(&users, "moe");
    let lucy = user_id_by_name(&users, "lucy");
    let larry = user_id_by_name(&users, "larry");

    let moe_reservations = get_json(&app, &format!("/api/users/{moe}/reservations")).await;
    assert_eq!(moe_reservations.as_array().map(Vec::len), Some(1));

    let lucy_reservations = get_json(&app, &format!("/api/users/{lucy}/reservations")).await;
    assert_eq!(lucy_reservations.as_array().map(Vec::len), Some(2));

    let larry_reservations = get_json(&app, &format!("/api/users/{larry}/reservations")).await;
    assert_eq!(larry_reservations.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn create_reservation_round_trips_through_the_list() {
    let fixture = Fixture::seeded().await;
    let app = fixture.app().await;
    let users = get_json(&app, "/api/users").await;
    let larry = user_id_by_name(&users, "larry");

    let restaurants = get_json(&app, "/api/restaurants").await;
    let restaurant = restaurants
        .as_array()
        .and_then(|a| a.first())
        .and_then(|r| r.get("id"))
        .and_then(Value::as_i64)
        .expect("a seeded restaurant id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/users/{larry}/reservations"))
            .set_json(json!({ "restaurantId": restaurant.to_string() }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body.get("userId").and_then(Value::as_i64), Some(larry));
    assert_eq!(
        body.get("restaurantId").and_then(Value::as_i64),
        Some(restaurant)
    );
    assert!(body.get("id").is_some());

    let listed = get_json(&app, &format!("/api/users/{larry}/reservations")).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn create_reservation_with_unknown_restaurant_conflicts_and_inserts_nothing() {
    let fixture = Fixture::seeded().await;
    let app = fixture.app().await;
    let before = fixture.store.reservation_count();

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
    assert_eq!(fixture.store.reservation_count(), before);
}

#[actix_web::test]
async fn malformed_and_missing_ids_are_rejected_at_the_boundary() {
    let fixture = Fixture::seeded().await;
    let app = fixture.app().await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users/1/reservations")
            .set_json(json!({ "restaurantId": "not-a-number" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("invalid_id")
    );

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
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("missing_field")
    );
}

#[actix_web::test]
async fn delete_reservation_removes_the_row_exactly_once() {
    let fixture = Fixture::seeded().await;
    let app = fixture.app().await;
    let users = get_json(&app, "/api/users").await;
    let moe = user_id_by_name(&users, "moe");

    let reservations = get_json(&app, &format!("/api/users/{moe}/reservations")).await;
    let reservation = reservations
        .as_array()
        .and_then(|a| a.first())
        .and_then(|r| r.get("id"))
        .and_then(Value::as_i64)
        .expect("moe has one seeded reservation");
    let before = fixture.store.reservation_count();

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/reservations/{reservation}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(fixture.store.reservation_count(), before - 1);

    // The row is gone; a second delete finds nothing.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/reservations/{reservation}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn reseeding_wipes_rows_created_after_startup() {
    let fixture = Fixture::seeded().await;
    {
        let app = fixture.app().await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/users/1/reservations")
                .set_json(json!({ "restaurantId": "1" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }
    assert_eq!(fixture.store.reservation_count(), 4);

    Seeder::new(fixture.store.clone())
        .reset_and_seed()
        .await
        .expect("second seed run succeeds");
    assert_eq!(fixture.store.reservation_count(), 3);
}

#[actix_web::test]
async fn error_responses_carry_a_trace_id() {
    let fixture = Fixture::seeded().await;
    let app = fixture.app().await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/reservations/424242")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key("trace-id"));
    let body: Value = actix_test::read_body_json(res).await;
    assert!(body.get("traceId").and_then(Value::as_str).is_some());
}
