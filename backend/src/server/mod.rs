//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::reservations::delete_reservation;
use crate::inbound::http::restaurants::list_restaurants;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_reservation, list_user_reservations, list_users};
use crate::middleware::Trace;
use crate::outbound::persistence::{
    DieselReservationRepository, DieselRestaurantRepository, DieselUserRepository,
};

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(DieselUserRepository::new(config.db_pool.clone())),
        Arc::new(DieselRestaurantRepository::new(config.db_pool.clone())),
        Arc::new(DieselReservationRepository::new(config.db_pool.clone())),
    ))
}

/// Assemble the application with all routes and middleware.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_users)
        .service(list_restaurants)
        .service(list_user_reservations)
        .service(create_reservation)
        .service(delete_reservation);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::InMemoryStore;
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::Value;

    fn in_memory_http_state() -> web::Data<HttpState> {
        let store = Arc::new(InMemoryStore::new());
        web::Data::new(HttpState::new(store.clone(), store.clone(), store))
    }

    #[actix_web::test]
    async fn routes_are_mounted_under_api_scope() {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        let app =
            actix_test::init_service(build_app(health_state, in_memory_http_state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/users").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert!(body.is_array());
    }

    #[actix_web::test]
    async fn health_probes_are_mounted_at_the_root() {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        let app =
            actix_test::init_service(build_app(health_state, in_memory_http_state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
