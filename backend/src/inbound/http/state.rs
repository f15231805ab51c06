//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ReservationRepository, RestaurantRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read access to users.
    pub users: Arc<dyn UserRepository>,
    /// Read access to restaurants.
    pub restaurants: Arc<dyn RestaurantRepository>,
    /// Reservation reads and mutations.
    pub reservations: Arc<dyn ReservationRepository>,
}

impl HttpState {
    /// Bundle the port implementations handlers depend on.
    pub fn new(
        users: Arc<dyn UserRepository>,
        restaurants: Arc<dyn RestaurantRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            users,
            restaurants,
            reservations,
        }
    }
}
