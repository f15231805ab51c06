//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests and the
//! `test-support` feature.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    ReservationPersistenceError, ReservationRepository, RestaurantPersistenceError,
    RestaurantRepository, SeedPersistenceError, SeedRepository, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Reservation, ReservationId, Restaurant, RestaurantId, User, UserId};

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    restaurants: Vec<Restaurant>,
    reservations: Vec<Reservation>,
    /// Names whose next insert fails, emulating a mid-seed store error.
    poisoned_names: HashSet<String>,
}

/// In-memory implementation of every persistence port.
///
/// Behaves like the PostgreSQL adapters as far as the domain can tell:
/// serial ids restart from 1 after a schema wipe, reservation creation
/// enforces both foreign keys, and deletion reports whether a row
/// matched.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next user or restaurant insert with this name fail.
    pub fn fail_next_insert(&self, name: &str) {
        self.state
            .lock()
            .expect("state lock")
            .poisoned_names
            .insert(name.to_owned());
    }

    /// Number of reservations currently held.
    pub fn reservation_count(&self) -> usize {
        self.state.lock().expect("state lock").reservations.len()
    }

    fn take_poison(&self, name: &str) -> bool {
        self.state
            .lock()
            .expect("state lock")
            .poisoned_names
            .remove(name)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.state.lock().expect("state lock").users.clone())
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Restaurant>, RestaurantPersistenceError> {
        Ok(self.state.lock().expect("state lock").restaurants.clone())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Reservation>, ReservationPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .reservations
            .iter()
            .filter(|reservation| reservation.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Reservation, ReservationPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if !state.users.iter().any(|user| user.id() == user_id) {
            return Err(ReservationPersistenceError::invalid_reference(format!(
                "user {user_id} does not exist"
            )));
        }
        if !state
            .restaurants
            .iter()
            .any(|restaurant| restaurant.id() == restaurant_id)
        {
            return Err(ReservationPersistenceError::invalid_reference(format!(
                "restaurant {restaurant_id} does not exist"
            )));
        }

        let id = ReservationId::new(
            state
                .reservations
                .iter()
                .map(|reservation| reservation.id().as_i32())
                .max()
                .unwrap_or(0)
                + 1,
        );
        let reservation = Reservation::new(id, user_id, restaurant_id, Utc::now());
        state.reservations.push(reservation.clone());
        Ok(reservation)
    }

    async fn delete(&self, id: ReservationId) -> Result<(), ReservationPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        let before = state.reservations.len();
        state.reservations.retain(|reservation| reservation.id() != id);
        if state.reservations.len() == before {
            return Err(ReservationPersistenceError::not_found());
        }
        Ok(())
    }
}

#[async_trait]
impl SeedRepository for InMemoryStore {
    async fn recreate_schema(&self) -> Result<(), SeedPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.users.clear();
        state.restaurants.clear();
        state.reservations.clear();
        Ok(())
    }

    async fn insert_restaurant(
        &self,
        name: &str,
        location: Vec<f64>,
    ) -> Result<Restaurant, SeedPersistenceError> {
        if self.take_poison(name) {
            return Err(SeedPersistenceError::query(format!(
                "insert of {name} failed"
            )));
        }
        let mut state = self.state.lock().expect("state lock");
        let id = RestaurantId::new(state.restaurants.len() as i32 + 1);
        let restaurant = Restaurant::new(id, name, location, Utc::now());
        state.restaurants.push(restaurant.clone());
        Ok(restaurant)
    }

    async fn insert_user(&self, name: &str) -> Result<User, SeedPersistenceError> {
        if self.take_poison(name) {
            return Err(SeedPersistenceError::query(format!(
                "insert of {name} failed"
            )));
        }
        let mut state = self.state.lock().expect("state lock");
        let id = UserId::new(state.users.len() as i32 + 1);
        let user = User::new(id, name, Utc::now());
        state.users.push(user.clone());
        Ok(user)
    }

    async fn insert_reservation(
        &self,
        user_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Reservation, SeedPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        let id = ReservationId::new(state.reservations.len() as i32 + 1);
        let reservation = Reservation::new(id, user_id, restaurant_id, Utc::now());
        state.reservations.push(reservation.clone());
        Ok(reservation)
    }
}
