//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod reservation_repository;
mod restaurant_repository;
mod seed_repository;
mod user_repository;

#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
pub use reservation_repository::{ReservationPersistenceError, ReservationRepository};
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::{RestaurantPersistenceError, RestaurantRepository};
#[cfg(test)]
pub use seed_repository::MockSeedRepository;
pub use seed_repository::{SeedPersistenceError, SeedRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
