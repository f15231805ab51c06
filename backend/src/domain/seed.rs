//! Startup seeding: destructive reset and deterministic repopulation.
//!
//! Every run wipes the schema and reinserts a fixed demo dataset. The
//! procedure is meant to execute once at process startup; a failure is
//! fatal there, and no partial seed is considered valid.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::try_join_all;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{SeedPersistenceError, SeedRepository};
use crate::domain::{Reservation, Restaurant, User};

/// Fixed restaurant dataset: name and `[longitude, latitude]`.
const SEED_RESTAURANTS: &[(&str, [f64; 2])] = &[
    ("Raos", [-73.932, 40.794]),
    ("Masa", [-73.98, 40.7685]),
    ("Bouley", [-74.01394, 40.705137]),
    ("Marc Forgione", [-74.009567, 40.716526]),
    ("Tamarind", [-74.008929, 40.718977]),
    ("Hop Lee Restaurant", [-73.998509, 40.71423]),
    ("Jungsik", [-74.0089, 40.718679]),
    ("The Capital Grille", [-74.010846, 40.708475]),
    ("Pylos", [-73.984152, 40.726096]),
    ("Joe's Shanghai", [-73.997761, 40.714601]),
    ("Cafe Katja", [-73.990565, 40.717719]),
    ("Rosanjin", [-74.007724, 40.716403]),
    ("Kittichai", [-74.003242, 40.724014]),
    ("Bianca Restaurant", [-73.992662, 40.725495]),
    ("Rayuela", [-73.989756, 40.721266]),
    ("Mas Farmhouse", [-74.003875, 40.729269]),
    ("Xe Lua", [-73.998626, 40.716544]),
];

/// Fixed user dataset.
const SEED_USERS: &[&str] = &["moe", "lucy", "larry"];

/// Fixed reservations as (user name, restaurant name) pairs. Resolved
/// against the records captured during this run, never through the store.
const SEED_RESERVATIONS: &[(&str, &str)] = &[
    ("moe", "Tamarind"),
    ("lucy", "Tamarind"),
    ("lucy", "Rayuela"),
];

/// Records created by a completed seed run.
///
/// Users and restaurants are keyed by name for the demo's convenience;
/// the fixed dataset has distinct names, so the maps are unambiguous.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// Seeded users, keyed by name.
    pub users: HashMap<String, User>,
    /// Seeded restaurants, keyed by name.
    pub restaurants: HashMap<String, Restaurant>,
    /// Seeded reservations, in dataset order.
    pub reservations: Vec<Reservation>,
}

/// Errors returned while executing a seed run.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// A schema reset or insertion failed; the whole run is aborted.
    #[error("seeding aborted: {0}")]
    Persistence(#[from] SeedPersistenceError),
    /// The fixed reservation dataset references a name that was never
    /// inserted. Indicates a defect in the dataset itself.
    #[error("seed dataset references unknown name: {name}")]
    UnknownSeedName {
        /// The unresolved user or restaurant name.
        name: String,
    },
}

/// Orchestrates the clean-slate seed run over a [`SeedRepository`].
pub struct Seeder {
    repository: Arc<dyn SeedRepository>,
}

impl Seeder {
    /// Create a seeder backed by the given repository.
    pub fn new(repository: Arc<dyn SeedRepository>) -> Self {
        Self { repository }
    }

    /// Wipe the schema and repopulate it from the fixed dataset.
    ///
    /// Restaurant and user insertions fan out concurrently within their
    /// step; reservations run only after both completed, because they
    /// depend on the generated ids. Any individual failure aborts the
    /// run — there are no retries and no partial-seed recovery.
    pub async fn reset_and_seed(&self) -> Result<SeedOutcome, SeedingError> {
        self.repository.recreate_schema().await?;

        let restaurants = try_join_all(SEED_RESTAURANTS.iter().map(|(name, location)| {
            self.repository.insert_restaurant(name, location.to_vec())
        }))
        .await?;
        let restaurants: HashMap<String, Restaurant> = restaurants
            .into_iter()
            .map(|restaurant| (restaurant.name().to_owned(), restaurant))
            .collect();

        let users =
            try_join_all(SEED_USERS.iter().map(|name| self.repository.insert_user(name))).await?;
        let users: HashMap<String, User> = users
            .into_iter()
            .map(|user| (user.name().to_owned(), user))
            .collect();

        // Foreign keys come from the records captured above, so duplicate
        // names in a future dataset could never make resolution ambiguous.
        let pairs = SEED_RESERVATIONS
            .iter()
            .map(|&(user_name, restaurant_name)| {
                let user_id = users
                    .get(user_name)
                    .ok_or_else(|| SeedingError::UnknownSeedName {
                        name: user_name.to_owned(),
                    })?
                    .id();
                let restaurant_id = restaurants
                    .get(restaurant_name)
                    .ok_or_else(|| SeedingError::UnknownSeedName {
                        name: restaurant_name.to_owned(),
                    })?
                    .id();
                Ok((user_id, restaurant_id))
            })
            .collect::<Result<Vec<_>, SeedingError>>()?;

        let reservations = try_join_all(
            pairs
                .into_iter()
                .map(|(user_id, restaurant_id)| {
                    self.repository.insert_reservation(user_id, restaurant_id)
                }),
        )
        .await?;

        info!(
            users = users.len(),
            restaurants = restaurants.len(),
            reservations = reservations.len(),
            "database reset and seeded"
        );

        Ok(SeedOutcome {
            users,
            restaurants,
            reservations,
        })
    }
}
