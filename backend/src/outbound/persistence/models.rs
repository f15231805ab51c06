//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Reservation, ReservationId, Restaurant, RestaurantId, User, UserId};

use super::schema::{reservations, restaurants, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.name, row.created_at)
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
}

/// Row struct for reading from the restaurants table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RestaurantRow {
    pub id: i32,
    pub name: String,
    pub location: Vec<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant::new(
            RestaurantId::new(row.id),
            row.name,
            row.location,
            row.created_at,
        )
    }
}

/// Insertable struct for creating new restaurant records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = restaurants)]
pub(crate) struct NewRestaurantRow<'a> {
    pub name: &'a str,
    pub location: &'a [f64],
}

/// Row struct for reading from the reservations table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReservationRow {
    pub id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation::new(
            ReservationId::new(row.id),
            UserId::new(row.user_id),
            RestaurantId::new(row.restaurant_id),
            row.created_at,
        )
    }
}

/// Insertable struct for creating new reservation records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservations)]
pub(crate) struct NewReservationRow {
    pub user_id: i32,
    pub restaurant_id: i32,
}
