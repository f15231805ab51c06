//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the DDL applied by the seeding adapter
//! exactly. They are used by Diesel for compile-time query validation and
//! type-safe SQL generation.

diesel::table! {
    /// Application users.
    users (id) {
        /// Primary key: serial integer identifier.
        id -> Int4,
        /// Display name; duplicates are permitted.
        name -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Bookable restaurants.
    restaurants (id) {
        /// Primary key: serial integer identifier.
        id -> Int4,
        /// Restaurant name; duplicates are permitted.
        name -> Text,
        /// Longitude/latitude pair; empty when unknown.
        location -> Array<Float8>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Reservations linking one user to one restaurant.
    reservations (id) {
        /// Primary key: serial integer identifier.
        id -> Int4,
        /// Owning user; enforced by foreign key.
        user_id -> Int4,
        /// Booked restaurant; enforced by foreign key.
        restaurant_id -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(reservations -> users (user_id));
diesel::joinable!(reservations -> restaurants (restaurant_id));

diesel::allow_tables_to_appear_in_same_query!(users, restaurants, reservations);
