//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// A guest who can hold reservations.
///
/// Immutable once created; users only come into existence during
/// seeding. Serialises camelCase, e.g.
/// `{"id":1,"name":"moe","createdAt":"2026-01-01T00:00:00Z"}`.
///
/// Names carry no uniqueness constraint; duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a user from persisted values.
    pub fn new(id: UserId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }

    /// Stable identifier.
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Row creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
