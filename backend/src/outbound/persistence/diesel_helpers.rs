//! Shared helpers for Diesel repository implementations.
//!
//! Each repository port carries its own error enum, so the adapters first
//! classify pool and Diesel failures into [`StoreError`] and then convert
//! that into the port-specific type at the call site.

use tracing::debug;

use super::pool::PoolError;

/// Store failure classification shared by every Diesel adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreError {
    /// The store could not be reached or the connection dropped.
    Connection(String),
    /// The statement executed but failed.
    Query(String),
    /// A foreign key constraint rejected the statement.
    ForeignKey(String),
}

/// Classify pool errors; both variants mean the store is unreachable.
pub(crate) fn classify_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::Connection(message)
        }
    }
}

/// Classify Diesel errors, logging the raw failure for operators.
pub(crate) fn classify_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                error = %error_message,
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StoreError::ForeignKey(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StoreError::Connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => StoreError::Query(info.message().to_owned()),
        _ => StoreError::Query(error_message),
    }
}
