//! Port abstraction for reading user records.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "user query failed: {message}",
    }
}

/// Read access to the users table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user row, in storage order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
