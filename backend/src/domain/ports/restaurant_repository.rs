//! Port abstraction for reading restaurant records.

use async_trait::async_trait;

use crate::domain::Restaurant;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by restaurant repository adapters.
    pub enum RestaurantPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "restaurant store connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "restaurant query failed: {message}",
    }
}

/// Read access to the restaurants table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// List every restaurant row, in storage order.
    async fn list(&self) -> Result<Vec<Restaurant>, RestaurantPersistenceError>;
}
