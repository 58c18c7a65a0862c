use thiserror::Error;

use crate::domain::{CustomerId, OrderId};

/// Errors surfaced by store operations and the client handle.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
