//! Business records held by the store. Plain data, no store concerns.

pub mod customer;
pub mod id;
pub mod order;
pub mod stats;

pub use customer::*;
pub use id::*;
pub use order::*;
pub use stats::*;
