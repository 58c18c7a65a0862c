//! System startup and shutdown.

pub mod dashboard_system;

pub use dashboard_system::*;
