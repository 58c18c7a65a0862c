//! # dashboard-store
//!
//! In-memory domain store behind an admin dashboard: customers, orders and
//! the headline stats derived from them.
//!
//! - **Domain types** - plain records → [`domain`]
//! - **Store** - synchronous single-owner core → [`store::DomainStore`]
//! - **Service** - a task that owns the store and serves requests in order → [`actors::DashboardService`]
//! - **Client** - cloneable handle handed to consumers → [`clients::DashboardClient`]
//! - **System** - startup and shutdown → [`app_system::DashboardSystem`]
//!
//! ```no_run
//! # use dashboard_store::{app_system::DashboardSystem, config::StoreConfig};
//! # use dashboard_store::domain::{CustomerCreate, OrderCreate, PaymentStatus};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = DashboardSystem::new(&StoreConfig::from_env()?);
//!
//! let customer = system
//!     .client
//!     .add_customer(CustomerCreate::new("Lena", "Austria", "lena@example.com", "+43 1 234"))
//!     .await?;
//! system
//!     .client
//!     .add_order(OrderCreate::new("Samsung TV", 850.0, PaymentStatus::Paid, customer.id))
//!     .await?;
//!
//! let stats = system.client.stats().await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actors;
pub mod analytics;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod messages;
pub mod seed;
pub mod store;
pub mod telemetry;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;
