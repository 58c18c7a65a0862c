//! Cloneable handle to the store service.

mod macros;

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::analytics::AnalyticsSummary;
use crate::domain::{
    CounterPatch, Customer, CustomerCreate, CustomerId, CustomerPatch, Order, OrderCreate, OrderId,
    OrderPatch, OrderStatus, Stats,
};
use crate::error::{StoreError, StoreResult};
use crate::messages::StoreRequest;
use crate::store::{CustomerRemoval, OrderQuery};
use macros::client_method;

/// Handle passed to every consumer of the store. Cheap to clone; all
/// clones talk to the same [`crate::actors::DashboardService`].
#[derive(Clone, Debug)]
pub struct DashboardClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl DashboardClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> StoreResult<()> {
        debug!("Sending shutdown request");
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|e| StoreError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(DashboardClient => fn add_customer(payload: CustomerCreate) -> Customer as StoreRequest::AddCustomer);
client_method!(DashboardClient => fn update_customer(id: CustomerId, patch: CustomerPatch) -> Customer as StoreRequest::UpdateCustomer);
client_method!(DashboardClient => fn delete_customer(id: CustomerId) -> CustomerRemoval as StoreRequest::DeleteCustomer);
client_method!(DashboardClient => fn add_order(payload: OrderCreate) -> Order as StoreRequest::AddOrder);
client_method!(DashboardClient => fn update_order(id: OrderId, patch: OrderPatch) -> Order as StoreRequest::UpdateOrder);
client_method!(DashboardClient => fn delete_order(id: OrderId) -> Order as StoreRequest::DeleteOrder);
client_method!(DashboardClient => fn update_counters(patch: CounterPatch) -> Stats as StoreRequest::UpdateCounters);
client_method!(DashboardClient => fn get_customer(id: CustomerId) -> Option<Customer> as StoreRequest::GetCustomer);
client_method!(DashboardClient => fn list_customers() -> Vec<Customer> as StoreRequest::ListCustomers);
client_method!(DashboardClient => fn list_orders() -> Vec<Order> as StoreRequest::ListOrders);
client_method!(DashboardClient => fn orders_for_customer(id: CustomerId) -> Vec<Order> as StoreRequest::OrdersForCustomer);
client_method!(DashboardClient => fn orders_by_status(status: OrderStatus) -> Vec<Order> as StoreRequest::OrdersByStatus);
client_method!(DashboardClient => fn search_customers(term: String) -> Vec<Customer> as StoreRequest::SearchCustomers);
client_method!(DashboardClient => fn search_orders(query: OrderQuery) -> Vec<Order> as StoreRequest::SearchOrders);
client_method!(DashboardClient => fn total_revenue() -> f64 as StoreRequest::TotalRevenue);
client_method!(DashboardClient => fn pending_amount() -> f64 as StoreRequest::PendingAmount);
client_method!(DashboardClient => fn stats() -> Stats as StoreRequest::GetStats);
client_method!(DashboardClient => fn analytics() -> AnalyticsSummary as StoreRequest::GetAnalytics);
