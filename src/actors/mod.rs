//! The task that owns the [`DomainStore`] and serves requests one at a time.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::analytics::AnalyticsSummary;
use crate::clients::DashboardClient;
use crate::domain::{
    CounterPatch, Customer, CustomerCreate, CustomerId, CustomerPatch, Order, OrderCreate, OrderId,
    OrderPatch, OrderStatus, Stats,
};
use crate::messages::{ServiceResponse, StoreRequest};
use crate::store::{CustomerRemoval, DomainStore, OrderQuery};

/// Single owner of the store. Requests run to completion in arrival order,
/// so no two mutations ever interleave.
pub struct DashboardService {
    receiver: mpsc::Receiver<StoreRequest>,
    store: DomainStore,
}

impl DashboardService {
    pub fn new(buffer_size: usize, store: DomainStore) -> (Self, DashboardClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = DashboardClient::new(sender);
        (service, client)
    }

    /// Serves requests until `Shutdown` arrives or every client is dropped,
    /// then hands the store back.
    #[instrument(name = "dashboard_service", skip(self))]
    pub async fn run(mut self) -> DomainStore {
        info!(customers = self.store.customer_count(), orders = self.store.order_count(), "DashboardService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::AddCustomer { payload, respond_to } => {
                    self.handle_add_customer(payload, respond_to);
                }
                StoreRequest::UpdateCustomer { id, patch, respond_to } => {
                    self.handle_update_customer(id, patch, respond_to);
                }
                StoreRequest::DeleteCustomer { id, respond_to } => {
                    self.handle_delete_customer(id, respond_to);
                }
                StoreRequest::AddOrder { payload, respond_to } => {
                    self.handle_add_order(payload, respond_to);
                }
                StoreRequest::UpdateOrder { id, patch, respond_to } => {
                    self.handle_update_order(id, patch, respond_to);
                }
                StoreRequest::DeleteOrder { id, respond_to } => {
                    self.handle_delete_order(id, respond_to);
                }
                StoreRequest::UpdateCounters { patch, respond_to } => {
                    self.handle_update_counters(patch, respond_to);
                }
                StoreRequest::GetCustomer { id, respond_to } => {
                    self.handle_get_customer(id, respond_to);
                }
                StoreRequest::ListCustomers { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.customers().cloned().collect()));
                }
                StoreRequest::ListOrders { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.orders().cloned().collect()));
                }
                StoreRequest::OrdersForCustomer { id, respond_to } => {
                    let orders = self.store.orders_for_customer(id).into_iter().cloned().collect();
                    let _ = respond_to.send(Ok(orders));
                }
                StoreRequest::OrdersByStatus { status, respond_to } => {
                    self.handle_orders_by_status(status, respond_to);
                }
                StoreRequest::SearchCustomers { term, respond_to } => {
                    let customers = self.store.search_customers(&term).into_iter().cloned().collect();
                    let _ = respond_to.send(Ok(customers));
                }
                StoreRequest::SearchOrders { query, respond_to } => {
                    self.handle_search_orders(query, respond_to);
                }
                StoreRequest::TotalRevenue { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.total_revenue()));
                }
                StoreRequest::PendingAmount { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.pending_amount()));
                }
                StoreRequest::GetStats { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.stats()));
                }
                StoreRequest::GetAnalytics { respond_to } => {
                    self.handle_get_analytics(respond_to);
                }
                StoreRequest::Shutdown => {
                    info!("DashboardService shutting down");
                    break;
                }
            }
        }

        info!("DashboardService stopped");
        self.store
    }

    #[instrument(fields(customer_name = %payload.name, customer_country = %payload.country), skip(self, payload, respond_to))]
    fn handle_add_customer(&mut self, payload: CustomerCreate, respond_to: ServiceResponse<Customer>) {
        debug!("Processing add_customer request");
        let customer = self.store.add_customer(payload);
        info!(customer_id = %customer.id, "Customer created");
        let _ = respond_to.send(Ok(customer));
    }

    #[instrument(fields(customer_id = %id), skip(self, patch, respond_to))]
    fn handle_update_customer(&mut self, id: CustomerId, patch: CustomerPatch, respond_to: ServiceResponse<Customer>) {
        debug!("Processing update_customer request");
        let result = self.store.update_customer(id, patch);
        match &result {
            Ok(_) => info!("Customer updated"),
            Err(e) => warn!(error = %e, "Customer update rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(customer_id = %id), skip(self, respond_to))]
    fn handle_delete_customer(&mut self, id: CustomerId, respond_to: ServiceResponse<CustomerRemoval>) {
        debug!("Processing delete_customer request");
        let result = self.store.delete_customer(id);
        match &result {
            Ok(removal) => info!(removed_orders = removal.orders.len(), "Customer deleted"),
            Err(e) => warn!(error = %e, "Customer delete rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(
        fields(customer_id = %payload.customer_id, price = %payload.price, payment = %payload.payment),
        skip(self, payload, respond_to)
    )]
    fn handle_add_order(&mut self, payload: OrderCreate, respond_to: ServiceResponse<Order>) {
        debug!("Processing add_order request");
        let order = self.store.add_order(payload);
        info!(order_id = %order.id, date = %order.date, "Order created");
        let _ = respond_to.send(Ok(order));
    }

    #[instrument(fields(order_id = %id), skip(self, patch, respond_to))]
    fn handle_update_order(&mut self, id: OrderId, patch: OrderPatch, respond_to: ServiceResponse<Order>) {
        debug!(?patch, "Processing update_order request");
        let result = self.store.update_order(id, patch);
        match &result {
            Ok(order) => info!(payment = %order.payment, status = %order.status, price = %order.price, "Order updated"),
            Err(e) => warn!(error = %e, "Order update rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_delete_order(&mut self, id: OrderId, respond_to: ServiceResponse<Order>) {
        debug!("Processing delete_order request");
        let result = self.store.delete_order(id);
        match &result {
            Ok(order) => info!(was_paid = order.is_paid(), "Order deleted"),
            Err(e) => warn!(error = %e, "Order delete rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_update_counters(&mut self, patch: CounterPatch, respond_to: ServiceResponse<Stats>) {
        debug!("Processing update_counters request");
        let stats = self.store.update_counters(patch);
        info!(page_views = stats.page_views, comments = stats.comments, "Counters updated");
        let _ = respond_to.send(Ok(stats));
    }

    #[instrument(fields(customer_id = %id), skip(self, respond_to))]
    fn handle_get_customer(&self, id: CustomerId, respond_to: ServiceResponse<Option<Customer>>) {
        debug!("Processing get_customer request");
        let customer = self.store.customer(id).cloned();
        match &customer {
            Some(customer) => debug!(customer_name = %customer.name, "Customer found"),
            None => debug!("Customer not found"),
        }
        let _ = respond_to.send(Ok(customer));
    }

    #[instrument(fields(status = %status), skip(self, respond_to))]
    fn handle_orders_by_status(&self, status: OrderStatus, respond_to: ServiceResponse<Vec<Order>>) {
        let orders: Vec<Order> = self.store.orders_by_status(status).into_iter().cloned().collect();
        debug!(order_count = orders.len(), "Listed orders by status");
        let _ = respond_to.send(Ok(orders));
    }

    #[instrument(fields(search = %query.search, status = ?query.status), skip(self, query, respond_to))]
    fn handle_search_orders(&self, query: OrderQuery, respond_to: ServiceResponse<Vec<Order>>) {
        let orders: Vec<Order> = self.store.search_orders(&query).into_iter().cloned().collect();
        debug!(order_count = orders.len(), "Searched orders");
        let _ = respond_to.send(Ok(orders));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_analytics(&self, respond_to: ServiceResponse<AnalyticsSummary>) {
        let summary = AnalyticsSummary::from_store(&self.store);
        debug!(total_orders = summary.total_orders, total_revenue = summary.total_revenue, "Computed analytics");
        let _ = respond_to.send(Ok(summary));
    }
}
