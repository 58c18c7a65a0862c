use tokio::sync::oneshot;

use crate::analytics::AnalyticsSummary;
use crate::domain::{
    CounterPatch, Customer, CustomerCreate, CustomerId, CustomerPatch, Order, OrderCreate, OrderId,
    OrderPatch, OrderStatus, Stats,
};
use crate::error::StoreResult;
use crate::store::{CustomerRemoval, OrderQuery};

/// Reply channel carried by every request.
pub type ServiceResponse<T> = oneshot::Sender<StoreResult<T>>;

/// Requests understood by [`crate::actors::DashboardService`]. Each
/// variant carries its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest {
    AddCustomer {
        payload: CustomerCreate,
        respond_to: ServiceResponse<Customer>,
    },
    UpdateCustomer {
        id: CustomerId,
        patch: CustomerPatch,
        respond_to: ServiceResponse<Customer>,
    },
    DeleteCustomer {
        id: CustomerId,
        respond_to: ServiceResponse<CustomerRemoval>,
    },
    AddOrder {
        payload: OrderCreate,
        respond_to: ServiceResponse<Order>,
    },
    UpdateOrder {
        id: OrderId,
        patch: OrderPatch,
        respond_to: ServiceResponse<Order>,
    },
    DeleteOrder {
        id: OrderId,
        respond_to: ServiceResponse<Order>,
    },
    UpdateCounters {
        patch: CounterPatch,
        respond_to: ServiceResponse<Stats>,
    },
    GetCustomer {
        id: CustomerId,
        respond_to: ServiceResponse<Option<Customer>>,
    },
    ListCustomers {
        respond_to: ServiceResponse<Vec<Customer>>,
    },
    ListOrders {
        respond_to: ServiceResponse<Vec<Order>>,
    },
    OrdersForCustomer {
        id: CustomerId,
        respond_to: ServiceResponse<Vec<Order>>,
    },
    OrdersByStatus {
        status: OrderStatus,
        respond_to: ServiceResponse<Vec<Order>>,
    },
    SearchCustomers {
        term: String,
        respond_to: ServiceResponse<Vec<Customer>>,
    },
    SearchOrders {
        query: OrderQuery,
        respond_to: ServiceResponse<Vec<Order>>,
    },
    TotalRevenue {
        respond_to: ServiceResponse<f64>,
    },
    PendingAmount {
        respond_to: ServiceResponse<f64>,
    },
    GetStats {
        respond_to: ServiceResponse<Stats>,
    },
    GetAnalytics {
        respond_to: ServiceResponse<AnalyticsSummary>,
    },
    Shutdown,
}
