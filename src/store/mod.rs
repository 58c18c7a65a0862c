//! The in-memory domain store: customers, orders and dashboard counters.
//!
//! `DomainStore` is a plain single-owner struct. Sales and earning are
//! never stored; [`DomainStore::stats`] derives them from the orders on
//! every call, so no sequence of updates can make them disagree with the
//! order collection.

mod collection;
mod entity;
mod query;

#[cfg(test)]
mod properties;

pub use collection::Collection;
pub use entity::{CreateContext, Entity};
pub use query::OrderQuery;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    id, Counters, CounterPatch, Customer, CustomerCreate, CustomerId, CustomerPatch, Order,
    OrderCreate, OrderId, OrderPatch, OrderStatus, PaymentStatus, Stats, DEFAULT_AVATAR,
};
use crate::error::{StoreError, StoreResult};
use query::Needle;

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;
type IdSource = Box<dyn Fn() -> u64 + Send + Sync>;

/// What a cascading customer delete removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRemoval {
    pub customer: Customer,
    pub orders: Vec<Order>,
}

pub struct DomainStore {
    customers: Collection<Customer>,
    orders: Collection<Order>,
    counters: Counters,
    default_avatar: String,
    today_fn: Clock,
    next_id_fn: IdSource,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DomainStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainStore")
            .field("customers", &self.customers.len())
            .field("orders", &self.orders.len())
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}

impl DomainStore {
    pub fn new() -> Self {
        Self {
            customers: Collection::default(),
            orders: Collection::default(),
            counters: Counters::default(),
            default_avatar: DEFAULT_AVATAR.to_string(),
            today_fn: Box::new(|| chrono::Utc::now().date_naive()),
            next_id_fn: Box::new(id::next_id),
        }
    }

    pub fn with_default_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.default_avatar = avatar.into();
        self
    }

    /// Replaces the source of new customer and order ids.
    pub fn with_id_source(mut self, next_id: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        self.next_id_fn = Box::new(next_id);
        self
    }

    /// Replaces the clock used to date new orders. The default is the UTC
    /// calendar day.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today_fn = Box::new(today);
        self
    }

    pub fn with_counters(mut self, counters: Counters) -> Self {
        self.counters = counters;
        self
    }

    fn create_context(&self) -> CreateContext<'_> {
        CreateContext {
            today: (self.today_fn)(),
            default_avatar: &self.default_avatar,
        }
    }

    // --- Customers ---

    pub fn add_customer(&mut self, payload: CustomerCreate) -> Customer {
        let id = CustomerId::from((self.next_id_fn)());
        let customer = Customer::from_create(id, payload, self.create_context());
        self.customers.insert(customer.clone());
        customer
    }

    pub fn update_customer(&mut self, id: CustomerId, patch: CustomerPatch) -> StoreResult<Customer> {
        self.customers
            .update(id, patch)
            .cloned()
            .ok_or(StoreError::CustomerNotFound(id))
    }

    /// Removes the customer and every order that references it.
    pub fn delete_customer(&mut self, id: CustomerId) -> StoreResult<CustomerRemoval> {
        let customer = self
            .customers
            .remove(id)
            .ok_or(StoreError::CustomerNotFound(id))?;
        let orders = self.orders.remove_where(|order| order.customer_id == id);
        debug!(customer_id = %id, removed_orders = orders.len(), "Cascaded customer delete");

        Ok(CustomerRemoval { customer, orders })
    }

    // --- Orders ---

    pub fn add_order(&mut self, payload: OrderCreate) -> Order {
        let id = OrderId::from((self.next_id_fn)());
        let order = Order::from_create(id, payload, self.create_context());
        self.orders.insert(order.clone());
        order
    }

    pub fn update_order(&mut self, id: OrderId, patch: OrderPatch) -> StoreResult<Order> {
        self.orders
            .update(id, patch)
            .cloned()
            .ok_or(StoreError::OrderNotFound(id))
    }

    pub fn delete_order(&mut self, id: OrderId) -> StoreResult<Order> {
        self.orders.remove(id).ok_or(StoreError::OrderNotFound(id))
    }

    // --- Counters ---

    pub fn update_counters(&mut self, patch: CounterPatch) -> Stats {
        self.counters.apply(patch);
        self.stats()
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    // --- Seeding ---

    /// Inserts a fully formed customer, keeping its id. Used for fixture data.
    pub fn insert_customer(&mut self, customer: Customer) {
        self.customers.insert(customer);
    }

    /// Inserts a fully formed order, keeping its id and date.
    pub fn insert_order(&mut self, order: Order) {
        self.orders.insert(order);
    }

    // --- Queries ---

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(id)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn orders_for_customer(&self, id: CustomerId) -> Vec<&Order> {
        self.orders.iter().filter(|order| order.customer_id == id).collect()
    }

    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|order| order.status == status).collect()
    }

    pub fn orders_by_payment(&self, payment: PaymentStatus) -> Vec<&Order> {
        self.orders.iter().filter(|order| order.payment == payment).collect()
    }

    /// Sum of price over Paid orders.
    pub fn total_revenue(&self) -> f64 {
        self.sum_where(PaymentStatus::Paid)
    }

    /// Sum of price over Due orders.
    pub fn pending_amount(&self) -> f64 {
        self.sum_where(PaymentStatus::Due)
    }

    fn sum_where(&self, payment: PaymentStatus) -> f64 {
        self.orders
            .iter()
            .filter(|order| order.payment == payment)
            .map(|order| order.price)
            .sum()
    }

    pub fn stats(&self) -> Stats {
        let sales = self.orders.iter().filter(|order| order.is_paid()).count() as u64;
        Stats {
            page_views: self.counters.page_views,
            sales,
            comments: self.counters.comments,
            earning: self.total_revenue(),
        }
    }

    /// Customers whose name, country or email contains `term`, ignoring case.
    pub fn search_customers(&self, term: &str) -> Vec<&Customer> {
        let needle = Needle::new(term);
        self.customers
            .iter()
            .filter(|customer| needle.matches_customer(customer))
            .collect()
    }

    /// Orders matching `query`, newest first.
    pub fn search_orders(&self, query: &OrderQuery) -> Vec<&Order> {
        let needle = Needle::new(&query.search);
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| query.status.map_or(true, |status| order.status == status))
            .filter(|order| {
                needle.matches(&order.name)
                    || self
                        .customer(order.customer_id)
                        .is_some_and(|customer| needle.matches(&customer.name))
            })
            .collect();

        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders
    }
}
