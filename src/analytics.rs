//! Read-only summary behind the analytics page.

use std::collections::BTreeMap;

use crate::domain::{OrderStatus, PaymentStatus};
use crate::store::DomainStore;

/// Order counts per fulfillment status, always covering every status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts(BTreeMap<OrderStatus, usize>);

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderStatus, usize)> + '_ {
        self.0.iter().map(|(status, count)| (*status, *count))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub status_counts: StatusCounts,
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub paid_orders: usize,
    pub due_orders: usize,
    /// Revenue divided by the number of Paid orders, zero when there are none.
    pub average_order_value: f64,
    /// Paid revenue keyed by `YYYY-MM`, in month order.
    pub monthly_revenue: BTreeMap<String, f64>,
    pub total_customers: usize,
    pub total_orders: usize,
}

impl AnalyticsSummary {
    pub fn from_store(store: &DomainStore) -> Self {
        let status_counts = StatusCounts(
            OrderStatus::ALL
                .into_iter()
                .map(|status| (status, store.orders_by_status(status).len()))
                .collect(),
        );

        let total_revenue = store.total_revenue();
        let paid_orders = store.orders_by_payment(PaymentStatus::Paid).len();
        let due_orders = store.orders_by_payment(PaymentStatus::Due).len();
        let average_order_value = if paid_orders == 0 {
            0.0
        } else {
            total_revenue / paid_orders as f64
        };

        let mut monthly_revenue = BTreeMap::new();
        for order in store.orders().filter(|order| order.is_paid()) {
            let month = order.date.format("%Y-%m").to_string();
            *monthly_revenue.entry(month).or_insert(0.0) += order.price;
        }

        Self {
            status_counts,
            total_revenue,
            pending_amount: store.pending_amount(),
            paid_orders,
            due_orders,
            average_order_value,
            monthly_revenue,
            total_customers: store.customer_count(),
            total_orders: store.order_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn summarises_demo_data() {
        let summary = AnalyticsSummary::from_store(&seed::demo_store());

        assert_eq!(summary.status_counts.get(OrderStatus::Pending), 2);
        assert_eq!(summary.status_counts.get(OrderStatus::InProgress), 2);
        assert_eq!(summary.status_counts.get(OrderStatus::Delivered), 3);
        assert_eq!(summary.status_counts.get(OrderStatus::Return), 1);
        assert_eq!(summary.total_revenue, 6748.0);
        assert_eq!(summary.pending_amount, 880.0);
        assert_eq!(summary.paid_orders, 5);
        assert_eq!(summary.due_orders, 3);
        assert_eq!(summary.average_order_value, 6748.0 / 5.0);
        assert_eq!(summary.monthly_revenue.get("2024-01"), Some(&6748.0));
        assert_eq!(summary.total_customers, 8);
        assert_eq!(summary.total_orders, 8);
    }

    #[test]
    fn empty_store_has_zero_average() {
        let summary = AnalyticsSummary::from_store(&DomainStore::new());

        assert_eq!(summary.average_order_value, 0.0);
        assert!(summary.monthly_revenue.is_empty());
        assert_eq!(summary.status_counts.iter().count(), 4);
        assert!(summary.status_counts.iter().all(|(_, count)| count == 0));
    }
}
