use proptest::prelude::*;

use super::DomainStore;
use crate::domain::{CustomerCreate, CustomerId, OrderCreate, OrderId, OrderPatch, PaymentStatus};

fn payment() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![Just(PaymentStatus::Paid), Just(PaymentStatus::Due)]
}

// Whole-cent prices keep the float sums exact.
fn price() -> impl Strategy<Value = f64> {
    (0u32..500_000).prop_map(|cents| f64::from(cents) / 100.0)
}

#[derive(Debug, Clone)]
enum Op {
    Add(f64, PaymentStatus),
    SetPrice(usize, f64),
    SetPayment(usize, PaymentStatus),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (price(), payment()).prop_map(|(p, pay)| Op::Add(p, pay)),
        (any::<usize>(), price()).prop_map(|(i, p)| Op::SetPrice(i, p)),
        (any::<usize>(), payment()).prop_map(|(i, pay)| Op::SetPayment(i, pay)),
        any::<usize>().prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn revenue_is_sum_of_paid_prices(prices in proptest::collection::vec(price(), 0..40)) {
        let mut store = DomainStore::new();
        let owner = CustomerId::new(1);
        for p in &prices {
            store.add_order(OrderCreate::new("Item", *p, PaymentStatus::Paid, owner));
        }

        let expected: f64 = prices.iter().sum();
        prop_assert!((store.total_revenue() - expected).abs() < 1e-6);
        prop_assert_eq!(store.stats().sales, prices.len() as u64);
    }

    #[test]
    fn stats_track_orders_through_any_edit_sequence(ops in proptest::collection::vec(op(), 0..60)) {
        let mut store = DomainStore::new();
        let owner = CustomerId::new(1);
        let mut live: Vec<OrderId> = Vec::new();

        for op in ops {
            match op {
                Op::Add(p, pay) => live.push(store.add_order(OrderCreate::new("Item", p, pay, owner)).id),
                Op::SetPrice(i, p) if !live.is_empty() => {
                    let id = live[i % live.len()];
                    prop_assert!(store.update_order(id, OrderPatch::price(p)).is_ok());
                }
                Op::SetPayment(i, pay) if !live.is_empty() => {
                    let id = live[i % live.len()];
                    prop_assert!(store.update_order(id, OrderPatch::payment(pay)).is_ok());
                }
                Op::Delete(i) if !live.is_empty() => {
                    let id = live.remove(i % live.len());
                    prop_assert!(store.delete_order(id).is_ok());
                }
                _ => {}
            }
        }

        let paid: Vec<f64> = store.orders().filter(|o| o.is_paid()).map(|o| o.price).collect();
        let stats = store.stats();
        prop_assert_eq!(stats.sales, paid.len() as u64);
        prop_assert!((stats.earning - paid.iter().sum::<f64>()).abs() < 1e-6);
        prop_assert_eq!(store.order_count(), live.len());
    }

    #[test]
    fn cascade_delete_touches_only_the_target(owners in proptest::collection::vec(0usize..4, 0..30), target in 0usize..4) {
        let mut store = DomainStore::new();
        let customers: Vec<CustomerId> = (0..4)
            .map(|n| store.add_customer(CustomerCreate::new(format!("c{n}"), "X", "c@example.com", "1")).id)
            .collect();
        for owner in &owners {
            store.add_order(OrderCreate::new("Item", 1.0, PaymentStatus::Due, customers[*owner]));
        }

        let removal = store.delete_customer(customers[target]).unwrap();

        let expected_removed = owners.iter().filter(|o| **o == target).count();
        prop_assert_eq!(removal.orders.len(), expected_removed);
        prop_assert_eq!(store.order_count(), owners.len() - expected_removed);
        prop_assert_eq!(store.customer_count(), 3);
        prop_assert!(store.orders().all(|o| o.customer_id != customers[target]));
    }

    #[test]
    fn assigned_ids_are_unique(n in 1usize..200) {
        let mut store = DomainStore::new();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..n {
            prop_assert!(ids.insert(store.add_customer(CustomerCreate::default()).id.as_u64()));
            prop_assert!(ids.insert(store.add_order(OrderCreate::new("Item", 1.0, PaymentStatus::Due, CustomerId::new(1))).id.as_u64()));
        }
    }
}
