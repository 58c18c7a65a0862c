//! Demo data the dashboard starts with.

use chrono::NaiveDate;

use crate::domain::{
    Counters, Customer, CustomerId, Order, OrderId, OrderStatus, PaymentStatus,
};
use crate::store::DomainStore;

const CUSTOMERS: [(u64, &str, &str, &str, &str, &str); 8] = [
    (1, "David", "Italy", "david@example.com", "+39 123 456 789", "assets/imgs/customer02.jpg"),
    (2, "Amit", "India", "amit@example.com", "+91 987 654 321", "assets/imgs/customer01.jpg"),
    (3, "Sarah", "USA", "sarah@example.com", "+1 555 123 456", "assets/imgs/customer02.jpg"),
    (4, "John", "UK", "john@example.com", "+44 20 1234 5678", "assets/imgs/customer01.jpg"),
    (5, "Maria", "Spain", "maria@example.com", "+34 912 345 678", "assets/imgs/customer02.jpg"),
    (6, "Chen", "China", "chen@example.com", "+86 138 0013 8000", "assets/imgs/customer01.jpg"),
    (7, "Hans", "Germany", "hans@example.com", "+49 30 12345678", "assets/imgs/customer02.jpg"),
    (8, "Emma", "France", "emma@example.com", "+33 1 23 45 67 89", "assets/imgs/customer01.jpg"),
];

// (id, product, price, payment, status, customer, day of January 2024)
const ORDERS: [(u64, &str, f64, PaymentStatus, OrderStatus, u64, u32); 8] = [
    (1, "Star Refrigerator", 1200.0, PaymentStatus::Paid, OrderStatus::Delivered, 1, 15),
    (2, "Dell Laptop", 110.0, PaymentStatus::Due, OrderStatus::Pending, 2, 16),
    (3, "Apple Watch", 1200.0, PaymentStatus::Paid, OrderStatus::Return, 3, 17),
    (4, "Addidas Shoes", 620.0, PaymentStatus::Due, OrderStatus::InProgress, 4, 18),
    (5, "Samsung TV", 850.0, PaymentStatus::Paid, OrderStatus::Delivered, 5, 19),
    (6, "iPhone 15", 999.0, PaymentStatus::Paid, OrderStatus::Delivered, 6, 20),
    (7, "Nike Shoes", 150.0, PaymentStatus::Due, OrderStatus::Pending, 7, 21),
    (8, "MacBook Pro", 2499.0, PaymentStatus::Paid, OrderStatus::InProgress, 8, 22),
];

pub const DEMO_COUNTERS: Counters = Counters {
    page_views: 1504,
    comments: 284,
};

/// Loads the demo customers, orders and counters into `store`.
pub fn load_demo(store: &mut DomainStore) {
    for (id, name, country, email, phone, avatar) in CUSTOMERS {
        store.insert_customer(Customer {
            id: CustomerId::new(id),
            name: name.to_string(),
            country: country.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            avatar: avatar.to_string(),
        });
    }

    for (id, name, price, payment, status, customer, day) in ORDERS {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 1, day) else {
            continue;
        };
        store.insert_order(Order {
            id: OrderId::new(id),
            name: name.to_string(),
            price,
            payment,
            status,
            customer_id: CustomerId::new(customer),
            date,
        });
    }
}

/// A fresh store holding the demo data.
pub fn demo_store() -> DomainStore {
    let mut store = DomainStore::new().with_counters(DEMO_COUNTERS);
    load_demo(&mut store);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_has_every_fixture() {
        let store = demo_store();
        assert_eq!(store.customer_count(), 8);
        assert_eq!(store.order_count(), 8);
        assert_eq!(store.customer(CustomerId::new(6)).unwrap().country, "China");

        let stats = store.stats();
        assert_eq!(stats.page_views, 1504);
        assert_eq!(stats.comments, 284);
        assert_eq!(stats.sales, 5);
        assert_eq!(stats.earning, 6748.0);
    }

    #[test]
    fn every_demo_order_has_an_owner() {
        let store = demo_store();
        assert!(store.orders().all(|order| store.customer(order.customer_id).is_some()));
    }

    #[test]
    fn new_records_sort_after_demo_records() {
        let mut store = demo_store();
        let added = store.add_customer(crate::domain::CustomerCreate::new(
            "Lena", "Austria", "lena@example.com", "+43 1 234",
        ));
        assert_eq!(store.customers().last().map(|c| c.id), Some(added.id));
    }
}
