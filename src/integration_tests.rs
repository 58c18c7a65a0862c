#[cfg(test)]
mod tests {
    use crate::app_system::DashboardSystem;
    use crate::config::StoreConfig;
    use crate::domain::{
        CustomerCreate, CustomerId, CustomerPatch, OrderCreate, OrderPatch, OrderStatus, PaymentStatus,
    };
    use crate::error::StoreError;
    use crate::forms::OrderForm;
    use crate::store::{DomainStore, OrderQuery};

    fn empty_system() -> DashboardSystem {
        DashboardSystem::with_store(DomainStore::new(), 16)
    }

    #[tokio::test]
    async fn paid_price_change_moves_earning_by_delta() {
        let system = empty_system();
        let client = &system.client;

        let order = client
            .add_order(OrderCreate::new("Star Refrigerator", 100.0, PaymentStatus::Paid, CustomerId::new(1)))
            .await
            .unwrap();
        let before = client.stats().await.unwrap();

        client.update_order(order.id, OrderPatch::price(150.0)).await.unwrap();

        let after = client.stats().await.unwrap();
        assert_eq!(after.earning - before.earning, 50.0);
        assert_eq!(after.sales, before.sales);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn due_order_marked_paid_counts_as_sale() {
        let system = empty_system();
        let client = &system.client;

        let order = client
            .add_order(OrderCreate::new("Nike Shoes", 50.0, PaymentStatus::Due, CustomerId::new(7)))
            .await
            .unwrap();
        let before = client.stats().await.unwrap();

        client
            .update_order(order.id, OrderPatch::payment(PaymentStatus::Paid))
            .await
            .unwrap();

        let after = client.stats().await.unwrap();
        assert_eq!(after.sales, before.sales + 1);
        assert_eq!(after.earning, before.earning + 50.0);
        assert_eq!(client.pending_amount().await.unwrap(), 0.0);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn customer_lifecycle_with_cascade() {
        let system = empty_system();
        let client = &system.client;

        let lena = client
            .add_customer(CustomerCreate::new("Lena", "Austria", "lena@example.com", "+43 1 234"))
            .await
            .unwrap();
        let other = client
            .add_customer(CustomerCreate::new("Omar", "Egypt", "omar@example.com", "+20 2 345"))
            .await
            .unwrap();

        let form = OrderForm {
            name: "Samsung TV".into(),
            price: "850".into(),
            customer_id: Some(lena.id),
            ..OrderForm::default()
        };
        client.add_order(form.validate().unwrap()).await.unwrap();
        client
            .add_order(OrderCreate::new("Dell Laptop", 110.0, PaymentStatus::Due, other.id))
            .await
            .unwrap();

        let renamed = client
            .update_customer(
                lena.id,
                CustomerPatch {
                    name: Some("Helena".into()),
                    ..CustomerPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Helena");
        assert_eq!(client.get_customer(lena.id).await.unwrap(), Some(renamed));

        let removal = client.delete_customer(lena.id).await.unwrap();
        assert_eq!(removal.orders.len(), 1);

        assert_eq!(client.get_customer(lena.id).await.unwrap(), None);
        assert!(client.orders_for_customer(lena.id).await.unwrap().is_empty());
        assert_eq!(client.orders_for_customer(other.id).await.unwrap().len(), 1);
        assert_eq!(client.stats().await.unwrap().earning, 0.0);
        assert_eq!(
            client.delete_customer(lena.id).await,
            Err(StoreError::CustomerNotFound(lena.id))
        );
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn demo_store_queries() {
        let system = DashboardSystem::new(&StoreConfig::default());
        let client = &system.client;

        assert_eq!(client.total_revenue().await.unwrap(), 6748.0);
        assert_eq!(client.pending_amount().await.unwrap(), 880.0);
        assert_eq!(client.orders_by_status(OrderStatus::Delivered).await.unwrap().len(), 3);
        assert_eq!(client.search_customers("ind".to_string()).await.unwrap()[0].name, "Amit");

        let shoes = client
            .search_orders(OrderQuery::search("shoes"))
            .await
            .unwrap();
        let names: Vec<&str> = shoes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Nike Shoes", "Addidas Shoes"]);

        let analytics = client.analytics().await.unwrap();
        assert_eq!(analytics.total_orders, 8);
        assert_eq!(analytics.paid_orders, 5);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_clients_never_lose_an_update() {
        let system = empty_system();

        let mut tasks = Vec::new();
        for n in 0..20u32 {
            let client = system.client.clone();
            tasks.push(tokio::spawn(async move {
                let order = client
                    .add_order(OrderCreate::new("Item", 10.0, PaymentStatus::Due, CustomerId::new(1)))
                    .await?;
                client
                    .update_order(order.id, OrderPatch::price(f64::from(n + 1)))
                    .await?;
                client
                    .update_order(order.id, OrderPatch::payment(PaymentStatus::Paid))
                    .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stats = system.client.stats().await.unwrap();
        assert_eq!(stats.sales, 20);
        assert_eq!(stats.earning, (1..=20).map(f64::from).sum::<f64>());

        let store = system.shutdown().await.unwrap();
        assert_eq!(store.order_count(), 20);
    }
}
