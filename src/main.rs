use tracing::{error, info, warn, Instrument};

use dashboard_store::app_system::DashboardSystem;
use dashboard_store::config::StoreConfig;
use dashboard_store::domain::{CounterPatch, CustomerId, OrderPatch, OrderStatus, PaymentStatus};
use dashboard_store::forms::{CustomerForm, OrderForm};
use dashboard_store::store::OrderQuery;
use dashboard_store::telemetry::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(?config, "Starting dashboard store");

    let system = DashboardSystem::new(&config);
    let client = system.client.clone();

    let span = tracing::info_span!("customer_creation");
    let customer = async {
        let form = CustomerForm {
            name: "Lena".into(),
            country: "Austria".into(),
            email: "lena@example.com".into(),
            phone: "+43 1 234 5678".into(),
            avatar: String::new(),
        };
        let payload = form.validate()?;
        Ok::<_, Box<dyn std::error::Error>>(client.add_customer(payload).await?)
    }
    .instrument(span)
    .await?;
    info!(customer_id = %customer.id, "Customer created");

    let rejected = OrderForm {
        name: "Dell Laptop".into(),
        price: "-5".into(),
        ..OrderForm::default()
    };
    if let Err(errors) = rejected.validate() {
        warn!(%errors, "Order form rejected");
    }

    let span = tracing::info_span!("order_processing");
    let order = async {
        let form = OrderForm {
            name: "Samsung TV".into(),
            price: "850".into(),
            payment: PaymentStatus::Due,
            customer_id: Some(customer.id),
            ..OrderForm::default()
        };
        let order = client.add_order(form.validate()?).await?;
        let order = client
            .update_order(
                order.id,
                OrderPatch {
                    payment: Some(PaymentStatus::Paid),
                    status: Some(OrderStatus::InProgress),
                    ..OrderPatch::default()
                },
            )
            .await?;
        Ok::<_, Box<dyn std::error::Error>>(order)
    }
    .instrument(span)
    .await?;
    info!(order_id = %order.id, payment = %order.payment, "Order processed");

    let stats = client
        .update_counters(CounterPatch {
            page_views: Some(1505),
            comments: None,
        })
        .await?;
    info!(sales = stats.sales, earning = stats.earning, page_views = stats.page_views, "Current stats");

    let pending = client.search_orders(OrderQuery::default().with_status(OrderStatus::Pending)).await?;
    info!(pending_orders = pending.len(), "Pending orders");

    let analytics = client.analytics().await?;
    for (status, count) in analytics.status_counts.iter() {
        info!(%status, count, "Orders by status");
    }
    for (month, revenue) in &analytics.monthly_revenue {
        info!(%month, revenue, "Monthly revenue");
    }
    info!(
        total_revenue = analytics.total_revenue,
        pending_amount = analytics.pending_amount,
        average_order_value = analytics.average_order_value,
        "Analytics computed"
    );

    match client.delete_customer(CustomerId::new(0)).await {
        Ok(_) => warn!("Deleted a customer that should not exist"),
        Err(e) => info!(error = %e, "Unknown customer rejected as expected"),
    }

    let removal = client.delete_customer(customer.id).await?;
    info!(removed_orders = removal.orders.len(), "Customer removed");

    drop(client);
    match system.shutdown().await {
        Ok(store) => info!(customers = store.customer_count(), orders = store.order_count(), "Application completed successfully"),
        Err(e) => error!(error = %e, "Shutdown failed"),
    }
    Ok(())
}
