//! # Mock Framework
//!
//! Utilities for testing code that talks to the store through a
//! [`DashboardClient`] without running the service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then [`expect_request`] to pull the next request and answer it
//! by hand through its `respond_to` sender.

use tokio::sync::mpsc;

use crate::clients::DashboardClient;
use crate::messages::StoreRequest;

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (DashboardClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DashboardClient::new(sender), receiver)
}

/// Waits for the next request, `None` once every client is gone.
pub async fn expect_request(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<StoreRequest> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, CustomerCreate, CustomerId};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            let payload = CustomerCreate::new("Test", "Nowhere", "test@example.com", "+1");
            client.add_customer(payload).await
        });

        let Some(StoreRequest::AddCustomer { payload, respond_to }) = expect_request(&mut receiver).await else {
            panic!("Expected AddCustomer request");
        };
        assert_eq!(payload.name, "Test");
        let customer = Customer {
            id: CustomerId::new(1),
            name: payload.name,
            country: payload.country,
            email: payload.email,
            phone: payload.phone,
            avatar: "assets/imgs/customer01.jpg".to_string(),
        };
        respond_to.send(Ok(customer.clone())).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(customer));
        assert!(expect_request(&mut receiver).await.is_none());
    }
}
