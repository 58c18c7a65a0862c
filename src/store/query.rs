//! Search filters used by the customers and orders pages.

use crate::domain::{Customer, OrderStatus};

/// Filter for the orders list.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    /// Matched case-insensitively against the product name and the owning
    /// customer's name. Empty matches everything.
    pub search: String,
    /// `None` shows every status.
    pub status: Option<OrderStatus>,
}

impl OrderQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Lowercased search term. An empty needle matches everything.
pub(crate) struct Needle(String);

impl Needle {
    pub(crate) fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    pub(crate) fn matches(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    pub(crate) fn matches_customer(&self, customer: &Customer) -> bool {
        self.matches(&customer.name) || self.matches(&customer.country) || self.matches(&customer.email)
    }
}
