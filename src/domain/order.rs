use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::{CustomerId, OrderId};

/// Whether an order has been paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    #[default]
    Paid,
    Due,
}

/// Fulfillment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Delivered,
    Return,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Delivered,
        OrderStatus::Return,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "inProgress",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Return => "return",
        }
    }
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Due => "Due",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseStatusError {
    kind: &'static str,
    value: String,
}

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError {
                kind: "order status",
                value: s.to_string(),
            })
    }
}

impl FromStr for PaymentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(PaymentStatus::Paid),
            "Due" => Ok(PaymentStatus::Due),
            _ => Err(ParseStatusError {
                kind: "payment status",
                value: s.to_string(),
            }),
        }
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Product name.
    pub name: String,
    pub price: f64,
    pub payment: PaymentStatus,
    pub status: OrderStatus,
    pub customer_id: CustomerId,
    /// Set once at creation.
    pub date: NaiveDate,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.payment.is_paid()
    }
}

/// Payload for creating a new order. The store assigns the id and date.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub name: String,
    pub price: f64,
    pub payment: PaymentStatus,
    pub status: OrderStatus,
    pub customer_id: CustomerId,
}

/// Partial update for an existing order. The date is not patchable.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub payment: Option<PaymentStatus>,
    pub status: Option<OrderStatus>,
    pub customer_id: Option<CustomerId>,
}

impl OrderCreate {
    pub fn new(name: impl Into<String>, price: f64, payment: PaymentStatus, customer_id: CustomerId) -> Self {
        Self {
            name: name.into(),
            price,
            payment,
            status: OrderStatus::default(),
            customer_id,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

impl OrderPatch {
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn payment(payment: PaymentStatus) -> Self {
        Self {
            payment: Some(payment),
            ..Self::default()
        }
    }

    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
