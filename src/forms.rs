//! Input checks the customer and order forms run before calling the store.
//!
//! The store accepts any payload; these forms are the only place that
//! rejects blank fields, malformed emails or non-positive prices.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{CustomerCreate, CustomerId, OrderCreate, OrderStatus, PaymentStatus};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Raw customer form input.
#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub name: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
}

impl CustomerForm {
    pub fn validate(self) -> Result<CustomerCreate, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if self.country.trim().is_empty() {
            errors.add("country", "Country is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.add("email", "Invalid email format");
        }
        if self.phone.trim().is_empty() {
            errors.add("phone", "Phone is required");
        }

        let avatar = (!self.avatar.is_empty()).then_some(self.avatar);
        errors.into_result(CustomerCreate {
            name: self.name,
            country: self.country,
            email: self.email,
            phone: self.phone,
            avatar,
        })
    }
}

/// Raw order form input. `price` is the text typed into the price field.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub name: String,
    pub price: String,
    pub payment: PaymentStatus,
    pub status: OrderStatus,
    pub customer_id: Option<CustomerId>,
}

impl OrderForm {
    pub fn validate(self) -> Result<OrderCreate, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.add("name", "Product name is required");
        }

        let price = self.price.trim().parse::<f64>().ok().filter(|p| *p > 0.0 && p.is_finite());
        if price.is_none() {
            errors.add("price", "Valid price is required");
        }

        if self.customer_id.is_none() {
            errors.add("customerId", "Customer is required");
        }

        match (price, self.customer_id) {
            (Some(price), Some(customer_id)) if errors.is_empty() => Ok(OrderCreate {
                name: self.name,
                price,
                payment: self.payment,
                status: self.status,
                customer_id,
            }),
            _ => Err(errors),
        }
    }
}
