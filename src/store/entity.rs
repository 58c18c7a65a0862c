//! Lifecycle hooks shared by every record kind the store holds.

use std::fmt::{Debug, Display};

use chrono::NaiveDate;

use crate::domain::{
    Customer, CustomerCreate, CustomerId, CustomerPatch, Order, OrderCreate, OrderId, OrderPatch,
};

/// Values the store fills in when a record is created.
#[derive(Debug, Clone, Copy)]
pub struct CreateContext<'a> {
    pub today: NaiveDate,
    pub default_avatar: &'a str,
}

/// Trait that any record must implement to live in a [`super::Collection`].
pub trait Entity: Clone + Debug + Send + 'static {
    type Id: Copy + Ord + Display + Debug + From<u64> + Send;
    type CreatePayload: Debug + Send;
    type Patch: Debug + Send;

    fn id(&self) -> Self::Id;

    /// Construct the full record from the assigned id and the payload.
    fn from_create(id: Self::Id, payload: Self::CreatePayload, ctx: CreateContext<'_>) -> Self;

    /// Merge the fields present in `patch`.
    fn on_update(&mut self, patch: Self::Patch);
}

impl Entity for Customer {
    type Id = CustomerId;
    type CreatePayload = CustomerCreate;
    type Patch = CustomerPatch;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn from_create(id: CustomerId, payload: CustomerCreate, ctx: CreateContext<'_>) -> Self {
        let avatar = payload
            .avatar
            .filter(|avatar| !avatar.is_empty())
            .unwrap_or_else(|| ctx.default_avatar.to_string());

        Self {
            id,
            name: payload.name,
            country: payload.country,
            email: payload.email,
            phone: payload.phone,
            avatar,
        }
    }

    fn on_update(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
    }
}

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = OrderCreate;
    type Patch = OrderPatch;

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_create(id: OrderId, payload: OrderCreate, ctx: CreateContext<'_>) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
            payment: payload.payment,
            status: payload.status,
            customer_id: payload.customer_id,
            date: ctx.today,
        }
    }

    fn on_update(&mut self, patch: OrderPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(payment) = patch.payment {
            self.payment = payment;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
    }
}
