use super::CustomerId;

/// Avatar assigned to customers created without one.
pub const DEFAULT_AVATAR: &str = "assets/imgs/customer01.jpg";

/// A customer record as shown on the customers page.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
}

/// Payload for creating a new customer.
///
/// The store does not validate these fields; see [`crate::forms::CustomerForm`]
/// for the checks the dashboard runs before submitting.
#[derive(Debug, Clone, Default)]
pub struct CustomerCreate {
    pub name: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    /// `None` or an empty string falls back to the store's default avatar.
    pub avatar: Option<String>,
}

/// Partial update for an existing customer. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl CustomerCreate {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            email: email.into(),
            phone: phone.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
