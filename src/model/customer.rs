/// Represents a registered customer.
///
/// # Collection
/// This struct implements the [`Record`](crate::framework::Record) trait (see
/// [`customer_registry`](crate::customer_registry)), so it can be stored in a
/// [`CollectionActor`](crate::framework::CollectionActor).
///
/// Creates and updates both take a full [`CustomerFields`]; an update replaces every field.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<CustomerId> for u32 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    pub nic: String,
    pub mobile: String,
    pub email: String,
}

impl Customer {
    /// Creates a Customer from its id and form fields.
    pub fn new(id: CustomerId, fields: CustomerFields) -> Self {
        Self {
            id,
            name: fields.name,
            address: fields.address,
            nic: fields.nic,
            mobile: fields.mobile,
            email: fields.email,
        }
    }

    /// The editable part of the record.
    pub fn fields(&self) -> CustomerFields {
        CustomerFields {
            name: self.name.clone(),
            address: self.address.clone(),
            nic: self.nic.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
        }
    }
}

/// Payload for creating or replacing a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerFields {
    pub name: String,
    pub address: String,
    pub nic: String,
    pub mobile: String,
    pub email: String,
}

impl CustomerFields {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        nic: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            nic: nic.into(),
            mobile: mobile.into(),
            email: email.into(),
        }
    }

    /// Names of the fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("address", &self.address),
            ("nic", &self.nic),
            ("mobile", &self.mobile),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
