//! Hand-off of a validated contact message.

use serde::{Deserialize, Serialize};

use super::field::ContactField;
use crate::ContractError;

/// Payload handed to the delivery step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// Receives a message once every field has passed validation.
pub trait ContactDelivery {
    fn deliver(&mut self, message: &ContactMessage) -> Result<(), ContractError>;
}
