use serde::{Deserialize, Serialize};

use super::validation::{ValidationRules, EMAIL_RULES, MESSAGE_RULES, NAME_RULES};

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Submission validates in this order.
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn rules(&self) -> &'static ValidationRules {
        match self {
            ContactField::Name => &NAME_RULES,
            ContactField::Email => &EMAIL_RULES,
            ContactField::Message => &MESSAGE_RULES,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Position in [`ContactField::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Message => 2,
        }
    }
}
