use thiserror::Error;

use crate::domain::contact::ContactField;
use crate::shared::binding::EventKind;

/// Errors raised by the DOM-independent core.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid configuration JSON: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown log level `{0}`")]
    LogLevel(String),

    #[error("duplicate binding for {event:?} on `{target}`")]
    DuplicateBinding { target: String, event: EventKind },

    #[error("no error slot `{slot_id}` for field {field:?}")]
    MissingErrorSlot { field: ContactField, slot_id: String },

    #[error("delivery failed: {0}")]
    Delivery(String),
}
