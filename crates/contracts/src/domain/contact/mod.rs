pub mod delivery;
pub mod field;
pub mod form;
pub mod validation;

pub use delivery::{ContactDelivery, ContactMessage};
pub use field::ContactField;
pub use form::{
    ContactForm, FieldFeedback, FormPhase, SlotUpdate, SubmitOutcome, SubmitVerdict,
};
pub use validation::{is_valid_email, is_valid_message, is_valid_name, ValidationRules};
