//! Placeholder delivery step: acknowledge the visitor and log the payload.

use contracts::domain::contact::{ContactDelivery, ContactMessage};
use contracts::ContractError;
use web_sys::Window;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We will get back to you soon.";

pub struct AcknowledgeDelivery {
    window: Window,
}

impl AcknowledgeDelivery {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ContactDelivery for AcknowledgeDelivery {
    fn deliver(&mut self, message: &ContactMessage) -> Result<(), ContractError> {
        let payload =
            serde_json::to_string(message).map_err(|e| ContractError::Delivery(e.to_string()))?;
        log::info!("Form validation passed. Submitting {}", payload);

        self.window
            .alert_with_message(ACKNOWLEDGEMENT)
            .map_err(|e| ContractError::Delivery(format!("{:?}", e)))
    }
}
