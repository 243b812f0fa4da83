//! Inline error display next to form fields.

use contracts::domain::contact::{FieldFeedback, SlotUpdate};
use contracts::shared::config::DomContract;
use web_sys::Element;

use crate::dom::classes::{describe, has_class, set_class};

pub struct ErrorPresenter {
    invalid_class: String,
    show_class: String,
}

impl ErrorPresenter {
    pub fn new(contract: &DomContract) -> Self {
        Self {
            invalid_class: contract.invalid_class.clone(),
            show_class: contract.show_class.clone(),
        }
    }

    pub fn is_invalid(&self, input: &Element) -> bool {
        has_class(input, &self.invalid_class)
    }

    pub fn show_error(&self, input: &Element, slot: &Element, message: &str) {
        set_class(input, &self.invalid_class, true);
        slot.set_text_content(Some(message));
        set_class(slot, &self.show_class, true);
        log::debug!("Validation error for {}: {}", describe(input), message);
    }

    pub fn clear_error(&self, input: &Element, slot: &Element) {
        set_class(input, &self.invalid_class, false);
        slot.set_text_content(Some(""));
        set_class(slot, &self.show_class, false);
    }

    pub fn update(&self, input: &Element, slot: &Element, update: SlotUpdate) {
        match update {
            SlotUpdate::Show(message) => self.show_error(input, slot, message),
            SlotUpdate::Clear => self.clear_error(input, slot),
        }
    }

    /// Render a check result. Unchecked fields have no slot and stay untouched.
    pub fn apply(&self, input: &Element, slot: Option<&Element>, feedback: FieldFeedback) {
        if let (Some(slot), Some(update)) = (slot, feedback.slot_update()) {
            self.update(input, slot, update);
        }
    }
}
