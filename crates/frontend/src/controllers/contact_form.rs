//! Contact form: per-field validation on blur/input and the submit gate.

use std::cell::RefCell;

use contracts::domain::contact::{
    ContactDelivery, ContactField, ContactForm, ContactMessage, SubmitVerdict,
};
use contracts::shared::config::DomContract;
use contracts::ContractError;
use web_sys::{Element, Event, HtmlFormElement};

use super::error_presenter::ErrorPresenter;
use crate::dom::classes::field_value;

pub struct ContactFormController {
    form: HtmlFormElement,
    inputs: [Element; 3],
    slots: [Option<Element>; 3],
    presenter: ErrorPresenter,
    state: RefCell<ContactForm>,
    delivery: RefCell<Box<dyn ContactDelivery>>,
}

impl ContactFormController {
    /// Fails only in strict mode, when a field has no error slot.
    pub fn new(
        form: HtmlFormElement,
        inputs: [Element; 3],
        slots: [Option<Element>; 3],
        contract: &DomContract,
        delivery: Box<dyn ContactDelivery>,
    ) -> Result<Self, ContractError> {
        let missing: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|field| slots[field.index()].is_none())
            .collect();

        contract.check_error_slots(&missing)?;
        for field in &missing {
            log::warn!(
                "Error element not found for {}, field will not be validated",
                contract.input_id(*field)
            );
        }

        Ok(Self {
            form,
            inputs,
            slots,
            presenter: ErrorPresenter::new(contract),
            state: RefCell::new(ContactForm::new(&missing)),
            delivery: RefCell::new(delivery),
        })
    }

    fn input(&self, field: ContactField) -> &Element {
        &self.inputs[field.index()]
    }

    fn slot(&self, field: ContactField) -> Option<&Element> {
        self.slots[field.index()].as_ref()
    }

    pub fn on_blur(&self, field: ContactField) {
        let value = field_value(self.input(field));
        // Browsers may blur the focused input while the acknowledgement
        // dialog of a submit is open; that submit already validated everything.
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        let feedback = state.on_blur(field, &value);
        self.presenter.apply(self.input(field), self.slot(field), feedback);
    }

    pub fn on_input(&self, field: ContactField) {
        let input = self.input(field);
        let currently_invalid = self.presenter.is_invalid(input);
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        if let Some(feedback) = state.on_input(field, &field_value(input), currently_invalid) {
            self.presenter.apply(input, self.slot(field), feedback);
        }
    }

    pub fn on_submit(&self, event: &Event) {
        event.prevent_default();
        log::info!("Form submission attempted");

        let message = ContactMessage {
            name: field_value(self.input(ContactField::Name)),
            email: field_value(self.input(ContactField::Email)),
            message: field_value(self.input(ContactField::Message)),
        };

        let outcome = {
            let mut state = self.state.borrow_mut();
            let mut delivery = self.delivery.borrow_mut();
            state.submit(&message, &mut **delivery)
        };

        let updates = self.state.borrow().slot_updates(&outcome);
        for (field, update) in updates {
            if let Some(slot) = self.slot(field) {
                self.presenter.update(self.input(field), slot, update);
            }
        }

        match outcome.verdict {
            SubmitVerdict::Delivered => {
                self.form.reset();
                self.state.borrow_mut().reset();
                log::info!("Form submitted and reset");
            }
            SubmitVerdict::Blocked => {
                log::info!("Form validation failed. Please correct errors.");
            }
            SubmitVerdict::DeliveryFailed(err) => {
                log::error!("Form could not be submitted: {}", err);
            }
        }
    }
}
