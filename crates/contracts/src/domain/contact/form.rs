//! Contact form state machine.
//!
//! ```text
//! Pristine ──blur/input──▶ Touched ──submit──▶ ValidationFailed
//!     ▲                                   └──▶ ValidationPassed ──▶ Submitted
//!     └──────────────────────── reset ───────────────────────────────┘
//! ```
//!
//! The machine decides what each field should display; applying the
//! decision to the page is the caller's job.

use super::delivery::{ContactDelivery, ContactMessage};
use super::field::ContactField;
use crate::ContractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Pristine,
    Touched,
    ValidationFailed,
    ValidationPassed,
    Submitted,
}

/// What a field should show after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFeedback {
    Valid,
    Invalid(&'static str),
    /// The field has no error slot, so it is never checked and always passes.
    Unchecked,
}

impl FieldFeedback {
    pub fn passes(&self) -> bool {
        !matches!(self, FieldFeedback::Invalid(_))
    }

    /// Change to the field's error slot, if any.
    pub fn slot_update(&self) -> Option<SlotUpdate> {
        match self {
            FieldFeedback::Valid => Some(SlotUpdate::Clear),
            FieldFeedback::Invalid(message) => Some(SlotUpdate::Show(message)),
            FieldFeedback::Unchecked => None,
        }
    }
}

/// Change applied to one error slot and its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotUpdate {
    Show(&'static str),
    Clear,
}

#[derive(Debug)]
pub enum SubmitVerdict {
    /// At least one field failed; nothing was delivered.
    Blocked,
    /// Delivered; the caller resets the form and clears every error.
    Delivered,
    /// Every field passed but the delivery step refused the message.
    DeliveryFailed(ContractError),
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub feedback: [(ContactField, FieldFeedback); 3],
    pub verdict: SubmitVerdict,
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self.verdict, SubmitVerdict::Delivered)
    }

    pub fn feedback_for(&self, field: ContactField) -> FieldFeedback {
        self.feedback[field.index()].1
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    phase: FormPhase,
    missing_slots: [bool; 3],
}

impl ContactForm {
    /// `missing_slots` lists fields whose error slot is absent from the page.
    pub fn new(missing_slots: &[ContactField]) -> Self {
        let mut form = Self::default();
        for field in missing_slots {
            form.missing_slots[field.index()] = true;
        }
        form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn has_error_slot(&self, field: ContactField) -> bool {
        !self.missing_slots[field.index()]
    }

    /// The page form has been cleared after a delivery.
    pub fn reset(&mut self) {
        self.phase = FormPhase::Pristine;
    }

    /// Error slot changes after a submit, for fields that have a slot.
    /// A delivered message clears every one of them.
    pub fn slot_updates(&self, outcome: &SubmitOutcome) -> Vec<(ContactField, SlotUpdate)> {
        outcome
            .feedback
            .iter()
            .filter(|(field, _)| self.has_error_slot(*field))
            .filter_map(|(field, feedback)| {
                let update = if outcome.is_delivered() {
                    SlotUpdate::Clear
                } else {
                    feedback.slot_update()?
                };
                Some((*field, update))
            })
            .collect()
    }

    /// Run the field's rules against its current value.
    pub fn check(&self, field: ContactField, value: &str) -> FieldFeedback {
        if !self.has_error_slot(field) {
            log::warn!("Error slot not found for {}, skipping validation", field.label());
            return FieldFeedback::Unchecked;
        }
        match field.rules().validate(value) {
            Ok(()) => FieldFeedback::Valid,
            Err(message) => FieldFeedback::Invalid(message),
        }
    }

    /// The field lost focus.
    pub fn on_blur(&mut self, field: ContactField, value: &str) -> FieldFeedback {
        self.phase = FormPhase::Touched;
        self.check(field, value)
    }

    /// The field was edited. Only a field currently shown as invalid is
    /// re-checked, so errors disappear while typing but never appear early.
    pub fn on_input(
        &mut self,
        field: ContactField,
        value: &str,
        currently_invalid: bool,
    ) -> Option<FieldFeedback> {
        if !currently_invalid {
            return None;
        }
        self.phase = FormPhase::Touched;
        Some(self.check(field, value))
    }

    /// Validate every field and deliver when all of them pass.
    pub fn submit<D>(&mut self, message: &ContactMessage, delivery: &mut D) -> SubmitOutcome
    where
        D: ContactDelivery + ?Sized,
    {
        let feedback =
            ContactField::ALL.map(|field| (field, self.check(field, message.get(field))));

        if !feedback.iter().all(|(_, f)| f.passes()) {
            self.phase = FormPhase::ValidationFailed;
            return SubmitOutcome {
                feedback,
                verdict: SubmitVerdict::Blocked,
            };
        }

        self.phase = FormPhase::ValidationPassed;
        let verdict = match delivery.deliver(message) {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
                SubmitVerdict::Delivered
            }
            Err(err) => {
                self.phase = FormPhase::Touched;
                SubmitVerdict::DeliveryFailed(err)
            }
        };

        SubmitOutcome { feedback, verdict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        delivered: Vec<ContactMessage>,
        fail: bool,
    }

    impl ContactDelivery for Recorder {
        fn deliver(&mut self, message: &ContactMessage) -> Result<(), ContractError> {
            if self.fail {
                return Err(ContractError::Delivery("offline".to_string()));
            }
            self.delivered.push(message.clone());
            Ok(())
        }
    }

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_delivered() {
        let mut form = ContactForm::new(&[]);
        let mut delivery = Recorder::default();
        let payload = message("Al", "al@x.co", "1234567890");

        let outcome = form.submit(&payload, &mut delivery);

        assert!(outcome.is_delivered());
        assert!(outcome.feedback.iter().all(|(_, f)| *f == FieldFeedback::Valid));
        assert_eq!(delivery.delivered, vec![payload]);
        assert_eq!(form.phase(), FormPhase::Submitted);

        form.reset();
        assert_eq!(form.phase(), FormPhase::Pristine);
    }

    #[test]
    fn test_short_name_blocks_submission() {
        let mut form = ContactForm::new(&[]);
        let mut delivery = Recorder::default();

        let outcome = form.submit(&message("A", "al@x.co", "1234567890"), &mut delivery);

        assert!(matches!(outcome.verdict, SubmitVerdict::Blocked));
        assert_eq!(
            outcome.feedback_for(ContactField::Name),
            FieldFeedback::Invalid("Name must be at least 2 characters long")
        );
        assert_eq!(outcome.feedback_for(ContactField::Email), FieldFeedback::Valid);
        assert_eq!(outcome.feedback_for(ContactField::Message), FieldFeedback::Valid);
        assert!(delivery.delivered.is_empty());
        assert_eq!(form.phase(), FormPhase::ValidationFailed);
    }

    #[test]
    fn test_every_field_checked_on_submit() {
        let mut form = ContactForm::new(&[]);
        let outcome = form.submit(&message("A", "nope", "short"), &mut Recorder::default());
        assert!(outcome.feedback.iter().all(|(_, f)| !f.passes()));
    }

    #[test]
    fn test_blur_marks_touched() {
        let mut form = ContactForm::new(&[]);
        assert_eq!(form.phase(), FormPhase::Pristine);
        assert_eq!(
            form.on_blur(ContactField::Email, "a@b"),
            FieldFeedback::Invalid("Please enter a valid email address")
        );
        assert_eq!(form.phase(), FormPhase::Touched);
    }

    #[test]
    fn test_input_only_rechecks_invalid_fields() {
        let mut form = ContactForm::new(&[]);
        assert_eq!(form.on_input(ContactField::Name, "A", false), None);
        assert_eq!(form.phase(), FormPhase::Pristine);
        assert_eq!(
            form.on_input(ContactField::Name, "Al", true),
            Some(FieldFeedback::Valid)
        );
    }

    #[test]
    fn test_missing_slot_field_is_unchecked() {
        let mut form = ContactForm::new(&[ContactField::Message]);
        let mut delivery = Recorder::default();

        let outcome = form.submit(&message("Al", "al@x.co", ""), &mut delivery);

        assert_eq!(outcome.feedback_for(ContactField::Message), FieldFeedback::Unchecked);
        assert!(outcome.is_delivered());
        assert!(!form.has_error_slot(ContactField::Message));
        assert!(form.has_error_slot(ContactField::Name));
    }

    #[test]
    fn test_delivery_failure_keeps_form() {
        let mut form = ContactForm::new(&[]);
        let mut delivery = Recorder {
            fail: true,
            ..Recorder::default()
        };

        let outcome = form.submit(&message("Al", "al@x.co", "1234567890"), &mut delivery);

        assert!(matches!(outcome.verdict, SubmitVerdict::DeliveryFailed(_)));
        assert_eq!(form.phase(), FormPhase::Touched);
    }

    #[test]
    fn test_delivered_submit_clears_every_slot() {
        let mut form = ContactForm::new(&[]);
        let payload = message("Al", "al@x.co", "1234567890");
        let outcome = form.submit(&payload, &mut Recorder::default());

        assert_eq!(
            form.slot_updates(&outcome),
            vec![
                (ContactField::Name, SlotUpdate::Clear),
                (ContactField::Email, SlotUpdate::Clear),
                (ContactField::Message, SlotUpdate::Clear),
            ]
        );
    }

    #[test]
    fn test_blocked_submit_shows_only_failing_fields() {
        let mut form = ContactForm::new(&[]);
        let outcome = form.submit(&message("A", "al@x.co", "1234567890"), &mut Recorder::default());

        assert_eq!(
            form.slot_updates(&outcome),
            vec![
                (ContactField::Name, SlotUpdate::Show("Name must be at least 2 characters long")),
                (ContactField::Email, SlotUpdate::Clear),
                (ContactField::Message, SlotUpdate::Clear),
            ]
        );
    }

    #[test]
    fn test_slot_updates_skip_fields_without_slot() {
        let mut form = ContactForm::new(&[ContactField::Email]);
        let outcome = form.submit(&message("Al", "", "1234567890"), &mut Recorder::default());

        let updates = form.slot_updates(&outcome);
        assert!(outcome.is_delivered());
        assert_eq!(updates.len(), 2);
        assert!(updates.iter().all(|(field, _)| *field != ContactField::Email));
    }

    #[test]
    fn test_failed_delivery_keeps_computed_slots() {
        let mut form = ContactForm::new(&[]);
        let mut delivery = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let outcome = form.submit(&message("Al", "al@x.co", "1234567890"), &mut delivery);

        assert!(!outcome.is_delivered());
        assert!(form
            .slot_updates(&outcome)
            .iter()
            .all(|(_, update)| *update == SlotUpdate::Clear));
    }
}
