//! DOM contract: every selector, id, class and attribute name the page
//! markup must provide.
//!
//! Defaults match the portfolio page. A page can override any subset of the
//! fields with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "strict_error_slots": true, "log_level": "info" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::contact::ContactField;
use crate::ContractError;

/// Id of the inline JSON element holding configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomContract {
    // Menu
    pub menu_toggle_id: String,
    pub main_nav_id: String,
    pub nav_link_selector: String,

    // Smooth scrolling
    pub fragment_link_selector: String,

    // Project filter
    pub filter_button_selector: String,
    pub project_selector: String,
    pub filter_attr: String,
    pub category_attr: String,

    // Contact form
    pub form_selector: String,
    pub name_input_id: String,
    pub email_input_id: String,
    pub message_input_id: String,
    pub error_slot_suffix: String,

    // Shared class / attribute names
    pub active_class: String,
    pub hidden_class: String,
    pub invalid_class: String,
    pub show_class: String,
    pub expanded_attr: String,
    pub pressed_attr: String,

    /// Treat a missing error slot as a configuration error instead of
    /// letting the field pass validation unchecked.
    pub strict_error_slots: bool,
    pub log_level: String,
}

impl Default for DomContract {
    fn default() -> Self {
        Self {
            menu_toggle_id: "menu-toggle".to_string(),
            main_nav_id: "main-nav".to_string(),
            nav_link_selector: ".main-nav a".to_string(),
            fragment_link_selector: "a[href^=\"#\"]".to_string(),
            filter_button_selector: ".filter-btn[data-filter]".to_string(),
            project_selector: ".project".to_string(),
            filter_attr: "data-filter".to_string(),
            category_attr: "data-category".to_string(),
            form_selector: "form".to_string(),
            name_input_id: "contact-name".to_string(),
            email_input_id: "contact-email".to_string(),
            message_input_id: "contact-message".to_string(),
            error_slot_suffix: "-error".to_string(),
            active_class: "active".to_string(),
            hidden_class: "hidden".to_string(),
            invalid_class: "invalid".to_string(),
            show_class: "show".to_string(),
            expanded_attr: "aria-expanded".to_string(),
            pressed_attr: "aria-pressed".to_string(),
            strict_error_slots: false,
            log_level: "debug".to_string(),
        }
    }
}

impl DomContract {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, ContractError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn input_id(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name_input_id,
            ContactField::Email => &self.email_input_id,
            ContactField::Message => &self.message_input_id,
        }
    }

    /// Error slots are found by naming convention: `{input id}{suffix}`.
    pub fn error_slot_id(&self, field: ContactField) -> String {
        format!("{}{}", self.input_id(field), self.error_slot_suffix)
    }

    /// In strict mode every contact field must have its error slot.
    pub fn check_error_slots(&self, missing: &[ContactField]) -> Result<(), ContractError> {
        match missing.first() {
            Some(field) if self.strict_error_slots => Err(ContractError::MissingErrorSlot {
                field: *field,
                slot_id: self.error_slot_id(*field),
            }),
            _ => Ok(()),
        }
    }

    pub fn log_level(&self) -> Result<log::Level, ContractError> {
        self.log_level
            .parse()
            .map_err(|_| ContractError::LogLevel(self.log_level.clone()))
    }
}
