//! Declarative event binding table.
//!
//! Every listener the page installs is one [`Binding`] row. The table is
//! built once from the [`DomContract`] and walked by the frontend, so the
//! full binding surface can be inspected and tested without a browser.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::domain::contact::ContactField;
use crate::shared::config::DomContract;
use crate::ContractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    Blur,
    Input,
    Submit,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Blur => "blur",
            EventKind::Input => "input",
            EventKind::Submit => "submit",
        }
    }
}

/// Which element(s) a row attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum BindingTarget {
    /// Single element by id.
    Id(String),
    /// First element matching a selector.
    First(String),
    /// Every element matching a selector.
    All(String),
}

impl fmt::Display for BindingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingTarget::Id(id) => write!(f, "#{id}"),
            BindingTarget::First(selector) => write!(f, "first {selector}"),
            BindingTarget::All(selector) => write!(f, "all {selector}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Handler {
    ToggleMenu,
    CloseMenu,
    SmoothScroll,
    ApplyFilter,
    ValidateField(ContactField),
    RevalidateField(ContactField),
    SubmitContact,
}

/// Component a handler belongs to; used for the startup report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Component {
    Menu,
    Scroll,
    Filter,
    ContactForm,
}

impl Handler {
    pub fn component(&self) -> Component {
        match self {
            Handler::ToggleMenu | Handler::CloseMenu => Component::Menu,
            Handler::SmoothScroll => Component::Scroll,
            Handler::ApplyFilter => Component::Filter,
            Handler::ValidateField(_) | Handler::RevalidateField(_) | Handler::SubmitContact => {
                Component::ContactForm
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub target: BindingTarget,
    pub event: EventKind,
    pub handler: Handler,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BindingTable {
    rows: Vec<Binding>,
}

impl BindingTable {
    /// The standard table for the portfolio page.
    pub fn standard(contract: &DomContract) -> Self {
        let mut table = Self::default();

        table.push(
            BindingTarget::Id(contract.menu_toggle_id.clone()),
            EventKind::Click,
            Handler::ToggleMenu,
        );
        table.push(
            BindingTarget::All(contract.nav_link_selector.clone()),
            EventKind::Click,
            Handler::CloseMenu,
        );
        table.push(
            BindingTarget::All(contract.fragment_link_selector.clone()),
            EventKind::Click,
            Handler::SmoothScroll,
        );
        table.push(
            BindingTarget::All(contract.filter_button_selector.clone()),
            EventKind::Click,
            Handler::ApplyFilter,
        );

        for field in ContactField::ALL {
            let input = BindingTarget::Id(contract.input_id(field).to_string());
            table.push(input.clone(), EventKind::Blur, Handler::ValidateField(field));
            table.push(input, EventKind::Input, Handler::RevalidateField(field));
        }

        table.push(
            BindingTarget::First(contract.form_selector.clone()),
            EventKind::Submit,
            Handler::SubmitContact,
        );

        table
    }

    pub fn push(&mut self, target: BindingTarget, event: EventKind, handler: Handler) {
        self.rows.push(Binding { target, event, handler });
    }

    pub fn rows(&self) -> &[Binding] {
        &self.rows
    }

    /// Rows belonging to one component.
    pub fn for_component(&self, component: Component) -> impl Iterator<Item = &Binding> {
        self.rows
            .iter()
            .filter(move |row| row.handler.component() == component)
    }

    /// Each target may carry at most one handler per event type.
    ///
    /// Only identical targets are compared; overlapping selectors (a nav link
    /// that is also a fragment link) are distinct rows on purpose.
    pub fn validate(&self) -> Result<(), ContractError> {
        let mut seen = HashSet::new();
        for row in &self.rows {
            if !seen.insert((&row.target, row.event)) {
                return Err(ContractError::DuplicateBinding {
                    target: row.target.to_string(),
                    event: row.event,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_shape() {
        let table = BindingTable::standard(&DomContract::default());
        // toggle + nav links + fragments + filters + 3 fields * 2 + submit
        assert_eq!(table.rows().len(), 11);
        assert_eq!(table.for_component(Component::Menu).count(), 2);
        assert_eq!(table.for_component(Component::Scroll).count(), 1);
        assert_eq!(table.for_component(Component::Filter).count(), 1);
        assert_eq!(table.for_component(Component::ContactForm).count(), 7);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_standard_table_uses_contract_names() {
        let contract = DomContract {
            menu_toggle_id: "burger".to_string(),
            ..DomContract::default()
        };
        let table = BindingTable::standard(&contract);
        assert_eq!(
            table.rows()[0],
            Binding {
                target: BindingTarget::Id("burger".to_string()),
                event: EventKind::Click,
                handler: Handler::ToggleMenu,
            }
        );
    }

    #[test]
    fn test_each_field_gets_blur_and_input() {
        let table = BindingTable::standard(&DomContract::default());
        for field in ContactField::ALL {
            let events: Vec<EventKind> = table
                .rows()
                .iter()
                .filter(|row| match row.handler {
                    Handler::ValidateField(f) | Handler::RevalidateField(f) => f == field,
                    _ => false,
                })
                .map(|row| row.event)
                .collect();
            assert_eq!(events, vec![EventKind::Blur, EventKind::Input]);
        }
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let mut table = BindingTable::default();
        let toggle = BindingTarget::Id("menu-toggle".to_string());
        table.push(toggle.clone(), EventKind::Click, Handler::ToggleMenu);
        table.push(toggle, EventKind::Click, Handler::CloseMenu);

        let err = table.validate().unwrap_err();
        assert!(matches!(err, ContractError::DuplicateBinding { event: EventKind::Click, .. }));
        assert_eq!(err.to_string(), "duplicate binding for Click on `#menu-toggle`");
    }

    #[test]
    fn test_same_target_different_events_allowed() {
        let mut table = BindingTable::default();
        let target = BindingTarget::Id("contact-name".to_string());
        table.push(target.clone(), EventKind::Blur, Handler::ValidateField(ContactField::Name));
        table.push(target, EventKind::Input, Handler::RevalidateField(ContactField::Name));
        assert!(table.validate().is_ok());
    }
}
