//! One-time resolution of every element the page contract names.
//!
//! Components never query the DOM themselves at startup; they receive the
//! elements resolved here. Anything missing is recorded in the
//! [`BindingReport`] and the dependent feature is simply not bound.

use contracts::domain::contact::ContactField;
use contracts::shared::binding::Component;
use contracts::shared::config::DomContract;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement};

use super::classes::query_all;

#[derive(Debug, Clone, PartialEq)]
pub struct MissingElement {
    pub component: Component,
    pub what: String,
}

#[derive(Debug, Clone, Default)]
pub struct BindingReport {
    pub missing: Vec<MissingElement>,
}

impl BindingReport {
    fn record(&mut self, component: Component, what: impl Into<String>) {
        self.missing.push(MissingElement {
            component,
            what: what.into(),
        });
    }

    pub fn log(&self) {
        for missing in &self.missing {
            log::warn!("{:?}: element not found: {}", missing.component, missing.what);
        }
    }
}

pub struct BindingContext {
    pub menu_toggle: Option<Element>,
    pub main_nav: Option<Element>,
    pub nav_links: Vec<Element>,
    pub fragment_links: Vec<Element>,
    pub filter_buttons: Vec<Element>,
    pub projects: Vec<Element>,
    pub form: Option<HtmlFormElement>,
    pub inputs: [Option<Element>; 3],
    pub error_slots: [Option<Element>; 3],
    pub report: BindingReport,
}

impl BindingContext {
    pub fn resolve(document: &Document, contract: &DomContract) -> Self {
        let mut report = BindingReport::default();

        // Menu
        let menu_toggle = document.get_element_by_id(&contract.menu_toggle_id);
        if menu_toggle.is_none() {
            report.record(Component::Menu, format!("#{}", contract.menu_toggle_id));
        }
        let main_nav = document.get_element_by_id(&contract.main_nav_id);
        if main_nav.is_none() {
            report.record(Component::Menu, format!("#{}", contract.main_nav_id));
        }
        let nav_links = query_all(document, &contract.nav_link_selector);

        // Scroll
        let fragment_links = query_all(document, &contract.fragment_link_selector);

        // Filter
        let filter_buttons = query_all(document, &contract.filter_button_selector);
        if filter_buttons.is_empty() {
            report.record(Component::Filter, contract.filter_button_selector.clone());
        }
        let projects = query_all(document, &contract.project_selector);

        // Contact form
        let form = document
            .query_selector(&contract.form_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        if form.is_none() {
            report.record(Component::ContactForm, contract.form_selector.clone());
        }

        let inputs = ContactField::ALL.map(|field| {
            let id = contract.input_id(field);
            let input = document.get_element_by_id(id);
            if input.is_none() {
                report.record(Component::ContactForm, format!("#{id}"));
            }
            input
        });

        let error_slots = ContactField::ALL.map(|field| {
            let id = contract.error_slot_id(field);
            let slot = document.get_element_by_id(&id);
            if slot.is_none() {
                report.record(Component::ContactForm, format!("#{id}"));
            }
            slot
        });

        Self {
            menu_toggle,
            main_nav,
            nav_links,
            fragment_links,
            filter_buttons,
            projects,
            form,
            inputs,
            error_slots,
            report,
        }
    }

    pub fn input(&self, field: ContactField) -> Option<&Element> {
        self.inputs[field.index()].as_ref()
    }
}
