//! Registers the binding table against the live page.
//!
//! Each row resolves to zero or more elements from the [`BindingContext`];
//! every element gets one leaked `Closure` listener, which lives for the
//! lifetime of the page.

use std::collections::HashMap;

use contracts::shared::binding::{Binding, BindingTable, Component, Handler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::controllers::Controllers;
use crate::dom::classes::describe;
use crate::dom::BindingContext;

#[derive(Debug, Default)]
pub struct BindSummary {
    pub listeners: HashMap<Component, usize>,
    pub failures: usize,
}

impl BindSummary {
    pub fn count(&self, component: Component) -> usize {
        self.listeners.get(&component).copied().unwrap_or_default()
    }

    pub fn log(&self) {
        for component in [
            Component::Menu,
            Component::Scroll,
            Component::Filter,
            Component::ContactForm,
        ] {
            match self.count(component) {
                0 => log::info!("{:?} skipped", component),
                n => log::info!("{:?} initialized ({} listener(s))", component, n),
            }
        }
        if self.failures > 0 {
            log::error!("{} listener(s) failed to register", self.failures);
        }
    }
}

pub fn bind_all(
    table: &BindingTable,
    context: &BindingContext,
    controllers: &Controllers,
) -> BindSummary {
    let mut summary = BindSummary::default();

    for row in table.rows() {
        for element in targets(row, context, controllers) {
            let Some(callback) = listener(row.handler, &element, controllers) else {
                continue;
            };

            let closure = Closure::wrap(callback);
            let registered = element.add_event_listener_with_callback(
                row.event.as_str(),
                closure.as_ref().unchecked_ref(),
            );
            match registered {
                Ok(()) => {
                    *summary.listeners.entry(row.handler.component()).or_default() += 1;
                }
                Err(err) => {
                    log::error!(
                        "Failed to bind {} on {} ({}): {:?}",
                        row.event.as_str(),
                        describe(&element),
                        row.target,
                        err
                    );
                    summary.failures += 1;
                }
            }
            closure.forget();
        }
    }

    summary
}

/// Elements a row attaches to. Rows of components that were not built
/// resolve to nothing.
fn targets(row: &Binding, context: &BindingContext, controllers: &Controllers) -> Vec<Element> {
    match row.handler {
        Handler::ToggleMenu if controllers.menu.is_some() => {
            context.menu_toggle.iter().cloned().collect()
        }
        Handler::CloseMenu if controllers.menu.is_some() => context.nav_links.clone(),
        Handler::SmoothScroll => context.fragment_links.clone(),
        Handler::ApplyFilter => match &controllers.filter {
            Some(filter) => context
                .filter_buttons
                .iter()
                .filter(|button| {
                    let has_category = filter.button_category(button).is_some();
                    if !has_category {
                        log::warn!("Skipping filter button {} without category", describe(button));
                    }
                    has_category
                })
                .cloned()
                .collect(),
            None => Vec::new(),
        },
        Handler::ValidateField(field) | Handler::RevalidateField(field)
            if controllers.contact.is_some() =>
        {
            context.input(field).cloned().into_iter().collect()
        }
        Handler::SubmitContact if controllers.contact.is_some() => context
            .form
            .iter()
            .map(|form| AsRef::<Element>::as_ref(form).clone())
            .collect(),
        _ => Vec::new(),
    }
}

fn listener(
    handler: Handler,
    element: &Element,
    controllers: &Controllers,
) -> Option<Box<dyn FnMut(Event)>> {
    let callback: Box<dyn FnMut(Event)> = match handler {
        Handler::ToggleMenu => {
            let menu = controllers.menu.clone()?;
            Box::new(move |_: Event| menu.toggle())
        }
        Handler::CloseMenu => {
            let menu = controllers.menu.clone()?;
            Box::new(move |_: Event| menu.close_on_navigate())
        }
        Handler::SmoothScroll => {
            let scroll = controllers.scroll.clone();
            let link = element.clone();
            Box::new(move |event: Event| scroll.handle_click(&link, &event))
        }
        Handler::ApplyFilter => {
            let filter = controllers.filter.clone()?;
            let button = element.clone();
            Box::new(move |_: Event| filter.activate(&button))
        }
        Handler::ValidateField(field) => {
            let contact = controllers.contact.clone()?;
            Box::new(move |_: Event| contact.on_blur(field))
        }
        Handler::RevalidateField(field) => {
            let contact = controllers.contact.clone()?;
            Box::new(move |_: Event| contact.on_input(field))
        }
        Handler::SubmitContact => {
            let contact = controllers.contact.clone()?;
            Box::new(move |event: Event| contact.on_submit(&event))
        }
    };
    Some(callback)
}
