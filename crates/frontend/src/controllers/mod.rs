pub mod contact_form;
pub mod error_presenter;
pub mod filter;
pub mod menu;
pub mod scroll;

use std::rc::Rc;

use contracts::shared::config::DomContract;
use web_sys::{Document, Window};

use crate::delivery::AcknowledgeDelivery;
use crate::dom::BindingContext;
use contact_form::ContactFormController;
use filter::FilterController;
use menu::MenuController;
use scroll::ScrollController;

/// Controllers whose required elements were found. A `None` component is
/// not bound at all.
pub struct Controllers {
    pub menu: Option<Rc<MenuController>>,
    pub scroll: Rc<ScrollController>,
    pub filter: Option<Rc<FilterController>>,
    pub contact: Option<Rc<ContactFormController>>,
}

impl Controllers {
    pub fn build(
        window: &Window,
        document: &Document,
        context: &BindingContext,
        contract: &DomContract,
    ) -> Self {
        let menu = match (&context.menu_toggle, &context.main_nav) {
            (Some(toggle), Some(nav)) => Some(Rc::new(MenuController::new(
                toggle.clone(),
                nav.clone(),
                contract,
            ))),
            _ => None,
        };

        let filter = (!context.filter_buttons.is_empty()).then(|| {
            Rc::new(FilterController::new(
                context.filter_buttons.clone(),
                context.projects.clone(),
                contract,
            ))
        });

        Self {
            menu,
            scroll: Rc::new(ScrollController::new(document.clone())),
            filter,
            contact: build_contact(window, context, contract),
        }
    }
}

fn build_contact(
    window: &Window,
    context: &BindingContext,
    contract: &DomContract,
) -> Option<Rc<ContactFormController>> {
    let form = context.form.clone()?;
    let [Some(name), Some(email), Some(message)] = context.inputs.clone() else {
        return None;
    };

    let delivery = Box::new(AcknowledgeDelivery::new(window.clone()));
    match ContactFormController::new(
        form,
        [name, email, message],
        context.error_slots.clone(),
        contract,
        delivery,
    ) {
        Ok(controller) => Some(Rc::new(controller)),
        Err(err) => {
            log::error!("Contact form not initialized: {}", err);
            None
        }
    }
}
