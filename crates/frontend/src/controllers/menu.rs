//! Collapsible navigation menu.

use std::cell::Cell;

use contracts::domain::menu::{MenuAction, MenuState, MenuTarget};
use contracts::shared::config::DomContract;
use web_sys::Element;

use crate::dom::classes::{set_attr, set_class};

pub struct MenuController {
    toggle: Element,
    nav: Element,
    state: Cell<MenuState>,
    active_class: String,
    expanded_attr: String,
}

impl MenuController {
    /// Adopt the state the markup ships with and render it to both elements.
    pub fn new(toggle: Element, nav: Element, contract: &DomContract) -> Self {
        let initial =
            MenuState::from_aria(toggle.get_attribute(&contract.expanded_attr).as_deref());
        let controller = Self {
            toggle,
            nav,
            state: Cell::new(initial),
            active_class: contract.active_class.clone(),
            expanded_attr: contract.expanded_attr.clone(),
        };
        controller.render(initial);
        controller
    }

    pub fn toggle(&self) {
        let state = self.dispatch(MenuAction::Toggle);
        log::debug!("Menu toggled. Expanded: {}", state.is_expanded());
    }

    pub fn close_on_navigate(&self) {
        self.dispatch(MenuAction::Navigate);
        log::debug!("Navigation link clicked, menu closed");
    }

    fn dispatch(&self, action: MenuAction) -> MenuState {
        let mut state = self.state.get();
        let next = state.apply(action);
        self.state.set(next);
        self.render(next);
        next
    }

    fn render(&self, state: MenuState) {
        for (target, view) in state.render_targets() {
            let element = match target {
                MenuTarget::Toggle => &self.toggle,
                MenuTarget::Panel => &self.nav,
            };
            set_attr(element, &self.expanded_attr, view.aria_expanded);
            set_class(element, &self.active_class, view.active);
        }
    }
}
