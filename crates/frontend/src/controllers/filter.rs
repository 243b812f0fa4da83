//! Project list filtering.

use contracts::domain::projects::{FilterPlan, FilterSelection};
use contracts::shared::config::DomContract;
use web_sys::Element;

use crate::dom::classes::{describe, set_attr, set_class};

pub struct FilterController {
    buttons: Vec<Element>,
    projects: Vec<Element>,
    filter_attr: String,
    category_attr: String,
    active_class: String,
    hidden_class: String,
    pressed_attr: String,
}

impl FilterController {
    pub fn new(buttons: Vec<Element>, projects: Vec<Element>, contract: &DomContract) -> Self {
        Self {
            buttons,
            projects,
            filter_attr: contract.filter_attr.clone(),
            category_attr: contract.category_attr.clone(),
            active_class: contract.active_class.clone(),
            hidden_class: contract.hidden_class.clone(),
            pressed_attr: contract.pressed_attr.clone(),
        }
    }

    /// Category a filter button selects, if it declares one.
    pub fn button_category(&self, button: &Element) -> Option<String> {
        button.get_attribute(&self.filter_attr)
    }

    /// Click on a filter button.
    pub fn activate(&self, button: &Element) {
        match self.button_category(button) {
            Some(category) => self.filter(&category),
            None => log::warn!("Filter button {} has no {}", describe(button), self.filter_attr),
        }
    }

    pub fn filter(&self, category: &str) {
        log::debug!("Filtering projects by category: {}", category);

        let selection = FilterSelection::new(category);
        let button_categories: Vec<Option<String>> =
            self.buttons.iter().map(|b| b.get_attribute(&self.filter_attr)).collect();
        let project_categories: Vec<Option<String>> = self
            .projects
            .iter()
            .map(|p| p.get_attribute(&self.category_attr))
            .collect();

        let plan = FilterPlan::compute(
            &selection,
            &as_refs(&button_categories),
            &as_refs(&project_categories),
        );

        for (button, active) in self.buttons.iter().zip(&plan.buttons_active) {
            set_class(button, &self.active_class, *active);
            set_attr(button, &self.pressed_attr, if *active { "true" } else { "false" });
        }

        for ((project, visible), category) in self
            .projects
            .iter()
            .zip(&plan.projects_visible)
            .zip(&project_categories)
        {
            set_class(project, &self.hidden_class, !*visible);
            log::debug!(
                "Project {} {}",
                category.as_deref().unwrap_or("<none>"),
                if *visible { "shown" } else { "hidden" }
            );
        }

        log::debug!(
            "Filter `{}`: {} button(s) active, {}/{} project(s) shown",
            selection.category(),
            plan.active_count(),
            plan.visible_count(),
            self.projects.len()
        );
    }
}

fn as_refs(values: &[Option<String>]) -> Vec<Option<&str>> {
    values.iter().map(|v| v.as_deref()).collect()
}
