//! Project list filtering by category token.

/// Sentinel category that shows every project.
pub const ALL_CATEGORY: &str = "all";

/// The currently selected category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    category: String,
}

impl FilterSelection {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn all() -> Self {
        Self::new(ALL_CATEGORY)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_all(&self) -> bool {
        self.category == ALL_CATEGORY
    }

    /// A button is active iff its own category equals the selection.
    /// Buttons without a category are never active.
    pub fn is_button_active(&self, button_category: Option<&str>) -> bool {
        button_category == Some(self.category.as_str())
    }

    /// A project is visible when the selection is `all` or matches its category.
    pub fn is_project_visible(&self, project_category: Option<&str>) -> bool {
        self.is_all() || project_category == Some(self.category.as_str())
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Result of applying a selection to the buttons and projects on the page,
/// index-aligned with the input slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub buttons_active: Vec<bool>,
    pub projects_visible: Vec<bool>,
}

impl FilterPlan {
    pub fn compute(
        selection: &FilterSelection,
        button_categories: &[Option<&str>],
        project_categories: &[Option<&str>],
    ) -> Self {
        Self {
            buttons_active: button_categories
                .iter()
                .map(|c| selection.is_button_active(*c))
                .collect(),
            projects_visible: project_categories
                .iter()
                .map(|c| selection.is_project_visible(*c))
                .collect(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.buttons_active.iter().filter(|a| **a).count()
    }

    pub fn visible_count(&self) -> usize {
        self.projects_visible.iter().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTONS: [Option<&str>; 3] = [Some("all"), Some("responsive"), Some("interactive")];
    const PROJECTS: [Option<&str>; 4] = [
        Some("responsive"),
        Some("interactive"),
        Some("responsive"),
        None,
    ];

    #[test]
    fn test_exactly_one_button_active_for_known_categories() {
        for (index, category) in ["all", "responsive", "interactive"].iter().enumerate() {
            let plan = FilterPlan::compute(&FilterSelection::new(*category), &BUTTONS, &PROJECTS);
            assert_eq!(plan.active_count(), 1, "category {category}");
            assert!(plan.buttons_active[index]);
        }
    }

    #[test]
    fn test_all_shows_everything() {
        let plan = FilterPlan::compute(&FilterSelection::all(), &BUTTONS, &PROJECTS);
        assert_eq!(plan.projects_visible, vec![true, true, true, true]);
    }

    #[test]
    fn test_category_shows_only_matches() {
        let plan = FilterPlan::compute(&FilterSelection::new("responsive"), &BUTTONS, &PROJECTS);
        assert_eq!(plan.projects_visible, vec![true, false, true, false]);
        assert_eq!(plan.visible_count(), 2);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let plan = FilterPlan::compute(&FilterSelection::new("print"), &BUTTONS, &PROJECTS);
        assert_eq!(plan.active_count(), 0);
        assert_eq!(plan.visible_count(), 0);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let selection = FilterSelection::new("Responsive");
        assert!(!selection.is_project_visible(Some("responsive")));
        assert!(!selection.is_button_active(Some("responsive")));
    }

    #[test]
    fn test_button_without_category_never_active() {
        assert!(!FilterSelection::all().is_button_active(None));
    }
}
