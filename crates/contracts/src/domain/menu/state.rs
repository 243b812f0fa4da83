//! Navigation menu state.
//!
//! The toggle control and the nav panel both render the same [`MenuState`];
//! [`MenuState::apply`] is the only way to change it.

/// What happened to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Menu button clicked.
    Toggle,
    /// A navigation link was activated.
    Navigate,
}

/// Element that reflects the menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Toggle,
    Panel,
}

/// Attribute and class one target should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub aria_expanded: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    pub const fn collapsed() -> Self {
        Self { expanded: false }
    }

    pub const fn expanded() -> Self {
        Self { expanded: true }
    }

    /// Read the state from an `aria-expanded` attribute value.
    /// Anything other than `"true"` counts as collapsed.
    pub fn from_aria(value: Option<&str>) -> Self {
        Self {
            expanded: value == Some("true"),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Value for the `aria-expanded` attribute.
    pub fn aria_value(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// What each target renders. Both come from the same state, so the
    /// toggle and the panel never disagree.
    pub fn render_targets(&self) -> [(MenuTarget, MenuView); 2] {
        let view = MenuView {
            aria_expanded: self.aria_value(),
            active: self.expanded,
        };
        [(MenuTarget::Toggle, view), (MenuTarget::Panel, view)]
    }

    pub fn apply(&mut self, action: MenuAction) -> MenuState {
        self.expanded = match action {
            MenuAction::Toggle => !self.expanded,
            MenuAction::Navigate => false,
        };
        *self
    }
}
