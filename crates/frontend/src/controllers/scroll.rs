//! Smooth scrolling for same-page fragment links.

use contracts::shared::navigation::resolve_fragment;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub struct ScrollController {
    document: Document,
}

impl ScrollController {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Intercept a click on `link` when its fragment resolves to an element.
    /// Otherwise the browser's default navigation runs untouched.
    pub fn handle_click(&self, link: &Element, event: &Event) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        // Fragments that are not valid selectors (`#1-intro`) also fall through.
        let Some((selector, target)) = resolve_fragment(&href, |selector| {
            self.document.query_selector(selector).ok().flatten()
        }) else {
            return;
        };

        event.prevent_default();

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);

        log::debug!("Scrolled to: {}", selector);
    }
}
