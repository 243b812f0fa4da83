//! In-page navigation helpers for smooth scrolling.

/// Return the selector for a same-document fragment link, or `None` when the
/// link must keep its default navigation.
///
/// The bare `#` (and anything not starting with `#`) is left alone.
pub fn fragment_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if !href.starts_with('#') || href == "#" {
        return None;
    }
    Some(href)
}

/// Resolve a link's fragment to its target element.
///
/// `lookup` maps a selector to the element, if any. `None` means the click
/// must not be intercepted: no fragment, the bare `#`, or nothing matches.
pub fn resolve_fragment<'a, T, F>(href: &'a str, lookup: F) -> Option<(&'a str, T)>
where
    F: FnOnce(&str) -> Option<T>,
{
    let selector = fragment_target(href)?;
    lookup(selector).map(|target| (selector, target))
}
