//! Small class/attribute helpers over `web_sys::Element`.
//!
//! DOM failures here are logged and swallowed: a single misbehaving element
//! must not stop the rest of a handler.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

pub fn set_class(element: &Element, class: &str, on: bool) {
    let class_list = element.class_list();
    let result = if on {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
    if let Err(err) = result {
        log::error!("Failed to update class `{}` on {}: {:?}", class, describe(element), err);
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::error!("Failed to set `{}` on {}: {:?}", name, describe(element), err);
    }
}

/// Current text of an `<input>` or `<textarea>`; empty for anything else.
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// All elements matching `selector`. An invalid selector yields nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Invalid selector `{}`", selector);
        return Vec::new();
    };

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        if let Ok(element) = node.dyn_into::<Element>() {
            elements.push(element);
        }
    }
    elements
}

/// `tag#id` for log lines.
pub fn describe(element: &Element) -> String {
    let tag = element.tag_name().to_lowercase();
    let id = element.id();
    if id.is_empty() {
        tag
    } else {
        format!("{tag}#{id}")
    }
}
