//! Component state and DOM utilities for the import field.
//!
//! The field holds no copy of the text: only node references, the liveness token
//! for pending reads, and a counter of reads in flight. The helpers here keep the
//! DOM consistent with the caller-owned value.

use gloo_console::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::bridge::Liveness;

/// Main state container for the `ImportField`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct ImportField {
    /// Reference to the `<textarea>` or `<input type="text">` surface.
    pub text_ref: NodeRef,

    /// Reference to the hidden `<input type="file">`.
    pub picker_ref: NodeRef,

    /// DOM id of the hidden picker, unique per instance.
    pub picker_id: String,

    /// Revoked on destroy; checked before a finished read is delivered.
    pub liveness: Liveness,

    /// Number of reads started and not yet finished.
    pub pending_reads: usize,

    /// Attribute names set on the text surface by the last render.
    pub applied_attributes: Vec<AttrValue>,
}

impl ImportField {
    pub fn new() -> Self {
        Self {
            text_ref: NodeRef::default(),
            picker_ref: NodeRef::default(),
            picker_id: format!("import-picker-{}", uuid::Uuid::new_v4()),
            liveness: Liveness::new(),
            pending_reads: 0,
            applied_attributes: Vec::new(),
        }
    }

    /// Restores the caller-owned `value` into the text surface when the DOM
    /// holds something else (an edit the caller did not accept).
    ///
    /// A matching DOM value is left alone so the caret does not move.
    pub fn sync_value(&self, value: &str) {
        if let Some(textarea) = self.text_ref.cast::<HtmlTextAreaElement>() {
            if textarea.value() != value {
                textarea.set_value(value);
            }
        } else if let Some(input) = self.text_ref.cast::<HtmlInputElement>() {
            if input.value() != value {
                input.set_value(value);
            }
        }
    }

    /// Sets each `(name, value)` pair on the text surface and removes the
    /// names applied by the previous render that the caller no longer passes.
    pub fn apply_extra_attributes(&mut self, attributes: &[(AttrValue, AttrValue)]) {
        let Some(element) = self.text_ref.cast::<Element>() else {
            return;
        };

        for name in stale_attribute_names(&self.applied_attributes, attributes) {
            if let Err(err) = element.remove_attribute(&name) {
                warn!(format!("import-field: cannot remove attribute `{}`", name), err);
            }
        }
        for (name, value) in attributes {
            if element.get_attribute(name).as_deref() == Some(value.as_str()) {
                continue;
            }
            if let Err(err) = element.set_attribute(name, value) {
                warn!(format!("import-field: cannot set attribute `{}`", name), err);
            }
        }
        self.applied_attributes = attributes.iter().map(|(name, _)| name.clone()).collect();
    }

    /// Matches the textarea height to its content, so it grows instead of scrolling.
    pub fn resize_text_surface(&self) {
        let Some(textarea) = self.text_ref.cast::<HtmlTextAreaElement>() else {
            return;
        };
        let surface: &HtmlElement = textarea.unchecked_ref();
        let style = surface.style();
        // `scrollHeight` only shrinks once the fixed height is released.
        let _ = style.set_property("height", "auto");
        let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
    }
}

/// Names in `previous` that no longer appear in `current`.
pub fn stale_attribute_names(
    previous: &[AttrValue],
    current: &[(AttrValue, AttrValue)],
) -> Vec<AttrValue> {
    previous
        .iter()
        .filter(|name| !current.iter().any(|(kept, _)| kept == *name))
        .cloned()
        .collect()
}

impl Default for ImportField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &'static str, value: &'static str) -> (AttrValue, AttrValue) {
        (AttrValue::from(name), AttrValue::from(value))
    }

    #[test]
    fn dropped_names_are_stale() {
        let previous = vec![AttrValue::from("data-x"), AttrValue::from("aria-label")];
        let current = vec![pair("aria-label", "Payload")];

        assert_eq!(
            stale_attribute_names(&previous, &current),
            vec![AttrValue::from("data-x")]
        );
    }

    #[test]
    fn emptied_list_makes_every_name_stale() {
        let previous = vec![AttrValue::from("data-x")];

        assert_eq!(
            stale_attribute_names(&previous, &[]),
            vec![AttrValue::from("data-x")]
        );
    }

    #[test]
    fn changed_value_keeps_the_name() {
        let previous = vec![AttrValue::from("data-x")];
        let current = vec![pair("data-x", "2")];

        assert!(stale_attribute_names(&previous, &current).is_empty());
    }
}
