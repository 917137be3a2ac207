//! Defines the properties for the `ImportField` component.
//!
//! The field is fully controlled: `value` is owned by the parent and passed in on
//! every render. Everything else is optional and falls back to the defaults below.

use yew::prelude::*;

use super::error::ImportError;

/// Extension filter hint handed to the native file dialog.
pub const DEFAULT_ACCEPT: &str = ".json";
pub const DEFAULT_BUTTON_LABEL: &str = "Import file";
/// Material icon shown on the trigger button.
pub const DEFAULT_BUTTON_ICON: &str = "upload_file";
pub const DEFAULT_ROWS: u32 = 8;

/// Properties for the `ImportField` component.
#[derive(Properties, PartialEq, Clone)]
pub struct ImportFieldProps {
    /// Text shown in the text surface. The field never changes it on its own.
    pub value: AttrValue,

    /// Shown while `value` is empty.
    #[prop_or_default]
    pub placeholder: AttrValue,

    /// Called with the full edited text on every user edit. The parent decides
    /// whether the edit becomes the next `value`.
    #[prop_or_default]
    pub on_change: Option<Callback<String>>,

    /// Called once per successful read with the decoded file contents.
    #[prop_or_default]
    pub on_import: Option<Callback<String>>,

    /// Called once per failed read. Without it, failures are only logged.
    #[prop_or_default]
    pub on_import_error: Option<Callback<ImportError>>,

    /// `accept` attribute of the hidden picker. A hint only: any selected file is read.
    #[prop_or(AttrValue::Static(DEFAULT_ACCEPT))]
    pub accept: AttrValue,

    /// `<textarea>` when true, single-line `<input type="text">` otherwise.
    ///
    /// Single-line mode is lossy: the browser strips line breaks from the
    /// input's value, so multi-line text (pretty-printed JSON from an import)
    /// never matches `value` and the field keeps rewriting it on each render.
    /// Keep the default when imports may span several lines.
    #[prop_or(true)]
    pub multiline: bool,

    #[prop_or(DEFAULT_ROWS)]
    pub rows: u32,

    #[prop_or(AttrValue::Static(DEFAULT_BUTTON_LABEL))]
    pub button_label: AttrValue,

    #[prop_or(AttrValue::Static(DEFAULT_BUTTON_ICON))]
    pub button_icon: AttrValue,

    /// Extra classes for the wrapper element.
    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub button_class: Classes,

    /// Forwarded to the text surface.
    #[prop_or_default]
    pub id: Option<AttrValue>,

    #[prop_or_default]
    pub name: Option<AttrValue>,

    #[prop_or_default]
    pub style: Option<AttrValue>,

    /// Disables both the text surface and the trigger button.
    #[prop_or_default]
    pub disabled: bool,

    #[prop_or_default]
    pub readonly: bool,

    /// Grow the textarea with its content instead of scrolling.
    #[prop_or_default]
    pub auto_grow: bool,

    /// Clear the picker selection after a file is taken, so choosing the same
    /// file again fires another import.
    #[prop_or(true)]
    pub rearm_picker: bool,

    /// Arbitrary attributes set verbatim on the text surface after each render.
    #[prop_or_default]
    pub attributes: Vec<(AttrValue, AttrValue)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_only_require_value() {
        let props = yew::props!(ImportFieldProps {
            value: AttrValue::from("{}"),
        });

        assert_eq!(props.value.as_str(), "{}");
        assert_eq!(props.accept.as_str(), ".json");
        assert_eq!(props.button_label.as_str(), DEFAULT_BUTTON_LABEL);
        assert_eq!(props.button_icon.as_str(), DEFAULT_BUTTON_ICON);
        assert_eq!(props.rows, DEFAULT_ROWS);
        assert!(props.multiline);
        assert!(props.rearm_picker);
        assert!(!props.disabled);
        assert!(!props.auto_grow);
        assert!(props.on_change.is_none());
        assert!(props.on_import.is_none());
        assert!(props.on_import_error.is_none());
        assert!(props.attributes.is_empty());
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let on_import = Callback::from(|_: String| ());
        let a = yew::props!(ImportFieldProps {
            value: AttrValue::from(""),
            on_import: Some(on_import.clone()),
        });
        let b = yew::props!(ImportFieldProps {
            value: AttrValue::from(""),
            on_import: Some(on_import),
        });
        let c = yew::props!(ImportFieldProps {
            value: AttrValue::from(""),
            on_import: Some(Callback::from(|_: String| ())),
        });

        assert!(a == b);
        assert!(a != c);
    }
}
