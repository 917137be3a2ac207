//! Caller-side helpers for the demo host.
//!
//! The import field forwards text without looking at it; checking that the
//! payload is JSON happens here, in the owner of the value.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// What the host thinks of the current payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadStatus {
    Empty,
    /// Parsed; carries the kind of the top-level value.
    Valid(&'static str),
    /// Did not parse; carries the `serde_json` error message.
    Invalid(String),
}

impl PayloadStatus {
    pub fn describe(&self) -> String {
        match self {
            PayloadStatus::Empty => "empty".to_string(),
            PayloadStatus::Valid(kind) => format!("valid JSON ({})", kind),
            PayloadStatus::Invalid(reason) => format!("invalid JSON: {}", reason),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PayloadStatus::Empty => "status-empty",
            PayloadStatus::Valid(_) => "status-valid",
            PayloadStatus::Invalid(_) => "status-invalid",
        }
    }
}

/// Classifies `payload`. Whitespace-only counts as empty.
pub fn payload_status(payload: &str) -> PayloadStatus {
    if payload.trim().is_empty() {
        return PayloadStatus::Empty;
    }
    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => PayloadStatus::Valid(json_kind(&value)),
        Err(err) => PayloadStatus::Invalid(err.to_string()),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Inline style of the import toast, bottom-centred over the page.
const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "20px"),
    ("left", "50%"),
    ("transform", "translateX(-50%)"),
    ("background", "rgba(0, 0, 0, 0.8)"),
    ("color", "#fff"),
    ("padding", "10px 20px"),
    ("border-radius", "4px"),
    ("z-index", "10000"),
    ("font-family", "Arial, sans-serif"),
];

const TOAST_LIFETIME_MS: u32 = 3000;

/// Shows `message` as plain text in a toast that removes itself after
/// `TOAST_LIFETIME_MS`. File names end up in here, so no HTML is parsed.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(node), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    node.set_text_content(Some(message));
    let toast: HtmlElement = node.unchecked_into();
    let style = toast.style();
    for (property, value) in TOAST_STYLE {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_err() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        toast.remove();
    });
}
