//! Small DOM and logging helpers used by `view.rs` and `update.rs`.

use gloo_console::{log, warn};
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::TargetCast;

use super::bridge::ImportOutcome;

/// Returns the first file of the picker's current selection, if any.
///
/// An empty selection is what the picker reports after the dialog was dismissed.
pub fn first_selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Extracts the full text of the surface that fired `event`, textarea or input alike.
pub fn edited_text(event: &InputEvent) -> Option<String> {
    if let Some(textarea) = event.target_dyn_into::<HtmlTextAreaElement>() {
        Some(textarea.value())
    } else {
        event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
    }
}

/// Writes one line per finished import to the browser console.
pub fn log_outcome(outcome: &ImportOutcome) {
    match outcome {
        ImportOutcome::Delivered { file, chars } => {
            log!(format!("import-field: read {} characters from `{}`", chars, file));
        }
        ImportOutcome::Failed(err) => {
            warn!(format!("import-field: {}", err));
        }
        ImportOutcome::Discarded { file } => {
            log!(format!(
                "import-field: dropped result for `{}`, field was removed",
                file
            ));
        }
    }
}
