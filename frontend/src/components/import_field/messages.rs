use super::error::ImportError;

#[derive(Clone)]
pub enum Msg {
    /// The user edited the text surface; carries the full new text.
    Edited(String),
    OpenFilePicker,
    FileChosen(web_sys::File),
    ImportFinished(Result<String, ImportError>),
    /// Re-check the DOM against the caller-owned value after an edit settled.
    SyncValue,
}
