//! File import bridge: the request/completion pair between a selected file and
//! the caller's import callback.
//!
//! Issuing a read returns immediately (the future is handed to `spawn_local`);
//! completion is delivered at most once, and never after the owning field has
//! been destroyed. The bridge is generic over `TextSource` so the delivery rules
//! can be exercised without a browser.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_file::futures::read_as_text;
use gloo_file::{File, FileReadError};

use super::error::ImportError;

/// Something that can be decoded into text asynchronously.
pub trait TextSource {
    /// Human-readable name used in logs and errors.
    fn label(&self) -> String;

    /// Decodes the whole source as text.
    fn read_text(self) -> impl Future<Output = Result<String, ImportError>>;
}

impl TextSource for File {
    fn label(&self) -> String {
        self.name()
    }

    /// Uses `FileReader.readAsText`, so decoding follows the platform default (UTF-8).
    fn read_text(self) -> impl Future<Output = Result<String, ImportError>> {
        async move {
            read_as_text(&self)
                .await
                .map_err(|err| read_error(self.name(), err))
        }
    }
}

/// Maps a platform reader failure for `file` onto `ImportError`.
fn read_error(file: String, err: FileReadError) -> ImportError {
    match err {
        FileReadError::AbortedEarly => ImportError::Aborted { file },
        other => ImportError::read(file, other.to_string()),
    }
}

/// Shared flag bound to the lifetime of one mounted field.
///
/// Clones observe the same flag; `revoke` is called from `Component::destroy`.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Liveness(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Liveness::new()
    }
}

/// What happened to one import request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The decoded text was handed to the delivery closure.
    Delivered { file: String, chars: usize },
    /// The read failed; the error was handed to the delivery closure.
    Failed(ImportError),
    /// The field was destroyed while the read was pending; nothing was delivered.
    Discarded { file: String },
}

/// Reads `source` and hands the result to `deliver` exactly once, unless
/// `liveness` was revoked while the read was pending.
pub async fn run_import<S, F>(source: S, liveness: Liveness, deliver: F) -> ImportOutcome
where
    S: TextSource,
    F: FnOnce(Result<String, ImportError>),
{
    let file = source.label();
    let result = source.read_text().await;

    if !liveness.is_alive() {
        return ImportOutcome::Discarded { file };
    }

    let outcome = match &result {
        Ok(text) => ImportOutcome::Delivered {
            file,
            chars: text.chars().count(),
        },
        Err(err) => ImportOutcome::Failed(err.clone()),
    };
    deliver(result);
    outcome
}
