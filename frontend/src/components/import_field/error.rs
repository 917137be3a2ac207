use thiserror::Error;

/// Failure of a single file import.
///
/// Emitted through `on_import_error` when the caller supplies it; otherwise the
/// failure is only logged to the browser console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The platform reader rejected the file (missing, unreadable, security or JS error).
    #[error("could not read `{file}`: {reason}")]
    Read { file: String, reason: String },

    /// The read was aborted before the reader produced a result.
    #[error("reading `{file}` was aborted")]
    Aborted { file: String },
}

impl ImportError {
    pub fn read(file: impl Into<String>, reason: impl Into<String>) -> Self {
        ImportError::Read {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Name of the file whose import failed.
    pub fn file(&self) -> &str {
        match self {
            ImportError::Read { file, .. } | ImportError::Aborted { file } => file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_message_names_the_file() {
        let err = ImportError::read("payload.json", "NotReadableError");
        assert_eq!(err.file(), "payload.json");
        assert_eq!(
            err.to_string(),
            "could not read `payload.json`: NotReadableError"
        );
    }

    #[test]
    fn aborted_error_message() {
        let err = ImportError::Aborted {
            file: "big.json".to_string(),
        };
        assert_eq!(err.file(), "big.json");
        assert_eq!(err.to_string(), "reading `big.json` was aborted");
    }
}
