//! Error types for DICOM JSON filtering

/// Errors surfaced to the caller of a filter run.
///
/// Per-file problems (unreadable files, malformed JSON, missing attributes)
/// are never represented here; they only make a file a non-match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("'{folder}' directory doesn't exist.")]
    DirectoryNotFound { folder: String },

    #[error("No json file found under '{folder}'.")]
    NoJsonFiles { folder: String },

    #[error("Keys and values length don't match.")]
    LengthMismatch { keys: usize, values: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl FilterError {
    pub fn directory_not_found(folder: impl Into<String>) -> Self {
        Self::DirectoryNotFound {
            folder: folder.into(),
        }
    }

    pub fn no_json_files(folder: impl Into<String>) -> Self {
        Self::NoJsonFiles {
            folder: folder.into(),
        }
    }

    pub fn length_mismatch(keys: usize, values: usize) -> Self {
        Self::LengthMismatch { keys, values }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Line printed by the CLI when a run fails
    pub fn user_message(&self) -> String {
        format!("Error: {}", self)
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
