//! Error types for Notelist.

use std::path::PathBuf;

use notelist_core::SignalError;

/// Result type alias for Notelist operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Errors that can occur while composing or driving a note list.
///
/// Input the controller rejects, such as an empty entry or a key other than
/// Enter, is a silent no-op and never shows up here.
#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    /// A listener faulted while a change notification was delivered.
    #[error("notification delivery failed: {0}")]
    Delivery(#[from] SignalError),

    /// The configuration text is not valid TOML for [`NotesConfig`](crate::NotesConfig).
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
