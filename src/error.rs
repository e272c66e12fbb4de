/// Error types for the format store and clipboard writes
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Every candidate had an empty name or template after trimming
    #[error("nothing to save: every format needs a name and a template")]
    NothingToSave,

    #[error("you must have at least one format")]
    LastFormat,

    #[error("no format at index {0}")]
    NoSuchFormat(usize),

    #[error("reset to defaults was not confirmed")]
    ResetDeclined,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to decode stored formats: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
}
