use thiserror::Error;

/// Top-level error type for wabulk.
#[derive(Debug, Error)]
pub enum WabulkError {
    /// A job or contact is missing a required field. Raised before any
    /// navigation happens.
    #[error("validation error: {0}")]
    Validation(String),

    /// A bounded wait for a page element expired. Recorded per-target,
    /// never aborts the batch.
    #[error("element '{selector}' not found after {waited_secs}s")]
    ElementTimeout { selector: String, waited_secs: u64 },

    /// An element was missing or rejected an interaction.
    #[error("element error: {0}")]
    Element(String),

    /// The underlying browser session is unusable. The only error that
    /// aborts the remaining batch.
    #[error("session error: {0}")]
    Session(String),

    /// Contact store or import/export error.
    #[error("contacts error: {0}")]
    Contacts(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
