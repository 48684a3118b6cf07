use thiserror::Error;

/// User-input errors. Surfaced inline by the form layer; submission is
/// blocked, the editing session keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invoice has no line items")]
    EmptyInvoice,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be a non-negative number")]
    InvalidNumber { field: &'static str },

    #[error("{what} not found")]
    NotFound { what: &'static str },
}

/// Key-value store failures. Reads fall back to defaults, writes are
/// reported to the user; neither ends the session.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("stored value for '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures from the external rasterize/PDF/print pipeline. The in-progress
/// draft is preserved so the user may retry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("print failed: {0}")]
    Print(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
