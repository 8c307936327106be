//! Error types for Ballo kernel operations.
//!
//! Business outcomes (missing birth dates, category mismatches, age gaps)
//! are never errors; they are carried by `CategoryVerdict`. Only inputs the
//! kernel cannot interpret at all end up here.

/// Errors raised when an input cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// A date string is not a recognizable calendar date.
    #[error("invalid date: {input:?}")]
    InvalidDate { input: String },

    /// A discipline label does not name any known discipline.
    #[error("unknown discipline: {0:?}")]
    UnknownDiscipline(String),
}
