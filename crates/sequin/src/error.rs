//! Error types for the sequin crate.

use thiserror::Error;

/// Errors surfaced by terminal operations.
///
/// Building a pipeline never fails; only a terminal call can observe the
/// data and report one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SequinError {
    /// The pipeline produced no elements where at least one was required
    /// (`first`, `last`, `max`, `min`).
    #[error("sequence contains no elements")]
    EmptySequence,

    /// A `single` operation found zero or more than one element.
    ///
    /// `found` carries the actual number of surviving elements, so the
    /// zero-match and many-match causes stay distinguishable.
    #[error("expected exactly one element, found {found}")]
    NotExactlyOne { found: usize },

    /// `to_map` produced the same key for two elements.
    #[error("duplicate key in map conversion: {key}")]
    DuplicateKey { key: String },
}

/// Result type for sequin terminal operations.
pub type Result<T> = std::result::Result<T, SequinError>;
