//! Error types for validation and persistence

use thiserror::Error;

use crate::core::models::RecordId;

/// Form-level validation failure.
///
/// Raised when a submitted record fails a local check. A validation error is
/// reported inline by the caller and never mutates a collection or triggers
/// a persistence write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was blank or whitespace-only.
    #[error("{0} cannot be empty.")]
    FieldRequired(&'static str),

    /// Student name and email must both be filled in.
    #[error("Name and Email are required.")]
    DetailsRequired,

    /// An offering needs both a course type and a course selected.
    #[error("Both Course Type and Course must be selected.")]
    SelectionRequired,

    /// The (course type, course) pair already exists on another offering.
    #[error("This Course Offering (Type-Course combination) already exists.")]
    DuplicateOffering,

    /// An identifier field did not parse as a number.
    #[error("Invalid id '{0}': expected a number.")]
    InvalidId(String),

    /// A selected course type id does not reference a live record.
    #[error("No course type with id {0} exists.")]
    UnknownCourseType(RecordId),

    /// A selected course id does not reference a live record.
    #[error("No course with id {0} exists.")]
    UnknownCourse(RecordId),

    /// A selected offering id does not reference a live record.
    #[error("No course offering with id {0} exists.")]
    UnknownOffering(RecordId),
}

/// Persistence failure while writing a collection.
///
/// Reads never produce this error: a missing or unparseable stored value is
/// treated as "no data" and falls back to an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The serialized payload could not be written to disk.
    #[error("failed to write '{key}': {source}")]
    Write {
        /// Storage key being written.
        key: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The collection could not be serialized to JSON.
    #[error("failed to encode '{key}': {source}")]
    Encode {
        /// Storage key being written.
        key: String,
        /// Underlying serializer failure.
        source: serde_json::Error,
    },
}

/// Combined error for registry operations that validate and then persist.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The submitted record failed validation; nothing was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The collection changed in memory but could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}
