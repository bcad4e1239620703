//! Data models for the course manager
//!
//! Each stored collection has an entity struct that mirrors the JSON wire
//! format and a draft struct holding form input as entered. Validation turns
//! a draft into the next version of its collection without touching the
//! current one; persistence is the caller's concern.

pub mod course;
pub mod course_type;
pub mod offering;
pub mod student;

pub use course::{Course, CourseDraft};
pub use course_type::{CourseType, CourseTypeDraft};
pub use offering::{Offering, OfferingDraft};
pub use student::{Student, StudentDraft};

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::error::ValidationError;

/// Numeric identifier shared by every stored record.
pub type RecordId = i64;

/// Parse a user-supplied identifier into a typed id.
///
/// Surrounding whitespace is ignored. Anything that is not a plain integer
/// is rejected so unknown-id lookups report the id the user actually typed.
pub fn parse_record_id(input: &str) -> Result<RecordId, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<RecordId>()
        .map_err(|_| ValidationError::InvalidId(trimmed.to_string()))
}

/// Parse an optional selection, where an empty field means "none chosen".
pub fn parse_optional_id(input: &str) -> Result<Option<RecordId>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        parse_record_id(trimmed).map(Some)
    }
}

/// Generate a fresh identifier for a new record.
///
/// Ids are millisecond timestamps, which keeps them unique in interactive
/// use. Records created faster than the clock ticks (scripts, tests) fall
/// back to one past the highest existing id, so a fresh id never collides.
pub fn next_record_id<I>(existing: I) -> RecordId
where
    I: IntoIterator<Item = RecordId>,
{
    let clock = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(RecordId::MAX)
        });
    let floor = existing
        .into_iter()
        .max()
        .map_or(0, |highest| highest.saturating_add(1));
    clock.max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id_accepts_digits() {
        assert_eq!(parse_record_id("42"), Ok(42));
        assert_eq!(parse_record_id("  1700000000000  "), Ok(1_700_000_000_000));
        assert_eq!(parse_record_id("-3"), Ok(-3));
    }

    #[test]
    fn test_parse_record_id_rejects_garbage() {
        assert_eq!(
            parse_record_id("abc"),
            Err(ValidationError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            parse_record_id("12.5"),
            Err(ValidationError::InvalidId("12.5".to_string()))
        );
        assert_eq!(
            parse_record_id(""),
            Err(ValidationError::InvalidId(String::new()))
        );
    }

    #[test]
    fn test_parse_optional_id_treats_blank_as_none() {
        assert_eq!(parse_optional_id(""), Ok(None));
        assert_eq!(parse_optional_id("   "), Ok(None));
        assert_eq!(parse_optional_id("7"), Ok(Some(7)));
        assert!(parse_optional_id("seven").is_err());
    }

    #[test]
    fn test_next_record_id_tracks_the_clock() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(0));
        let id = next_record_id([]);
        assert!(id >= before);
    }

    #[test]
    fn test_next_record_id_never_reissues_an_id() {
        let taken = RecordId::MAX - 1;
        assert_eq!(next_record_id([taken]), RecordId::MAX);
        let first = next_record_id([]);
        let second = next_record_id([first]);
        assert!(second > first);
    }
}
