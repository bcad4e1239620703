//! Course model

use serde::{Deserialize, Serialize};

use super::{next_record_id, RecordId};
use crate::core::error::ValidationError;

/// A subject that can be offered, such as "English" or "Hindi".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique record identifier.
    pub id: RecordId,
    /// Display name, stored trimmed.
    pub name: String,
}

/// Form state for adding or editing a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    /// Id the record will carry: fresh for an add, existing for an edit.
    pub id: RecordId,
    /// Name as typed, possibly with surrounding whitespace.
    pub name: String,
}

impl CourseDraft {
    /// Blank draft carrying a freshly generated id.
    #[must_use]
    pub fn blank(existing: &[Course]) -> Self {
        Self {
            id: next_record_id(existing.iter().map(|record| record.id)),
            name: String::new(),
        }
    }

    /// Draft prefilled from an existing record, for editing.
    #[must_use]
    pub fn from_record(record: &Course) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
        }
    }
}

/// Validate a draft and build the next collection with it applied.
///
/// The name must be non-empty once trimmed and is stored trimmed. A draft
/// whose id is already present replaces that record in place; otherwise the
/// record is appended.
pub fn submit(collection: &[Course], draft: &CourseDraft) -> Result<Vec<Course>, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::FieldRequired("Course Name"));
    }
    let record = Course {
        id: draft.id,
        name: name.to_string(),
    };
    Ok(upsert(collection, record))
}

/// Build the next collection without the record carrying `id`.
///
/// Deleting an id that is not present leaves the collection unchanged.
#[must_use]
pub fn remove(collection: &[Course], id: RecordId) -> Vec<Course> {
    collection
        .iter()
        .filter(|record| record.id != id)
        .cloned()
        .collect()
}

fn upsert(collection: &[Course], record: Course) -> Vec<Course> {
    if collection.iter().any(|existing| existing.id == record.id) {
        collection
            .iter()
            .map(|existing| {
                if existing.id == record.id {
                    record.clone()
                } else {
                    existing.clone()
                }
            })
            .collect()
    } else {
        let mut next = collection.to_vec();
        next.push(record);
        next
    }
}
