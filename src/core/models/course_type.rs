//! Course type model

use serde::{Deserialize, Serialize};

use super::{next_record_id, RecordId};
use crate::core::error::ValidationError;

/// A category of course delivery, such as "Individual" or "Group".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseType {
    /// Unique record identifier.
    pub id: RecordId,
    /// Display name, stored trimmed.
    pub name: String,
}

/// Form state for adding or editing a course type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTypeDraft {
    /// Id the record will carry: fresh for an add, existing for an edit.
    pub id: RecordId,
    /// Name as typed, possibly with surrounding whitespace.
    pub name: String,
}

impl CourseTypeDraft {
    /// Blank draft carrying a freshly generated id.
    #[must_use]
    pub fn blank(existing: &[CourseType]) -> Self {
        Self {
            id: next_record_id(existing.iter().map(|record| record.id)),
            name: String::new(),
        }
    }

    /// Draft prefilled from an existing record, for editing.
    #[must_use]
    pub fn from_record(record: &CourseType) -> Self {
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
pub fn submit(
    collection: &[CourseType],
    draft: &CourseTypeDraft,
) -> Result<Vec<CourseType>, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::FieldRequired("Course Type Name"));
    }
    let record = CourseType {
        id: draft.id,
        name: name.to_string(),
    };
    Ok(upsert(collection, record))
}

/// Build the next collection without the record carrying `id`.
///
/// Deleting an id that is not present leaves the collection unchanged.
#[must_use]
pub fn remove(collection: &[CourseType], id: RecordId) -> Vec<CourseType> {
    collection
        .iter()
        .filter(|record| record.id != id)
        .cloned()
        .collect()
}

fn upsert(collection: &[CourseType], record: CourseType) -> Vec<CourseType> {
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
