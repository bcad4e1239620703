//! Course offering model
//!
//! An offering pairs a course type with a course. The pair must be unique
//! across the collection, and both sides must refer to stored records.

use serde::{Deserialize, Serialize};

use super::{next_record_id, parse_optional_id, parse_record_id, RecordId};
use crate::core::error::ValidationError;
use crate::core::models::{Course, CourseType};

/// A type-course combination that students can be mapped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    /// Unique record identifier.
    pub id: RecordId,
    /// Course type side of the pair.
    pub course_type_id: RecordId,
    /// Course side of the pair.
    pub course_id: RecordId,
}

/// Form state for adding or editing an offering.
///
/// Selections are kept as typed text until submit, so an untouched field
/// stays distinguishable from a chosen one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferingDraft {
    /// Id the record will carry: fresh for an add, existing for an edit.
    pub id: RecordId,
    /// Selected course type id, or empty when nothing is chosen.
    pub course_type_id: String,
    /// Selected course id, or empty when nothing is chosen.
    pub course_id: String,
}

impl OfferingDraft {
    /// Blank draft preselecting the first stored course type and course.
    ///
    /// Returns `None` while either parent collection is empty, since no
    /// valid pair can be formed yet.
    #[must_use]
    pub fn blank(
        course_types: &[CourseType],
        courses: &[Course],
        existing: &[Offering],
    ) -> Option<Self> {
        let first_type = course_types.first()?;
        let first_course = courses.first()?;
        Some(Self {
            id: next_record_id(existing.iter().map(|record| record.id)),
            course_type_id: first_type.id.to_string(),
            course_id: first_course.id.to_string(),
        })
    }

    /// Draft prefilled from an existing record, for editing.
    #[must_use]
    pub fn from_record(record: &Offering) -> Self {
        Self {
            id: record.id,
            course_type_id: record.course_type_id.to_string(),
            course_id: record.course_id.to_string(),
        }
    }
}

/// Validate a draft and build the next collection with it applied.
///
/// Both selections must be present, numeric, and refer to stored records,
/// and the resulting pair must not duplicate another offering. The record
/// being edited is excluded from the duplicate check so saving it unchanged
/// still succeeds.
pub fn submit(
    draft: &OfferingDraft,
    course_types: &[CourseType],
    courses: &[Course],
    collection: &[Offering],
) -> Result<Vec<Offering>, ValidationError> {
    if draft.course_type_id.trim().is_empty() || draft.course_id.trim().is_empty() {
        return Err(ValidationError::SelectionRequired);
    }
    let course_type_id = parse_record_id(&draft.course_type_id)?;
    let course_id = parse_record_id(&draft.course_id)?;
    if !course_types.iter().any(|record| record.id == course_type_id) {
        return Err(ValidationError::UnknownCourseType(course_type_id));
    }
    if !courses.iter().any(|record| record.id == course_id) {
        return Err(ValidationError::UnknownCourse(course_id));
    }
    let duplicate = collection.iter().any(|existing| {
        existing.course_type_id == course_type_id
            && existing.course_id == course_id
            && existing.id != draft.id
    });
    if duplicate {
        return Err(ValidationError::DuplicateOffering);
    }
    let record = Offering {
        id: draft.id,
        course_type_id,
        course_id,
    };
    Ok(upsert(collection, record))
}

/// Build the next collection without the record carrying `id`.
#[must_use]
pub fn remove(collection: &[Offering], id: RecordId) -> Vec<Offering> {
    collection
        .iter()
        .filter(|record| record.id != id)
        .cloned()
        .collect()
}

/// Narrow a collection by optional course type and course criteria.
///
/// An unset criterion matches everything; set criteria combine with AND.
/// Criteria arrive as typed text where an empty field means "all".
pub fn filter<'a>(
    collection: &'a [Offering],
    type_criterion: &str,
    course_criterion: &str,
) -> Result<Vec<&'a Offering>, ValidationError> {
    let wanted_type = parse_optional_id(type_criterion)?;
    let wanted_course = parse_optional_id(course_criterion)?;
    Ok(collection
        .iter()
        .filter(|record| {
            let matches_type = wanted_type.is_none_or(|id| record.course_type_id == id);
            let matches_course = wanted_course.is_none_or(|id| record.course_id == id);
            matches_type && matches_course
        })
        .collect())
}

/// Human-readable label for an offering: "Type - Course".
///
/// Either side falls back to "N/A" when its referent no longer exists.
#[must_use]
pub fn display_name(record: &Offering, course_types: &[CourseType], courses: &[Course]) -> String {
    let type_name = course_types
        .iter()
        .find(|candidate| candidate.id == record.course_type_id)
        .map_or("N/A", |found| found.name.as_str());
    let course_name = courses
        .iter()
        .find(|candidate| candidate.id == record.course_id)
        .map_or("N/A", |found| found.name.as_str());
    format!("{type_name} - {course_name}")
}

fn upsert(collection: &[Offering], record: Offering) -> Vec<Offering> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn course_types() -> Vec<CourseType> {
        vec![
            CourseType {
                id: 1,
                name: "Individual".to_string(),
            },
            CourseType {
                id: 2,
                name: "Group".to_string(),
            },
        ]
    }

    fn courses() -> Vec<Course> {
        vec![
            Course {
                id: 10,
                name: "English".to_string(),
            },
            Course {
                id: 11,
                name: "Hindi".to_string(),
            },
        ]
    }

    fn stored() -> Vec<Offering> {
        vec![
            Offering {
                id: 100,
                course_type_id: 1,
                course_id: 10,
            },
            Offering {
                id: 101,
                course_type_id: 2,
                course_id: 11,
            },
        ]
    }

    fn draft(id: RecordId, course_type_id: &str, course_id: &str) -> OfferingDraft {
        OfferingDraft {
            id,
            course_type_id: course_type_id.to_string(),
            course_id: course_id.to_string(),
        }
    }

    #[test]
    fn test_submit_appends_a_new_pair() {
        let next = submit(&draft(102, "1", "11"), &course_types(), &courses(), &stored()).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].course_type_id, 1);
        assert_eq!(next[2].course_id, 11);
    }

    #[test]
    fn test_submit_requires_both_selections() {
        for (type_id, course_id) in [("", "10"), ("1", ""), ("", "")] {
            assert_eq!(
                submit(
                    &draft(102, type_id, course_id),
                    &course_types(),
                    &courses(),
                    &stored()
                ),
                Err(ValidationError::SelectionRequired)
            );
        }
    }

    #[test]
    fn test_submit_rejects_non_numeric_selection() {
        assert_eq!(
            submit(
                &draft(102, "first", "10"),
                &course_types(),
                &courses(),
                &stored()
            ),
            Err(ValidationError::InvalidId("first".to_string()))
        );
    }

    #[test]
    fn test_submit_rejects_unknown_referents() {
        assert_eq!(
            submit(&draft(102, "9", "10"), &course_types(), &courses(), &stored()),
            Err(ValidationError::UnknownCourseType(9))
        );
        assert_eq!(
            submit(&draft(102, "1", "99"), &course_types(), &courses(), &stored()),
            Err(ValidationError::UnknownCourse(99))
        );
    }

    #[test]
    fn test_submit_rejects_duplicate_pair() {
        assert_eq!(
            submit(&draft(102, "1", "10"), &course_types(), &courses(), &stored()),
            Err(ValidationError::DuplicateOffering)
        );
    }

    #[test]
    fn test_resaving_a_record_unchanged_is_not_a_duplicate() {
        let next = submit(&draft(100, "1", "10"), &course_types(), &courses(), &stored()).unwrap();
        assert_eq!(next, stored());
    }

    #[test]
    fn test_editing_into_an_existing_pair_is_a_duplicate() {
        assert_eq!(
            submit(&draft(101, "1", "10"), &course_types(), &courses(), &stored()),
            Err(ValidationError::DuplicateOffering)
        );
    }

    #[test]
    fn test_filter_unset_criteria_match_everything() {
        let collection = stored();
        let all = filter(&collection, "", "").unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_filter_criteria_combine_with_and() {
        let collection = stored();
        let by_type = filter(&collection, "1", "").unwrap();
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].id, 100);

        let by_both = filter(&collection, "1", "11").unwrap();
        assert!(by_both.is_empty());
    }

    #[test]
    fn test_filter_rejects_non_numeric_criterion() {
        assert!(filter(&stored(), "all", "").is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_na() {
        let record = Offering {
            id: 102,
            course_type_id: 1,
            course_id: 99,
        };
        assert_eq!(
            display_name(&record, &course_types(), &courses()),
            "Individual - N/A"
        );
    }

    #[test]
    fn test_blank_draft_preselects_first_records() {
        let draft = OfferingDraft::blank(&course_types(), &courses(), &stored()).unwrap();
        assert_eq!(draft.course_type_id, "1");
        assert_eq!(draft.course_id, "10");
        assert!(draft.id > 101);

        assert!(OfferingDraft::blank(&[], &courses(), &stored()).is_none());
        assert!(OfferingDraft::blank(&course_types(), &[], &stored()).is_none());
    }

    #[test]
    fn test_wire_format_uses_camel_case_keys() {
        let record = Offering {
            id: 100,
            course_type_id: 1,
            course_id: 10,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":100,"courseTypeId":1,"courseId":10}"#);
        let parsed: Offering = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
