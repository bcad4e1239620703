//! Student model
//!
//! Students carry contact details and at most one mapping to a course
//! offering. Details and mapping change through separate operations, so
//! editing one can never clobber the other.

use serde::{Deserialize, Serialize};

use super::{next_record_id, parse_optional_id, RecordId};
use crate::core::error::ValidationError;
use crate::core::models::{Course, CourseType, Offering};

/// A registered student, possibly mapped to one offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique record identifier.
    pub id: RecordId,
    /// Name as entered at registration.
    pub name: String,
    /// Email as entered at registration.
    pub email: String,
    /// Offering the student is mapped to, if any.
    #[serde(default, with = "offering_ref")]
    pub offering_id: Option<RecordId>,
}

/// Form state for registering or editing a student's details.
///
/// The mapping is deliberately absent here; it has its own operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    /// Id the record will carry: fresh for an add, existing for an edit.
    pub id: RecordId,
    /// Name as typed.
    pub name: String,
    /// Email as typed.
    pub email: String,
}

impl StudentDraft {
    /// Blank draft carrying a freshly generated id.
    #[must_use]
    pub fn blank(existing: &[Student]) -> Self {
        Self {
            id: next_record_id(existing.iter().map(|record| record.id)),
            name: String::new(),
            email: String::new(),
        }
    }

    /// Draft prefilled from an existing record, for editing.
    #[must_use]
    pub fn from_record(record: &Student) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

/// Validate a details draft and build the next collection with it applied.
///
/// Name and email must both be non-empty once trimmed, but are stored as
/// entered. An existing record keeps its mapping; a new one starts
/// unmapped.
pub fn submit_details(
    collection: &[Student],
    draft: &StudentDraft,
) -> Result<Vec<Student>, ValidationError> {
    if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
        return Err(ValidationError::DetailsRequired);
    }
    if collection.iter().any(|existing| existing.id == draft.id) {
        Ok(collection
            .iter()
            .map(|existing| {
                if existing.id == draft.id {
                    Student {
                        id: existing.id,
                        name: draft.name.clone(),
                        email: draft.email.clone(),
                        offering_id: existing.offering_id,
                    }
                } else {
                    existing.clone()
                }
            })
            .collect())
    } else {
        let mut next = collection.to_vec();
        next.push(Student {
            id: draft.id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            offering_id: None,
        });
        Ok(next)
    }
}

/// Build the next collection with one student's mapping updated.
///
/// The selection arrives as typed text: empty unmaps, a numeric value must
/// reference a live offering. Other students are untouched, and a
/// `student_id` that matches nobody leaves the collection unchanged.
pub fn submit_mapping(
    collection: &[Student],
    offerings: &[Offering],
    student_id: RecordId,
    selection: &str,
) -> Result<Vec<Student>, ValidationError> {
    let chosen = parse_optional_id(selection)?;
    if let Some(offering_id) = chosen {
        if !offerings.iter().any(|record| record.id == offering_id) {
            return Err(ValidationError::UnknownOffering(offering_id));
        }
    }
    Ok(collection
        .iter()
        .map(|existing| {
            if existing.id == student_id {
                Student {
                    offering_id: chosen,
                    ..existing.clone()
                }
            } else {
                existing.clone()
            }
        })
        .collect())
}

/// Build the next collection without the record carrying `id`.
#[must_use]
pub fn remove(collection: &[Student], id: RecordId) -> Vec<Student> {
    collection
        .iter()
        .filter(|record| record.id != id)
        .cloned()
        .collect()
}

/// Unmap every student whose offering no longer exists.
///
/// Students mapped to a live offering, and students with no mapping, pass
/// through untouched, so applying this twice changes nothing.
#[must_use]
pub fn reconcile(collection: &[Student], offerings: &[Offering]) -> Vec<Student> {
    collection
        .iter()
        .map(|student| match student.offering_id {
            Some(offering_id) if !offerings.iter().any(|record| record.id == offering_id) => {
                Student {
                    offering_id: None,
                    ..student.clone()
                }
            }
            _ => student.clone(),
        })
        .collect()
}

/// Resolved course label for a student's mapping: "Type - Course".
///
/// Reads "Not Mapped" when the student has no mapping or the offering is
/// gone; a missing parent on a live offering degrades side by side.
#[must_use]
pub fn offering_display(
    offering_id: Option<RecordId>,
    offerings: &[Offering],
    course_types: &[CourseType],
    courses: &[Course],
) -> String {
    let Some(offering) = offering_id
        .and_then(|wanted| offerings.iter().find(|record| record.id == wanted))
    else {
        return "Not Mapped".to_string();
    };
    let type_name = course_types
        .iter()
        .find(|candidate| candidate.id == offering.course_type_id)
        .map_or("N/A Type", |found| found.name.as_str());
    let course_name = courses
        .iter()
        .find(|candidate| candidate.id == offering.course_id)
        .map_or("N/A Course", |found| found.name.as_str());
    format!("{type_name} - {course_name}")
}

/// Verbose option label used when presenting offerings to map against.
#[must_use]
pub fn verbose_option_label(
    offering: &Offering,
    course_types: &[CourseType],
    courses: &[Course],
) -> String {
    let type_name = course_types
        .iter()
        .find(|candidate| candidate.id == offering.course_type_id)
        .map_or("N/A", |found| found.name.as_str());
    let course_name = courses
        .iter()
        .find(|candidate| candidate.id == offering.course_id)
        .map_or("N/A", |found| found.name.as_str());
    format!("Course Type: {type_name} - Course Name: {course_name}")
}

/// Serialization shim for the optional offering reference.
///
/// The stored form is the empty string for "unmapped" and the bare number
/// for "mapped". Reads are forgiving: numeric strings parse, and anything
/// unparseable collapses to unmapped, which is where reconciliation would
/// land it anyway.
mod offering_ref {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::RecordId;

    pub fn serialize<S>(value: &Option<RecordId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_i64(*id),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Stored {
            Id(RecordId),
            Text(String),
        }

        Ok(match Option::<Stored>::deserialize(deserializer)? {
            None => None,
            Some(Stored::Id(id)) => Some(id),
            Some(Stored::Text(text)) => text.trim().parse::<RecordId>().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_types() -> Vec<CourseType> {
        vec![CourseType {
            id: 1,
            name: "Individual".to_string(),
        }]
    }

    fn courses() -> Vec<Course> {
        vec![Course {
            id: 10,
            name: "English".to_string(),
        }]
    }

    fn offerings() -> Vec<Offering> {
        vec![Offering {
            id: 100,
            course_type_id: 1,
            course_id: 10,
        }]
    }

    fn stored() -> Vec<Student> {
        vec![
            Student {
                id: 200,
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                offering_id: Some(100),
            },
            Student {
                id: 201,
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                offering_id: None,
            },
        ]
    }

    #[test]
    fn test_submit_details_registers_unmapped_student() {
        let draft = StudentDraft {
            id: 202,
            name: "Meena".to_string(),
            email: "meena@example.com".to_string(),
        };
        let next = submit_details(&stored(), &draft).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].offering_id, None);
    }

    #[test]
    fn test_submit_details_preserves_mapping_on_edit() {
        let draft = StudentDraft {
            id: 200,
            name: "Asha K".to_string(),
            email: "asha.k@example.com".to_string(),
        };
        let next = submit_details(&stored(), &draft).unwrap();
        assert_eq!(next[0].name, "Asha K");
        assert_eq!(next[0].offering_id, Some(100));
    }

    #[test]
    fn test_submit_details_stores_values_as_entered() {
        let draft = StudentDraft {
            id: 202,
            name: "  Meena  ".to_string(),
            email: " meena@example.com ".to_string(),
        };
        let next = submit_details(&stored(), &draft).unwrap();
        assert_eq!(next[2].name, "  Meena  ");
        assert_eq!(next[2].email, " meena@example.com ");
    }

    #[test]
    fn test_submit_details_requires_name_and_email() {
        for (name, email) in [("", "a@b.c"), ("Asha", ""), ("   ", "   ")] {
            let draft = StudentDraft {
                id: 202,
                name: name.to_string(),
                email: email.to_string(),
            };
            assert_eq!(
                submit_details(&stored(), &draft),
                Err(ValidationError::DetailsRequired)
            );
        }
    }

    #[test]
    fn test_submit_mapping_maps_and_unmaps() {
        let mapped = submit_mapping(&stored(), &offerings(), 201, "100").unwrap();
        assert_eq!(mapped[1].offering_id, Some(100));

        let unmapped = submit_mapping(&mapped, &offerings(), 201, "").unwrap();
        assert_eq!(unmapped[1].offering_id, None);
    }

    #[test]
    fn test_submit_mapping_rejects_dead_offering() {
        assert_eq!(
            submit_mapping(&stored(), &offerings(), 201, "999"),
            Err(ValidationError::UnknownOffering(999))
        );
    }

    #[test]
    fn test_submit_mapping_leaves_other_students_alone() {
        let next = submit_mapping(&stored(), &offerings(), 201, "100").unwrap();
        assert_eq!(next[0], stored()[0]);
    }

    #[test]
    fn test_reconcile_unmaps_dangling_references_only() {
        let next = reconcile(&stored(), &[]);
        assert_eq!(next[0].offering_id, None);
        assert_eq!(next[1].offering_id, None);

        let untouched = reconcile(&stored(), &offerings());
        assert_eq!(untouched, stored());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let once = reconcile(&stored(), &[]);
        let twice = reconcile(&once, &[]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_offering_display_resolves_or_reads_not_mapped() {
        assert_eq!(
            offering_display(Some(100), &offerings(), &course_types(), &courses()),
            "Individual - English"
        );
        assert_eq!(
            offering_display(None, &offerings(), &course_types(), &courses()),
            "Not Mapped"
        );
        assert_eq!(
            offering_display(Some(999), &offerings(), &course_types(), &courses()),
            "Not Mapped"
        );
    }

    #[test]
    fn test_offering_display_degrades_missing_parents() {
        assert_eq!(
            offering_display(Some(100), &offerings(), &[], &courses()),
            "N/A Type - English"
        );
        assert_eq!(
            offering_display(Some(100), &offerings(), &course_types(), &[]),
            "Individual - N/A Course"
        );
    }

    #[test]
    fn test_verbose_option_label_format() {
        assert_eq!(
            verbose_option_label(&offerings()[0], &course_types(), &courses()),
            "Course Type: Individual - Course Name: English"
        );
        assert_eq!(
            verbose_option_label(&offerings()[0], &[], &[]),
            "Course Type: N/A - Course Name: N/A"
        );
    }

    #[test]
    fn test_wire_format_writes_empty_string_when_unmapped() {
        let student = Student {
            id: 201,
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            offering_id: None,
        };
        let json = serde_json::to_string(&student).unwrap();
        assert_eq!(
            json,
            r#"{"id":201,"name":"Ravi","email":"ravi@example.com","offeringId":""}"#
        );
    }

    #[test]
    fn test_wire_format_writes_number_when_mapped() {
        let student = Student {
            id: 200,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            offering_id: Some(100),
        };
        let json = serde_json::to_string(&student).unwrap();
        assert_eq!(
            json,
            r#"{"id":200,"name":"Asha","email":"asha@example.com","offeringId":100}"#
        );
    }

    #[test]
    fn test_wire_format_reads_legacy_shapes() {
        let cases = [
            (r#"{"id":1,"name":"A","email":"a@b.c","offeringId":100}"#, Some(100)),
            (r#"{"id":1,"name":"A","email":"a@b.c","offeringId":"100"}"#, Some(100)),
            (r#"{"id":1,"name":"A","email":"a@b.c","offeringId":""}"#, None),
            (r#"{"id":1,"name":"A","email":"a@b.c","offeringId":null}"#, None),
            (r#"{"id":1,"name":"A","email":"a@b.c"}"#, None),
        ];
        for (json, expected) in cases {
            let parsed: Student = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.offering_id, expected, "for {json}");
        }
    }
}
