//! End-to-end tests for the course registry
//!
//! These drive complete workflows through the public API the way the
//! command layer does, and check what actually lands on disk.

use course_manager::core::models::{
    offering, student, CourseDraft, CourseTypeDraft, OfferingDraft, StudentDraft,
};
use course_manager::core::{Registry, Store};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn open_registry(dir: &Path) -> Registry {
    Registry::open(Store::new(dir)).expect("Failed to open registry")
}

/// Two course types and two courses, enough to build offerings on.
fn seed_catalog(registry: &mut Registry) {
    registry
        .submit_course_type(&CourseTypeDraft {
            id: 1,
            name: "Individual".to_string(),
        })
        .expect("Failed to create course type");
    registry
        .submit_course_type(&CourseTypeDraft {
            id: 2,
            name: "Group".to_string(),
        })
        .expect("Failed to create course type");
    registry
        .submit_course(&CourseDraft {
            id: 10,
            name: "English".to_string(),
        })
        .expect("Failed to create course");
    registry
        .submit_course(&CourseDraft {
            id: 11,
            name: "Hindi".to_string(),
        })
        .expect("Failed to create course");
}

#[test]
fn test_enrollment_workflow_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut registry = open_registry(dir.path());
    seed_catalog(&mut registry);

    registry
        .submit_offering(&OfferingDraft {
            id: 100,
            course_type_id: "1".to_string(),
            course_id: "10".to_string(),
        })
        .expect("Failed to create offering");
    registry
        .submit_student(&StudentDraft {
            id: 200,
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
        })
        .expect("Failed to register student");
    registry
        .map_student(200, "100")
        .expect("Failed to map student");

    let record = registry.find_offering(100).expect("Offering should exist");
    assert_eq!(
        offering::display_name(record, registry.course_types(), registry.courses()),
        "Individual - English"
    );
    assert_eq!(
        student::offering_display(
            registry.students()[0].offering_id,
            registry.offerings(),
            registry.course_types(),
            registry.courses()
        ),
        "Individual - English"
    );

    // Deleting the offering must unmap the student immediately
    registry
        .delete_offering(100)
        .expect("Failed to delete offering");
    assert_eq!(registry.students()[0].offering_id, None);
    assert_eq!(
        student::offering_display(
            registry.students()[0].offering_id,
            registry.offerings(),
            registry.course_types(),
            registry.courses()
        ),
        "Not Mapped"
    );

    // And the corrected state must be what a fresh process sees
    let reloaded = open_registry(dir.path());
    assert!(reloaded.offerings().is_empty());
    assert_eq!(reloaded.students()[0].offering_id, None);
}

#[test]
fn test_duplicate_offering_pair_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut registry = open_registry(dir.path());
    seed_catalog(&mut registry);

    registry
        .submit_offering(&OfferingDraft {
            id: 100,
            course_type_id: "1".to_string(),
            course_id: "10".to_string(),
        })
        .expect("Failed to create offering");

    let err = registry
        .submit_offering(&OfferingDraft {
            id: 101,
            course_type_id: "1".to_string(),
            course_id: "10".to_string(),
        })
        .expect_err("Duplicate pair should be rejected");
    assert_eq!(
        err.to_string(),
        "This Course Offering (Type-Course combination) already exists."
    );
    assert_eq!(registry.offerings().len(), 1);

    // Re-saving an offering unchanged is not a duplicate of itself
    let current = registry.offerings()[0].clone();
    registry
        .submit_offering(&OfferingDraft::from_record(&current))
        .expect("Unchanged edit should be accepted");
    assert_eq!(registry.offerings().len(), 1);
}

#[test]
fn test_offering_filter_narrows_by_type_and_course() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut registry = open_registry(dir.path());
    seed_catalog(&mut registry);

    for (id, type_id, course_id) in [(100, "1", "10"), (101, "1", "11"), (102, "2", "10")] {
        registry
            .submit_offering(&OfferingDraft {
                id,
                course_type_id: type_id.to_string(),
                course_id: course_id.to_string(),
            })
            .expect("Failed to create offering");
    }

    assert_eq!(registry.filter_offerings("", "").unwrap().len(), 3);
    assert_eq!(registry.filter_offerings("1", "").unwrap().len(), 2);
    assert_eq!(registry.filter_offerings("", "10").unwrap().len(), 2);

    let exact = registry.filter_offerings("1", "11").unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].id, 101);

    assert!(registry.filter_offerings("2", "11").unwrap().is_empty());

    let err = registry.filter_offerings("abc", "").unwrap_err();
    assert_eq!(err.to_string(), "Invalid id 'abc': expected a number.");
}

#[test]
fn test_blank_input_is_rejected_before_anything_is_written() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut registry = open_registry(dir.path());
    seed_catalog(&mut registry);

    let err = registry
        .submit_student(&StudentDraft {
            id: 200,
            name: "   ".to_string(),
            email: String::new(),
        })
        .expect_err("Whitespace-only details should be rejected");
    assert_eq!(err.to_string(), "Name and Email are required.");
    assert!(registry.students().is_empty());
    assert!(!dir.path().join("students.json").exists());

    let err = registry
        .submit_course_type(&CourseTypeDraft {
            id: 3,
            name: "  ".to_string(),
        })
        .expect_err("Blank name should be rejected");
    assert_eq!(err.to_string(), "Course Type Name cannot be empty.");

    let reloaded = open_registry(dir.path());
    assert_eq!(reloaded.course_types().len(), 2);
}

#[test]
fn test_student_details_are_stored_as_typed() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut registry = open_registry(dir.path());

    // Catalog names are trimmed on save, student details are not
    registry
        .submit_course(&CourseDraft {
            id: 10,
            name: "  Maths  ".to_string(),
        })
        .expect("Failed to create course");
    assert_eq!(registry.find_course(10).unwrap().name, "Maths");

    registry
        .submit_student(&StudentDraft {
            id: 200,
            name: " Asha Rao ".to_string(),
            email: " asha@example.com ".to_string(),
        })
        .expect("Failed to register student");
    let stored = registry.find_student(200).unwrap();
    assert_eq!(stored.name, " Asha Rao ");
    assert_eq!(stored.email, " asha@example.com ");
}

#[test]
fn test_reload_preserves_insertion_order_and_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut registry = open_registry(dir.path());

    for (id, name) in [(5, "Group"), (2, "Individual"), (9, "Special")] {
        registry
            .submit_course_type(&CourseTypeDraft {
                id,
                name: name.to_string(),
            })
            .expect("Failed to create course type");
    }
    registry
        .submit_course_type(&CourseTypeDraft {
            id: 2,
            name: "One-on-one".to_string(),
        })
        .expect("Failed to edit course type");

    let reloaded = open_registry(dir.path());
    let names: Vec<&str> = reloaded
        .course_types()
        .iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, ["Group", "One-on-one", "Special"]);
    assert_eq!(reloaded.course_types()[1].id, 2);
}

#[test]
fn test_editing_details_keeps_the_mapping() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut registry = open_registry(dir.path());
    seed_catalog(&mut registry);
    registry
        .submit_offering(&OfferingDraft {
            id: 100,
            course_type_id: "1".to_string(),
            course_id: "10".to_string(),
        })
        .expect("Failed to create offering");
    registry
        .submit_student(&StudentDraft {
            id: 200,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
        })
        .expect("Failed to register student");
    registry
        .map_student(200, "100")
        .expect("Failed to map student");

    registry
        .submit_student(&StudentDraft {
            id: 200,
            name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
        })
        .expect("Failed to edit student");

    let reloaded = open_registry(dir.path());
    let stored = reloaded.find_student(200).unwrap();
    assert_eq!(stored.name, "Asha Rao");
    assert_eq!(stored.offering_id, Some(100));
}

#[test]
fn test_startup_reconcile_corrects_once_then_stays_quiet() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("offerings.json"),
        r#"[{"id":100,"courseTypeId":1,"courseId":10}]"#,
    )
    .expect("Failed to seed offerings");
    fs::write(
        dir.path().join("students.json"),
        concat!(
            r#"[{"id":200,"name":"Asha","email":"asha@example.com","offeringId":100},"#,
            r#"{"id":201,"name":"Ravi","email":"ravi@example.com","offeringId":999}]"#,
        ),
    )
    .expect("Failed to seed students");

    let registry = open_registry(dir.path());
    assert_eq!(registry.students()[0].offering_id, Some(100));
    assert_eq!(registry.students()[1].offering_id, None);

    let corrected =
        fs::read_to_string(dir.path().join("students.json")).expect("Failed to read students");
    assert!(corrected.contains(r#""offeringId":100"#));
    assert!(corrected.contains(r#""offeringId":"""#));

    // A second open finds nothing left to fix and rewrites nothing
    let _again = open_registry(dir.path());
    let unchanged =
        fs::read_to_string(dir.path().join("students.json")).expect("Failed to read students");
    assert_eq!(corrected, unchanged);
}
