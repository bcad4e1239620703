//! Registry tying the stored collections together
//!
//! The registry owns the in-memory copy of all four collections, loads them
//! once at startup, and is the only path through which they change. Every
//! mutation validates, replaces the collection wholesale, and persists the
//! new version before returning.
//!
//! Referential integrity is enforced in one direction: students may only be
//! mapped to live offerings. Whenever the offering collection changes (and
//! once at startup, in case the stored data predates the rule), students
//! pointing at dead offerings are unmapped and persisted if anything moved.

use logger::debug;

use crate::core::error::{RegistryError, StoreError, ValidationError};
use crate::core::models::{
    course, course_type, offering, student, Course, CourseDraft, CourseType, CourseTypeDraft,
    Offering, OfferingDraft, RecordId, Student, StudentDraft,
};
use crate::core::store::{
    Store, COURSES_KEY, COURSE_TYPES_KEY, OFFERINGS_KEY, STUDENTS_KEY,
};

/// Owner of the loaded collections and their persistence.
#[derive(Debug)]
pub struct Registry {
    store: Store,
    course_types: Vec<CourseType>,
    courses: Vec<Course>,
    offerings: Vec<Offering>,
    students: Vec<Student>,
}

impl Registry {
    /// Load all collections from `store` and reconcile student mappings.
    ///
    /// Stored data written before an offering was deleted elsewhere can
    /// still carry dangling mappings; those are corrected (and persisted)
    /// here so every caller observes the invariant.
    pub fn open(store: Store) -> Result<Self, StoreError> {
        let course_types = store.load(COURSE_TYPES_KEY);
        let courses = store.load(COURSES_KEY);
        let offerings = store.load(OFFERINGS_KEY);
        let students = store.load(STUDENTS_KEY);
        debug!(
            "Loaded {} course type(s), {} course(s), {} offering(s), {} student(s)",
            course_types.len(),
            courses.len(),
            offerings.len(),
            students.len()
        );
        let mut registry = Self {
            store,
            course_types,
            courses,
            offerings,
            students,
        };
        registry.reconcile_students()?;
        Ok(registry)
    }

    /// Stored course types, in insertion order.
    #[must_use]
    pub fn course_types(&self) -> &[CourseType] {
        &self.course_types
    }

    /// Stored courses, in insertion order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Stored offerings, in insertion order.
    #[must_use]
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Stored students, in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Look up a course type by id.
    #[must_use]
    pub fn find_course_type(&self, id: RecordId) -> Option<&CourseType> {
        self.course_types.iter().find(|record| record.id == id)
    }

    /// Look up a course by id.
    #[must_use]
    pub fn find_course(&self, id: RecordId) -> Option<&Course> {
        self.courses.iter().find(|record| record.id == id)
    }

    /// Look up an offering by id.
    #[must_use]
    pub fn find_offering(&self, id: RecordId) -> Option<&Offering> {
        self.offerings.iter().find(|record| record.id == id)
    }

    /// Look up a student by id.
    #[must_use]
    pub fn find_student(&self, id: RecordId) -> Option<&Student> {
        self.students.iter().find(|record| record.id == id)
    }

    /// Validate and store a course type draft.
    pub fn submit_course_type(&mut self, draft: &CourseTypeDraft) -> Result<(), RegistryError> {
        let next = course_type::submit(&self.course_types, draft)?;
        self.course_types = next;
        self.store.save(COURSE_TYPES_KEY, &self.course_types)?;
        Ok(())
    }

    /// Delete a course type. Offerings referencing it are left in place and
    /// render with an "N/A" label until edited.
    pub fn delete_course_type(&mut self, id: RecordId) -> Result<(), RegistryError> {
        self.course_types = course_type::remove(&self.course_types, id);
        self.store.save(COURSE_TYPES_KEY, &self.course_types)?;
        Ok(())
    }

    /// Validate and store a course draft.
    pub fn submit_course(&mut self, draft: &CourseDraft) -> Result<(), RegistryError> {
        let next = course::submit(&self.courses, draft)?;
        self.courses = next;
        self.store.save(COURSES_KEY, &self.courses)?;
        Ok(())
    }

    /// Delete a course. Offerings referencing it are left in place and
    /// render with an "N/A" label until edited.
    pub fn delete_course(&mut self, id: RecordId) -> Result<(), RegistryError> {
        self.courses = course::remove(&self.courses, id);
        self.store.save(COURSES_KEY, &self.courses)?;
        Ok(())
    }

    /// Validate and store an offering draft.
    pub fn submit_offering(&mut self, draft: &OfferingDraft) -> Result<(), RegistryError> {
        let next = offering::submit(draft, &self.course_types, &self.courses, &self.offerings)?;
        self.commit_offerings(next)
    }

    /// Delete an offering and unmap any students mapped to it.
    pub fn delete_offering(&mut self, id: RecordId) -> Result<(), RegistryError> {
        let next = offering::remove(&self.offerings, id);
        self.commit_offerings(next)
    }

    /// Narrow the offerings by optional type/course criteria given as text.
    pub fn filter_offerings(
        &self,
        type_criterion: &str,
        course_criterion: &str,
    ) -> Result<Vec<&Offering>, ValidationError> {
        offering::filter(&self.offerings, type_criterion, course_criterion)
    }

    /// Validate and store a student details draft. Never touches mappings.
    pub fn submit_student(&mut self, draft: &StudentDraft) -> Result<(), RegistryError> {
        let next = student::submit_details(&self.students, draft)?;
        self.students = next;
        self.store.save(STUDENTS_KEY, &self.students)?;
        Ok(())
    }

    /// Delete a student. No other collection is affected.
    pub fn delete_student(&mut self, id: RecordId) -> Result<(), RegistryError> {
        self.students = student::remove(&self.students, id);
        self.store.save(STUDENTS_KEY, &self.students)?;
        Ok(())
    }

    /// Update one student's mapping from a typed selection: empty unmaps,
    /// a numeric value must reference a live offering.
    pub fn map_student(
        &mut self,
        student_id: RecordId,
        selection: &str,
    ) -> Result<(), RegistryError> {
        let next = student::submit_mapping(&self.students, &self.offerings, student_id, selection)?;
        self.students = next;
        self.store.save(STUDENTS_KEY, &self.students)?;
        Ok(())
    }

    /// Replace the offering collection, persist it, and bring student
    /// mappings back in line.
    fn commit_offerings(&mut self, next: Vec<Offering>) -> Result<(), RegistryError> {
        self.offerings = next;
        self.store.save(OFFERINGS_KEY, &self.offerings)?;
        self.reconcile_students()?;
        Ok(())
    }

    /// Unmap students pointing at dead offerings. Persists only when a
    /// mapping actually changed, so untouched data is never rewritten.
    fn reconcile_students(&mut self) -> Result<(), StoreError> {
        let next = student::reconcile(&self.students, &self.offerings);
        if next != self.students {
            let corrected = next
                .iter()
                .zip(self.students.iter())
                .filter(|(after, before)| after != before)
                .count();
            debug!("Unmapped {corrected} student(s) with dead offering references");
            self.students = next;
            self.store.save(STUDENTS_KEY, &self.students)?;
        }
        Ok(())
    }
}
