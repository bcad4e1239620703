//! Integration smoke tests for `course_manager`

use course_manager::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
