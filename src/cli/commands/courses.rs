//! Course command handler

use logger::info;

use course_manager::core::error::ValidationError;
use course_manager::core::models::{parse_record_id, CourseDraft};
use course_manager::core::Registry;

use super::confirm;
use crate::args::CourseSubcommand;

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, registry: &mut Registry) {
    if let Err(message) = dispatch(subcommand, registry) {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

fn dispatch(subcommand: CourseSubcommand, registry: &mut Registry) -> Result<(), String> {
    match subcommand {
        CourseSubcommand::List => {
            list(registry);
            Ok(())
        }
        CourseSubcommand::Add { name } => add(registry, name),
        CourseSubcommand::Edit { id, name } => edit(registry, &id, name),
        CourseSubcommand::Delete { id, yes } => delete(registry, &id, yes),
    }
}

fn list(registry: &Registry) {
    println!("\n=== Courses ===\n");
    let records = registry.courses();
    if records.is_empty() {
        println!("No Courses found.");
        return;
    }
    println!("{:<15} NAME", "ID");
    for record in records {
        println!("{:<15} {}", record.id, record.name);
    }
}

fn add(registry: &mut Registry, name: String) -> Result<(), String> {
    let mut draft = CourseDraft::blank(registry.courses());
    draft.name = name;
    registry.submit_course(&draft).map_err(|e| e.to_string())?;
    println!("✓ Course '{}' created (id {})", draft.name.trim(), draft.id);
    info!("Course {} created", draft.id);
    Ok(())
}

fn edit(registry: &mut Registry, id: &str, name: String) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    let record = registry
        .find_course(id)
        .ok_or_else(|| ValidationError::UnknownCourse(id).to_string())?;
    let mut draft = CourseDraft::from_record(record);
    draft.name = name;
    registry.submit_course(&draft).map_err(|e| e.to_string())?;
    println!("✓ Course {id} updated");
    info!("Course {id} updated");
    Ok(())
}

fn delete(registry: &mut Registry, id: &str, assume_yes: bool) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    if registry.find_course(id).is_none() {
        return Err(ValidationError::UnknownCourse(id).to_string());
    }
    if !confirm("Are you sure you want to delete this course?", assume_yes) {
        println!("✗ Deletion cancelled");
        return Ok(());
    }
    registry.delete_course(id).map_err(|e| e.to_string())?;
    println!("✓ Course {id} deleted");
    info!("Course {id} deleted");
    Ok(())
}
