//! Course type command handler

use logger::info;

use course_manager::core::error::ValidationError;
use course_manager::core::models::{parse_record_id, CourseTypeDraft};
use course_manager::core::Registry;

use super::confirm;
use crate::args::TypeSubcommand;

/// Dispatch course type subcommands
pub fn run(subcommand: TypeSubcommand, registry: &mut Registry) {
    if let Err(message) = dispatch(subcommand, registry) {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

fn dispatch(subcommand: TypeSubcommand, registry: &mut Registry) -> Result<(), String> {
    match subcommand {
        TypeSubcommand::List => {
            list(registry);
            Ok(())
        }
        TypeSubcommand::Add { name } => add(registry, name),
        TypeSubcommand::Edit { id, name } => edit(registry, &id, name),
        TypeSubcommand::Delete { id, yes } => delete(registry, &id, yes),
    }
}

fn list(registry: &Registry) {
    println!("\n=== Course Types ===\n");
    let records = registry.course_types();
    if records.is_empty() {
        println!("No Course Types found.");
        return;
    }
    println!("{:<15} NAME", "ID");
    for record in records {
        println!("{:<15} {}", record.id, record.name);
    }
}

fn add(registry: &mut Registry, name: String) -> Result<(), String> {
    let mut draft = CourseTypeDraft::blank(registry.course_types());
    draft.name = name;
    registry
        .submit_course_type(&draft)
        .map_err(|e| e.to_string())?;
    println!("✓ Course type '{}' created (id {})", draft.name.trim(), draft.id);
    info!("Course type {} created", draft.id);
    Ok(())
}

fn edit(registry: &mut Registry, id: &str, name: String) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    let record = registry
        .find_course_type(id)
        .ok_or_else(|| ValidationError::UnknownCourseType(id).to_string())?;
    let mut draft = CourseTypeDraft::from_record(record);
    draft.name = name;
    registry
        .submit_course_type(&draft)
        .map_err(|e| e.to_string())?;
    println!("✓ Course type {id} updated");
    info!("Course type {id} updated");
    Ok(())
}

fn delete(registry: &mut Registry, id: &str, assume_yes: bool) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    if registry.find_course_type(id).is_none() {
        return Err(ValidationError::UnknownCourseType(id).to_string());
    }
    if !confirm("Are you sure you want to delete this course type?", assume_yes) {
        println!("✗ Deletion cancelled");
        return Ok(());
    }
    registry.delete_course_type(id).map_err(|e| e.to_string())?;
    println!("✓ Course type {id} deleted");
    info!("Course type {id} deleted");
    Ok(())
}
