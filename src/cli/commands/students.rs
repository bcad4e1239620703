//! Student command handler
//!
//! Registration, details editing, and course mapping. Mapping is its own
//! subcommand so editing details can never change an enrollment.

use logger::info;

use course_manager::core::models::{parse_record_id, student, RecordId, Student, StudentDraft};
use course_manager::core::Registry;

use super::{confirm, prompt_line};
use crate::args::StudentSubcommand;

/// Dispatch student subcommands
pub fn run(subcommand: StudentSubcommand, registry: &mut Registry) {
    if let Err(message) = dispatch(subcommand, registry) {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

fn dispatch(subcommand: StudentSubcommand, registry: &mut Registry) -> Result<(), String> {
    match subcommand {
        StudentSubcommand::List => {
            list(registry);
            Ok(())
        }
        StudentSubcommand::Add { name, email } => add(registry, name, email),
        StudentSubcommand::Edit { id, name, email } => edit(registry, &id, name, email),
        StudentSubcommand::View { id } => view(registry, &id),
        StudentSubcommand::Map {
            id,
            offering,
            clear,
        } => map(registry, &id, offering, clear),
        StudentSubcommand::Delete { id, yes } => delete(registry, &id, yes),
    }
}

fn require_student(registry: &Registry, id: RecordId) -> Result<&Student, String> {
    registry
        .find_student(id)
        .ok_or_else(|| format!("No student with id {id} exists."))
}

fn list(registry: &Registry) {
    println!("\n=== Students ===\n");
    let records = registry.students();
    if records.is_empty() {
        println!("No Students found.");
        return;
    }
    println!("{:<15} {:<20} {:<28} MAPPED COURSE", "ID", "NAME", "EMAIL");
    for record in records {
        println!(
            "{:<15} {:<20} {:<28} {}",
            record.id,
            record.name,
            record.email,
            student::offering_display(
                record.offering_id,
                registry.offerings(),
                registry.course_types(),
                registry.courses()
            )
        );
    }
}

fn add(registry: &mut Registry, name: String, email: String) -> Result<(), String> {
    let mut draft = StudentDraft::blank(registry.students());
    draft.name = name;
    draft.email = email;
    registry.submit_student(&draft).map_err(|e| e.to_string())?;
    println!("✓ Student '{}' registered (id {})", draft.name.trim(), draft.id);
    info!("Student {} registered", draft.id);
    Ok(())
}

fn edit(
    registry: &mut Registry,
    id: &str,
    name: Option<String>,
    email: Option<String>,
) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    let record = require_student(registry, id)?;
    let mut draft = StudentDraft::from_record(record);
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(email) = email {
        draft.email = email;
    }
    registry.submit_student(&draft).map_err(|e| e.to_string())?;
    println!("✓ Student {id} updated");
    info!("Student {id} updated");
    Ok(())
}

fn view(registry: &Registry, id: &str) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    let record = require_student(registry, id)?;

    println!("\n=== Viewing Student: {} ===\n", record.name);
    println!("Name:          {}", record.name);
    println!("Email:         {}", record.email);
    let joined = if record.offering_id.is_some() {
        student::offering_display(
            record.offering_id,
            registry.offerings(),
            registry.course_types(),
            registry.courses(),
        )
    } else {
        "Not Admitted yet".to_string()
    };
    println!("Course Joined: {joined}");
    Ok(())
}

fn map(
    registry: &mut Registry,
    id: &str,
    offering: Option<String>,
    clear: bool,
) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    let name = require_student(registry, id)?.name.clone();

    let selection = if clear {
        String::new()
    } else if let Some(offering) = offering {
        offering
    } else {
        prompt_for_offering(registry, &name)
    };

    registry
        .map_student(id, &selection)
        .map_err(|e| e.to_string())?;

    if selection.trim().is_empty() {
        println!("✓ Mapping removed for {name}");
    } else {
        println!("✓ Mapping updated for {name}");
    }
    info!("Student {id} mapping updated");
    Ok(())
}

/// Present the available offerings and read a selection from stdin.
fn prompt_for_offering(registry: &Registry, student_name: &str) -> String {
    println!("\n=== Map Course for {student_name} ===\n");
    println!("Select a course offering below to enroll the student, or select 'Unmap' to remove enrollment.");

    let offerings = registry.offerings();
    if offerings.is_empty() {
        println!("No Offerings available");
        println!("Create Course Offerings first.");
    } else {
        println!("{:<15} OPTION", "ID");
        println!("{:<15} Unmap / Select Offering", "(none)");
        for record in offerings {
            println!(
                "{:<15} {}",
                record.id,
                student::verbose_option_label(
                    record,
                    registry.course_types(),
                    registry.courses()
                )
            );
        }
    }
    prompt_line("Map to Course Offering (id, empty to unmap): ")
}

fn delete(registry: &mut Registry, id: &str, assume_yes: bool) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    require_student(registry, id)?;
    if !confirm("Are you sure you want to delete this student?", assume_yes) {
        println!("✗ Deletion cancelled");
        return Ok(());
    }
    registry.delete_student(id).map_err(|e| e.to_string())?;
    println!("✓ Student {id} deleted");
    info!("Student {id} deleted");
    Ok(())
}
