//! Course offering command handler

use logger::info;

use course_manager::core::error::ValidationError;
use course_manager::core::models::{offering, parse_record_id, OfferingDraft};
use course_manager::core::Registry;

use super::confirm;
use crate::args::OfferingSubcommand;

/// Dispatch course offering subcommands
pub fn run(subcommand: OfferingSubcommand, registry: &mut Registry) {
    if let Err(message) = dispatch(subcommand, registry) {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

fn dispatch(subcommand: OfferingSubcommand, registry: &mut Registry) -> Result<(), String> {
    match subcommand {
        OfferingSubcommand::List {
            course_type,
            course,
        } => list(registry, course_type.as_deref(), course.as_deref()),
        OfferingSubcommand::Add {
            course_type,
            course,
        } => add(registry, course_type, course),
        OfferingSubcommand::Edit {
            id,
            course_type,
            course,
        } => edit(registry, &id, course_type, course),
        OfferingSubcommand::Delete { id, yes } => delete(registry, &id, yes),
    }
}

fn list(
    registry: &Registry,
    type_criterion: Option<&str>,
    course_criterion: Option<&str>,
) -> Result<(), String> {
    let matches = registry
        .filter_offerings(
            type_criterion.unwrap_or_default(),
            course_criterion.unwrap_or_default(),
        )
        .map_err(|e| e.to_string())?;

    println!("\n=== Course Offerings ===\n");
    if matches.is_empty() {
        println!("No Course Offerings found matching the filter.");
        return Ok(());
    }
    println!("{:<15} OFFERING", "ID");
    for record in matches {
        println!(
            "{:<15} {}",
            record.id,
            offering::display_name(record, registry.course_types(), registry.courses())
        );
    }
    Ok(())
}

fn add(
    registry: &mut Registry,
    course_type: Option<String>,
    course: Option<String>,
) -> Result<(), String> {
    let mut draft = OfferingDraft::blank(
        registry.course_types(),
        registry.courses(),
        registry.offerings(),
    )
    .ok_or("Please create Course Types and Courses first.")?;
    if let Some(course_type) = course_type {
        draft.course_type_id = course_type;
    }
    if let Some(course) = course {
        draft.course_id = course;
    }
    registry.submit_offering(&draft).map_err(|e| e.to_string())?;

    let label = registry
        .find_offering(draft.id)
        .map(|record| offering::display_name(record, registry.course_types(), registry.courses()))
        .unwrap_or_default();
    println!("✓ Course offering '{label}' created (id {})", draft.id);
    info!("Offering {} created", draft.id);
    Ok(())
}

fn edit(
    registry: &mut Registry,
    id: &str,
    course_type: Option<String>,
    course: Option<String>,
) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    let record = registry
        .find_offering(id)
        .ok_or_else(|| ValidationError::UnknownOffering(id).to_string())?;
    let mut draft = OfferingDraft::from_record(record);
    if let Some(course_type) = course_type {
        draft.course_type_id = course_type;
    }
    if let Some(course) = course {
        draft.course_id = course;
    }
    registry.submit_offering(&draft).map_err(|e| e.to_string())?;
    println!("✓ Course offering {id} updated");
    info!("Offering {id} updated");
    Ok(())
}

fn delete(registry: &mut Registry, id: &str, assume_yes: bool) -> Result<(), String> {
    let id = parse_record_id(id).map_err(|e| e.to_string())?;
    if registry.find_offering(id).is_none() {
        return Err(ValidationError::UnknownOffering(id).to_string());
    }
    if !confirm(
        "Are you sure you want to delete this course offering? This will unmap students!",
        assume_yes,
    ) {
        println!("✗ Deletion cancelled");
        return Ok(());
    }
    registry.delete_offering(id).map_err(|e| e.to_string())?;
    println!("✓ Course offering {id} deleted");
    info!("Offering {id} deleted");
    Ok(())
}
