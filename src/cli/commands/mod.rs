//! CLI command handlers for the course manager.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod course_types;
pub mod courses;
pub mod offerings;
pub mod students;

use std::io::{self, Write};

/// Ask the user a y/n question on stdin.
///
/// `assume_yes` (the `--yes` flag) skips the prompt entirely. Anything
/// other than "y"/"yes" counts as a no.
fn confirm(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes")
}

/// Read one trimmed line from stdin after printing `prompt`.
fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    response.trim().to_string()
}
