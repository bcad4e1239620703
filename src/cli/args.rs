//! CLI argument definitions for the course manager

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_manager::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum TypeSubcommand {
    /// List all course types.
    List,
    /// Add a new course type.
    Add {
        /// Name for the new course type (e.g., "Individual" or "Group")
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Rename an existing course type.
    Edit {
        /// Id of the course type to edit
        #[arg(value_name = "ID")]
        id: String,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Delete a course type (requires confirmation).
    Delete {
        /// Id of the course type to delete
        #[arg(value_name = "ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// List all courses.
    List,
    /// Add a new course.
    Add {
        /// Name for the new course (e.g., "English")
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Rename an existing course.
    Edit {
        /// Id of the course to edit
        #[arg(value_name = "ID")]
        id: String,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Delete a course (requires confirmation).
    Delete {
        /// Id of the course to delete
        #[arg(value_name = "ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum OfferingSubcommand {
    /// List course offerings, optionally filtered.
    List {
        /// Only show offerings with this course type id
        #[arg(long = "type", value_name = "TYPE_ID")]
        course_type: Option<String>,
        /// Only show offerings with this course id
        #[arg(long = "course", value_name = "COURSE_ID")]
        course: Option<String>,
    },
    /// Add a new course offering.
    ///
    /// Requires at least one course type and one course to exist. Omitted
    /// selections default to the first stored course type / course.
    Add {
        /// Course type id for the offering
        #[arg(long = "type", value_name = "TYPE_ID")]
        course_type: Option<String>,
        /// Course id for the offering
        #[arg(long = "course", value_name = "COURSE_ID")]
        course: Option<String>,
    },
    /// Edit an existing course offering.
    ///
    /// Omitted selections keep their current value.
    Edit {
        /// Id of the offering to edit
        #[arg(value_name = "ID")]
        id: String,
        /// New course type id
        #[arg(long = "type", value_name = "TYPE_ID")]
        course_type: Option<String>,
        /// New course id
        #[arg(long = "course", value_name = "COURSE_ID")]
        course: Option<String>,
    },
    /// Delete a course offering (requires confirmation; unmaps students).
    Delete {
        /// Id of the offering to delete
        #[arg(value_name = "ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// List all students with their mapped courses.
    List,
    /// Register a new student.
    Add {
        /// Student name
        #[arg(value_name = "NAME")]
        name: String,
        /// Student email
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Edit a student's details. The mapping is untouched; use `map`.
    ///
    /// Omitted fields keep their current value.
    Edit {
        /// Id of the student to edit
        #[arg(value_name = "ID")]
        id: String,
        /// New name
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
        /// New email
        #[arg(long, value_name = "EMAIL")]
        email: Option<String>,
    },
    /// Show one student's details and mapped course.
    View {
        /// Id of the student to view
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Map a student to a course offering (or unmap them).
    ///
    /// With no OFFERING_ID, presents the available offerings and prompts;
    /// an empty reply unmaps.
    Map {
        /// Id of the student to map
        #[arg(value_name = "ID")]
        id: String,
        /// Offering id to map the student to
        #[arg(value_name = "OFFERING_ID")]
        offering: Option<String>,
        /// Remove the mapping without prompting
        #[arg(long)]
        clear: bool,
    },
    /// Delete a student (requires confirmation).
    Delete {
        /// Id of the student to delete
        #[arg(value_name = "ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage course types (e.g., Individual, Group, Special).
    Type {
        #[command(subcommand)]
        subcommand: TypeSubcommand,
    },
    /// Manage courses (e.g., English, Hindi).
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Manage course offerings (type-course combinations).
    Offering {
        #[command(subcommand)]
        subcommand: OfferingSubcommand,
    },
    /// Manage students and their course mappings.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseman",
    about = "Course management command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--data-dir`) take precedence
    /// over long-form flags (e.g., `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
