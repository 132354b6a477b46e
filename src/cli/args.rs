//! CLI argument definitions for `Markify`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use markify::config::ConfigOverrides;
use markify::core::internal::AssignmentDefault;
use markify::core::snapshot::SnapshotFormat;
use markify::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// `markify::logger::Level` for runtime use.
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
        f.write_str(Level::from(*self).as_str())
    }
}

/// Blank-assignment policy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum AssignmentDefaultArg {
    /// Blank assignments count as 0
    Zero,
    /// Blank assignments count as full marks
    Full,
}

impl From<AssignmentDefaultArg> for AssignmentDefault {
    fn from(arg: AssignmentDefaultArg) -> Self {
        match arg {
            AssignmentDefaultArg::Zero => Self::Zero,
            AssignmentDefaultArg::Full => Self::Full,
        }
    }
}

/// Snapshot format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ExportFormatArg {
    /// One-row CSV
    Csv,
    /// JSON object
    Json,
}

impl From<ExportFormatArg> for SnapshotFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => Self::Csv,
            ExportFormatArg::Json => Self::Json,
        }
    }
}

/// Theory paper fields. Values are raw text; anything non-numeric is blank.
#[derive(Debug, Clone, Default, Args)]
pub struct TheoryFields {
    /// CIE 1 mark (out of 50)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub cie1: Option<String>,
    /// CIE 2 mark (out of 50)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub cie2: Option<String>,
    /// Assignment 1 mark (out of 10)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub assignment1: Option<String>,
    /// Assignment 2 mark (out of 10)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub assignment2: Option<String>,
    /// Assignment 3 mark (out of 10)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub assignment3: Option<String>,
    /// Model exam mark (out of 100)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub model: Option<String>,
}

/// Integrated paper fields. Values are raw text; anything non-numeric is blank.
#[derive(Debug, Clone, Default, Args)]
pub struct IntegratedFields {
    /// CIE 1 mark (out of 50)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub cie1: Option<String>,
    /// CIE 2 mark (out of 50)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub cie2: Option<String>,
    /// CIE 3 / model mark (out of 100)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub cie3: Option<String>,
    /// Practical 1 mark (out of 50)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub practical1: Option<String>,
    /// Practical 2 mark (out of 50)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub practical2: Option<String>,
    /// Practical 3 mark (out of 100)
    #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
    pub practical3: Option<String>,
}

/// Snapshot export options
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Write a snapshot of the marks and result in this format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub export: Option<ExportFormatArg>,

    /// Snapshot path (optional; defaults to a timestamped file in config `exports_dir`)
    #[arg(short, long, value_name = "FILE", requires = "export")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum InternalPaper {
    /// Theory paper (out of 40)
    #[command(visible_alias = "t")]
    Theory {
        #[command(flatten)]
        fields: TheoryFields,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// Integrated paper (out of 50)
    #[command(visible_alias = "i")]
    Integrated {
        #[command(flatten)]
        fields: IntegratedFields,
        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum TargetPaper {
    /// Theory paper; solves for the model exam (`--model` is ignored)
    #[command(visible_alias = "t")]
    Theory {
        /// Target internal mark (out of 40)
        #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
        target: String,
        #[command(flatten)]
        fields: TheoryFields,
    },
    /// Integrated paper; solves for CIE 3 (`--cie3` is ignored)
    #[command(visible_alias = "i")]
    Integrated {
        /// Target internal mark (out of 50)
        #[arg(long, value_name = "MARK", allow_hyphen_values = true)]
        target: String,
        #[command(flatten)]
        fields: IntegratedFields,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `assignment_default`, `exports_dir`)
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
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate internal marks for a paper.
    ///
    /// Blank fields count as 0, except Theory assignments, which follow the
    /// configured `assignment_default`.
    Internal {
        #[command(subcommand)]
        paper: InternalPaper,
    },
    /// Find the mark needed in the last exam to reach a target internal mark.
    Target {
        #[command(subcommand)]
        paper: TargetPaper,
    },
    /// Predict a semester GPA from internal and expected external marks.
    Gpa {
        /// A paper as TYPE:CREDITS:INTERNAL:EXTERNAL, e.g. `theory:4:35:80`
        #[arg(long = "paper", value_name = "PAPER", required = true)]
        papers: Vec<String>,
    },
    /// Calculate a CGPA from semester GPAs.
    Cgpa {
        /// A semester as GPA[:CREDITS], e.g. `8.5:22`
        #[arg(long = "semester", value_name = "SEMESTER", required = true)]
        semesters: Vec<String>,
    },
    /// Find the average GPA needed in the remaining semesters to reach a target CGPA.
    Boost {
        /// Target CGPA (out of 10)
        #[arg(long, value_name = "CGPA", allow_hyphen_values = true)]
        target: String,

        /// GPA of a completed semester (repeat for each semester)
        #[arg(long = "completed", value_name = "GPA")]
        completed: Vec<String>,

        /// Number of semesters in the programme (defaults to config `program_length`)
        #[arg(
            long,
            value_name = "N",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        program_length: Option<usize>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "markify",
    about = "Markify academic marks calculator",
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
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config blank-assignment policy
    #[arg(long = "config-assignment-default", value_enum)]
    pub config_assignment_default: Option<AssignmentDefaultArg>,

    /// Override config snapshot export directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config snapshot export directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--exports-dir`) take precedence over long-form
    /// flags (e.g., `--config-exports-dir`) when both are provided. The
    /// `boost --program-length` option is also carried as an override.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let program_length = match &self.command {
            Command::Boost { program_length, .. } => *program_length,
            _ => None,
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            assignment_default: self
                .config_assignment_default
                .map(|policy| AssignmentDefault::from(policy).to_string()),
            program_length,
            exports_dir: self
                .exports_dir
                .as_ref()
                .or(self.config_exports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
