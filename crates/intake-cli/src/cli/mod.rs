//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use intake_core::domain::{CategoryFilter, CourseCategory};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "intake",
    bin_name = "intake",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c5} Consultation booking for the studio",
    long_about = "Intake validates and submits consultation bookings, and \
                  browses the studio's services, courses, and available slots.",
    after_help = "EXAMPLES:\n\
        \x20 intake book --name 'Jane Doe' --email jane@example.com \\\n\
        \x20            --service nutrition --date 2026-09-15 --time 10:00\n\
        \x20 intake slots\n\
        \x20 intake courses --category fitness\n\
        \x20 intake completions bash > /usr/share/bash-completion/completions/intake",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Book a consultation.
    #[command(
        visible_alias = "b",
        about = "Book a consultation",
        after_help = "EXAMPLES:\n\
            \x20 intake book --name 'Jane Doe' --email jane@example.com \\\n\
            \x20            --service fitness --date 2026-09-15 --time 10:00\n\
            \x20 intake book   # prompt for each field (interactive builds)"
    )]
    Book(BookArgs),

    /// Show the bookable dates and time slots.
    #[command(
        about = "Show bookable dates and times",
        after_help = "EXAMPLES:\n\
            \x20 intake slots\n\
            \x20 intake slots --format json"
    )]
    Slots(SlotsArgs),

    /// List the consultation services.
    #[command(
        about = "List consultation services",
        after_help = "EXAMPLES:\n\
            \x20 intake services\n\
            \x20 intake services --format csv"
    )]
    Services(ServicesArgs),

    /// Browse the course catalog.
    #[command(
        visible_alias = "ls",
        about = "Browse the course catalog",
        after_help = "EXAMPLES:\n\
            \x20 intake courses\n\
            \x20 intake courses --category nutrition\n\
            \x20 intake courses --show 'Everyday Mobility'"
    )]
    Courses(CoursesArgs),

    /// Initialise an Intake configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 intake init           # default location\n\
            \x20 intake init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 intake completions bash > ~/.local/share/bash-completion/completions/intake\n\
            \x20 intake completions zsh  > ~/.zfunc/_intake\n\
            \x20 intake completions fish > ~/.config/fish/completions/intake.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Intake configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 intake config get defaults.service\n\
            \x20 intake config set schedule.horizon_days 60\n\
            \x20 intake config list"
    )]
    Config(ConfigCommands),
}

// ── book ──────────────────────────────────────────────────────────────────────

/// Arguments for `intake book`.
///
/// Every form field has a flag. Omitted required fields are prompted for in
/// interactive builds; in non-interactive builds they simply fail validation.
#[derive(Debug, Args)]
pub struct BookArgs {
    /// Full name.
    #[arg(long = "name", value_name = "NAME", help = "Full name")]
    pub name: Option<String>,

    /// Email address.
    #[arg(long = "email", value_name = "EMAIL", help = "Email address")]
    pub email: Option<String>,

    /// Phone number (optional field).
    #[arg(long = "phone", value_name = "PHONE", help = "Phone number")]
    pub phone: Option<String>,

    /// Service code (e.g. nutrition, fitness).
    #[arg(
        short = 's',
        long = "service",
        value_name = "SERVICE",
        help = "Service code (see 'intake services')"
    )]
    pub service: Option<String>,

    /// Preferred date, ISO format (YYYY-MM-DD).
    #[arg(short = 'd', long = "date", value_name = "DATE", help = "Preferred date (YYYY-MM-DD)")]
    pub date: Option<String>,

    /// Preferred time (HH:MM).
    #[arg(short = 't', long = "time", value_name = "TIME", help = "Preferred time (HH:MM)")]
    pub time: Option<String>,

    /// Health goals (optional free text).
    #[arg(long = "goals", value_name = "TEXT", help = "Health goals")]
    pub goals: Option<String>,

    /// Never prompt, even in interactive builds.
    #[arg(long = "no-input", help = "Fail instead of prompting for missing fields")]
    pub no_input: bool,
}

// ── slots ─────────────────────────────────────────────────────────────────────

/// Arguments for `intake slots`.
#[derive(Debug, Args)]
pub struct SlotsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── services ──────────────────────────────────────────────────────────────────

/// Arguments for `intake services`.
#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── courses ───────────────────────────────────────────────────────────────────

/// Arguments for `intake courses`.
#[derive(Debug, Args)]
pub struct CoursesArgs {
    /// Filter by category.
    #[arg(
        short = 'k',
        long = "category",
        value_enum,
        default_value = "all",
        help = "Filter by category"
    )]
    pub category: Category,

    /// Show full details for one course instead of the list.
    #[arg(long = "show", value_name = "TITLE", help = "Show one course in detail")]
    pub show: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One entry per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `intake init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.intake.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `intake completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `intake config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.service`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Course category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Category {
    All,
    Nutrition,
    Fitness,
    Wellness,
    Mindset,
}

impl Category {
    /// Convert to the core filter type.
    pub fn to_filter(self) -> CategoryFilter {
        match self {
            Self::All => CategoryFilter::All,
            Self::Nutrition => CategoryFilter::Only(CourseCategory::Nutrition),
            Self::Fitness => CategoryFilter::Only(CourseCategory::Fitness),
            Self::Wellness => CategoryFilter::Only(CourseCategory::Wellness),
            Self::Mindset => CategoryFilter::Only(CourseCategory::Mindset),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Nutrition => write!(f, "nutrition"),
            Self::Fitness => write!(f, "fitness"),
            Self::Wellness => write!(f, "wellness"),
            Self::Mindset => write!(f, "mindset"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn category_display() {
        assert_eq!(Category::All.to_string(), "all");
        assert_eq!(Category::Nutrition.to_string(), "nutrition");
        assert_eq!(Category::Mindset.to_string(), "mindset");
    }

    #[test]
    fn category_converts_to_core_filter() {
        assert_eq!(Category::All.to_filter(), CategoryFilter::All);
        assert_eq!(
            Category::Fitness.to_filter(),
            CategoryFilter::Only(CourseCategory::Fitness)
        );
    }

    #[test]
    fn parse_book_command() {
        let cli = Cli::parse_from([
            "intake",
            "book",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--service",
            "nutrition",
            "--date",
            "2026-09-15",
            "--time",
            "10:00",
        ]);
        match cli.command {
            Commands::Book(args) => {
                assert_eq!(args.name.as_deref(), Some("Jane Doe"));
                assert_eq!(args.service.as_deref(), Some("nutrition"));
                assert!(args.phone.is_none());
            }
            other => panic!("expected Book, got {other:?}"),
        }
    }

    #[test]
    fn courses_defaults_to_all_categories() {
        let cli = Cli::parse_from(["intake", "courses"]);
        if let Commands::Courses(args) = cli.command {
            assert_eq!(args.category, Category::All);
            assert!(args.show.is_none());
        } else {
            panic!("expected Courses command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["intake", "--quiet", "--verbose", "slots"]);
        assert!(result.is_err());
    }
}
