use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate AI assistant rules from a frontend project's package.json
#[derive(Parser, Debug)]
#[command(
    name = "stackrules",
    about = "Generate AI assistant rules from a frontend project's package.json",
    version,
    long_about = "stackrules reads package.json, detects the framework, UI library, bundler, \
                  CSS solution, state management and HTTP client, and writes a .cursorrules \
                  document describing that stack.\n\n\
                  Examples:\n  \
                  stackrules\n  \
                  stackrules ./web --dry-run\n  \
                  stackrules --format json"
)]
pub struct CliArgs {
    #[arg(
        value_name = "PROJECT_DIR",
        help = "Project directory containing package.json (defaults to current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Output file name inside the project directory"
    )]
    pub output: Option<String>,

    #[arg(long, help = "Print the rules document to stdout instead of writing it")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only errors are logged"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
        }
    }
}
