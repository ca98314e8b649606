use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Which kind of directory entry to keep.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq, Default)]
#[value(rename_all = "lowercase")]
pub enum EntryKind {
    /// Files and directories.
    #[default]
    All,
    /// Anything that is not a directory.
    Files,
    /// Directories only.
    Dirs,
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntryKind::All => "all",
            EntryKind::Files => "files",
            EntryKind::Dirs => "dirs",
        };
        write!(f, "{s}")
    }
}

/// CLI arguments for dirpath.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the entries of a directory.
    List(ListArgs),
    /// Print the distinct extensions found in a directory.
    Exts(ExtsArgs),
    /// Prefix file names with zero-padded sequence numbers.
    Number(NumberArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Directory to list.
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Kind of entries to keep.
    #[arg(long, value_enum, default_value_t = EntryKind::All)]
    pub kind: EntryKind,

    /// Keep only these extensions, dot included (comma-separated or repeated).
    #[arg(short, long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Keep only base names matching this glob.
    #[arg(short, long)]
    pub glob: Option<String>,

    /// Sort the output by path.
    #[arg(short, long)]
    pub sort: bool,

    /// Print absolute paths.
    #[arg(short, long, conflicts_with = "names")]
    pub absolute: bool,

    /// Print base names only.
    #[arg(short, long)]
    pub names: bool,

    /// Print a JSON array instead of one entry per line.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExtsArgs {
    /// Directory to inspect.
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Ignore directories.
    #[arg(short, long = "files-only")]
    pub files_only: bool,

    /// Print a JSON array instead of one extension per line.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NumberArgs {
    /// Directory whose files are renamed.
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// Rename only files with these extensions (comma-separated or repeated).
    #[arg(short, long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Print the plan without renaming anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
