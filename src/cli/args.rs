//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog lint rules
//! - `stats`: Show translation progress per catalog
//! - `lookup`: Translate one message the way the application would
//! - `clean`: Remove obsolete and vanished messages
//! - `init`: Initialize tscat configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::issues::Rule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that scan a project.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root to scan for catalogs (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Only process catalogs for this language (repeatable)
    #[arg(long = "language", short = 'l')]
    pub language: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<Rule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub format: StatsFormat,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file (.ts)
    pub catalog: PathBuf,

    /// Context name, e.g. CmdDrawingAnnotation
    pub context: String,

    /// Source text
    pub source: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Serve translations still marked unfinished (overrides config file)
    #[arg(long)]
    pub include_unfinished: bool,

    /// Plural count for numerus messages; replaces %n
    #[arg(long, short = 'n')]
    pub count: Option<i64>,

    /// Value for %1, %2, ... in order (repeatable)
    #[arg(long = "arg")]
    pub args: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for problems (unfinished, conflicting, placeholder mismatches, ...)
    Check(CheckCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Look up a message the way the application would, falling back to the source
    Lookup(LookupCommand),
    /// Remove obsolete and vanished messages from catalogs
    Clean(CleanCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
