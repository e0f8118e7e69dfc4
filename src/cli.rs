use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "rjump")]
#[command(about = "Jump between Rails controller actions and their view templates")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Print the editor command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find associated Rails views for the current controller method
    Lookup(LookupArgs),

    /// Find the controller and action for a given Rails view file
    Controller(ControllerArgs),

    /// Initialize an rjump.toml config file
    Init(InitArgs),
}

#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// Path to the current file
    #[arg(short, long)]
    pub path: PathBuf,

    /// Rails application root directory
    #[arg(short, long)]
    pub root: PathBuf,

    /// Current line number (for cursor position, 1-based)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub line: Option<u64>,

    /// Print the lookup record as a single JSON line
    #[arg(long)]
    pub json: bool,
}

impl LookupArgs {
    /// Cursor line as an index-friendly number
    pub fn cursor_line(&self) -> Option<usize> {
        self.line
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
    }
}

#[derive(Debug, Parser)]
pub struct ControllerArgs {
    /// Path to the current view file
    #[arg(short, long)]
    pub path: PathBuf,

    /// Rails application root directory
    #[arg(short, long)]
    pub root: PathBuf,

    /// Print the lookup result as a single JSON line
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}
