//! "Nothing to jump to" outcomes surfaced by the subcommands.
//!
//! The finders themselves return `Option`/empty results; these variants only
//! exist so the CLI can turn an empty result into a diagnostic and exit 1.

/// Lookup produced nothing the editor could open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JumpError
{
    #[error("No associated views found")]
    NoViews,

    #[error("No corresponding controller/action found")]
    NoController,
}
