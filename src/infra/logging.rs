//! Stderr logging for the `rjump` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `RJUMP_LOG=debug`
pub const LOG_ENV: &str = "RJUMP_LOG";

/// Default directive for the given flags; `RJUMP_LOG` overrides it.
pub fn default_directive(
    quiet: bool,
    verbose: u8,
) -> &'static str
{
    match (quiet, verbose)
    {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber. Safe to call once per process; later calls
/// are ignored.
pub fn init(
    quiet: bool,
    verbose: u8,
    no_color: bool,
)
{
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn quiet_beats_verbose()
    {
        assert_eq!(default_directive(true, 2), "error");
        assert_eq!(default_directive(false, 0), "warn");
        assert_eq!(default_directive(false, 1), "debug");
        assert_eq!(default_directive(false, 5), "trace");
    }
}
