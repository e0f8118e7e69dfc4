use std::process::ExitCode;

use clap::Parser;
use rails_jumper::cli::{AppContext, Cli, Commands};
use rails_jumper::infra::logging;

fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure; --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    logging::init(cli.quiet, cli.verbose, cli.no_color);

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    let result = match cli.command {
        Commands::Lookup(args) => rails_jumper::lookup_run(args, &ctx),
        Commands::Controller(args) => rails_jumper::controller_run(args, &ctx),
        Commands::Init(args) => rails_jumper::infra::config::init(args, &ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
