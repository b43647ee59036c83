use std::ffi::OsString;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use signalforge::{App, Application};

use crate::config::Configuration;
use crate::error::CliError;
use crate::util::{normalize_single_dash, parse_bool};

const NAME: &str = "signalforge";
const LONG_FLAGS: &[&str] = &["verbose", "help"];

pub fn run() -> ExitCode {
    match run_cli(std::env::args_os(), App::new) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.print();
            err.exit_code()
        }
    }
}

/// Parses arguments, constructs the application with `new_app` and runs it once.
/// Nothing is constructed when parsing fails; a failed run is returned as a fatal
/// [`CliError`] for the caller to report.
pub fn run_cli<I, S, F, A>(args: I, new_app: F) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    F: FnOnce(bool) -> A,
    A: Application,
{
    let config = parse_config(args)?;
    let app = new_app(config.verbose);
    app.run().map_err(CliError::fatal)
}

pub fn parse_config<I, S>(args: I) -> Result<Configuration, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(normalize_single_dash(args, LONG_FLAGS))?;
    let verbose = matches.get_one::<bool>("verbose").copied().unwrap_or(false);
    Ok(Configuration { verbose })
}

/// `--verbose` alone means true; an explicit value must be attached with `=`. A repeated
/// flag takes its last value. Flag parsing stops at the first non-flag word, and it and
/// everything after it are accepted and ignored.
fn build_cli() -> Command {
    Command::new(NAME)
        .about("Runs the signalforge application")
        .args_override_self(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .value_name("BOOL")
                .action(ArgAction::Set)
                .num_args(0..=1)
                .require_equals(true)
                .default_value("false")
                .default_missing_value("true")
                .value_parser(parse_bool)
                .help("Enable verbose logging"),
        )
        .arg(
            Arg::new("args")
                .num_args(0..)
                .trailing_var_arg(true)
                .value_parser(clap::value_parser!(OsString))
                .hide(true),
        )
}
