mod cli;
mod config;
mod error;
mod util;

pub use cli::{parse_config, run, run_cli};
pub use config::Configuration;
pub use error::{CliError, ExitStatus};
