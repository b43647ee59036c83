use std::fmt;
use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use thiserror::Error;

const EX_OK: u8 = 0;
const EX_FAILURE: u8 = 1;
const EX_USAGE: u8 = 2;

const NAME: &str = "signalforge";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    Failure,
    Usage,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Ok => EX_OK,
            ExitStatus::Failure => EX_FAILURE,
            ExitStatus::Usage => EX_USAGE,
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    message: String,
    status: ExitStatus,
}

impl CliError {
    pub fn new(message: impl Into<String>, status: ExitStatus) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Wraps an error returned by the application's run. The error text is kept verbatim.
    pub fn fatal(err: impl fmt::Display) -> Self {
        CliError::new(format!("{NAME}: {err}"), ExitStatus::Failure)
    }

    pub fn status(&self) -> ExitStatus {
        self.status
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status.code())
    }

    pub fn print(&self) {
        if !self.message.is_empty() {
            eprintln!("{}", self.message);
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let status = match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => ExitStatus::Ok,
            _ => ExitStatus::Usage,
        };
        if status == ExitStatus::Ok {
            match err.print() {
                Ok(()) => CliError::new(String::new(), status),
                Err(io_err) => CliError::new(
                    format!("{NAME}: failed to write help: {io_err}"),
                    ExitStatus::Failure,
                ),
            }
        } else {
            CliError::new(err.to_string(), status)
        }
    }
}
