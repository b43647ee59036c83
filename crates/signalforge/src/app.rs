use std::fmt;
use std::io;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Result;
use crate::telemetry;

/// A unit of work that is constructed once and run once.
pub trait Application {
    type Error: fmt::Display;

    fn run(self) -> std::result::Result<(), Self::Error>;
}

/// The signalforge application.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
}

impl App {
    /// Builds the application, picking up the log filter override from the environment.
    pub fn new(verbose: bool) -> Self {
        Self::with_config(AppConfig::from_env(verbose))
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Runs to completion on the calling thread. Logging is installed for the
    /// duration of the call only.
    ///
    /// The only failure is a malformed `SIGNALFORGE_LOG` override, reported as
    /// [`SignalforgeError::LogFilter`](crate::error::SignalforgeError::LogFilter).
    pub fn run(self) -> Result<()> {
        let subscriber = telemetry::subscriber(&self.config, io::stderr)?;
        tracing::subscriber::with_default(subscriber, || {
            info!(verbose = self.config.verbose, "signalforge starting");
            debug!(
                default_level = %self.config.default_level(),
                filter = self.config.log_filter.as_deref().unwrap_or("-"),
                "telemetry configured"
            );
            info!("signalforge stopped");
        });
        Ok(())
    }
}

impl Application for App {
    type Error = crate::error::SignalforgeError;

    fn run(self) -> Result<()> {
        App::run(self)
    }
}
