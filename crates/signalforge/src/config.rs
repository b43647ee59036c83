use std::env;

use tracing::Level;

/// Environment variable holding `EnvFilter` directives that override the
/// verbosity-derived default level.
pub const LOG_ENV: &str = "SIGNALFORGE_LOG";

/// Settings the application is constructed with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub verbose: bool,
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            log_filter: None,
        }
    }

    /// Reads the log filter override from [`LOG_ENV`]. The value is kept as-is;
    /// it is validated when the application runs.
    pub fn from_env(verbose: bool) -> Self {
        let log_filter = env::var(LOG_ENV).ok();
        Self::new(verbose).with_log_filter(log_filter)
    }

    pub fn with_log_filter(mut self, directives: Option<String>) -> Self {
        self.log_filter = directives.filter(|value| !value.trim().is_empty());
        self
    }

    pub fn default_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(AppConfig::new(true).default_level(), Level::DEBUG);
        assert_eq!(AppConfig::new(false).default_level(), Level::WARN);
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = AppConfig::new(false).with_log_filter(Some("   ".into()));
        assert_eq!(config.log_filter, None);

        let config = AppConfig::new(false).with_log_filter(Some("signalforge=trace".into()));
        assert_eq!(config.log_filter.as_deref(), Some("signalforge=trace"));
    }
}
