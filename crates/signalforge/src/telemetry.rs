use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::AppConfig;
use crate::error::{Result, SignalforgeError};

/// Builds the event filter for a run. Override directives are parsed strictly so a
/// typo surfaces as an error instead of silently falling back to the default.
pub fn build_filter(config: &AppConfig) -> Result<EnvFilter> {
    let default = LevelFilter::from_level(config.default_level());
    match config.log_filter.as_deref() {
        Some(directives) => EnvFilter::builder()
            .with_default_directive(default.into())
            .parse(directives)
            .map_err(|err| SignalforgeError::LogFilter {
                directive: directives.to_string(),
                reason: err.to_string(),
            }),
        None => Ok(EnvFilter::default().add_directive(default.into())),
    }
}

pub fn subscriber<W>(
    config: &AppConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = build_filter(config)?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .finish())
}
