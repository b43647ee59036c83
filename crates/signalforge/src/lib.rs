pub mod app;
pub mod config;
pub mod error;
pub mod telemetry;

pub use app::{App, Application};
pub use config::{AppConfig, LOG_ENV};
pub use error::{Result, SignalforgeError};
