//! Core application infrastructure

pub mod cli;
pub mod config;
pub mod constants;

pub use crate::app::App;
pub use cli::{CliConfig, Commands};
pub use config::{ConfigError, ConfigSource, ConnectionConfig, EnvSource, StaticSource};
