pub mod config;
pub mod paths;

pub use config::{Config, ConfigError, DisplayConfig, IdStrategy, IdsConfig, LoggingConfig};
pub use paths::{PathManager, home_override};
