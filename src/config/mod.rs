/// Report settings loading from config.toml
pub mod settings;

/// Environment variable overrides
pub mod overrides;

pub use settings::{AppConfig, load_config};
