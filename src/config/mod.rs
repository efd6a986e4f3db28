//! Client configuration loaded from TOML.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use types::{Config, ServerConfig};
