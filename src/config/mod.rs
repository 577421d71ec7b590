// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::load_config;
pub use settings::{Config, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
