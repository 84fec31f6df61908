mod loader;
mod paths;
mod types;

pub use paths::default_config_path;
pub use types::{Config, ControllerSettings};
