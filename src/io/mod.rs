pub mod config_io;

pub use config_io::{ConfigError, discover_config, load_config};
