mod settings;

pub use settings::{ArrayConfig, Config, ConfigError, EXAMPLE_CONFIG, MAX_ARRAY_SIZE};
