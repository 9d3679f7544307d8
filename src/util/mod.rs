//! Utility modules

pub mod array;
pub mod paths;

pub use array::{parse_array, ArrayParseError};
pub use paths::{config_path, data_dir, init_data_dir, log_file_path, logs_dir};
