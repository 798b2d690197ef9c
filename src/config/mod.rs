// Configuration module.
// Config file loading and well-known filesystem locations.

pub mod paths;
pub mod settings;

pub use paths::{config_path, default_browse_dir, log_path};
pub use settings::{Config, PickerConfig};
