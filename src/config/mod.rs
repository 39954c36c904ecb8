//! TOML settings for endpoints, HTTP limits and the startup page.

mod errors;
mod io;
mod types;


/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use errors::ConfigError;
pub use io::{config_path, load_or_default, load_settings_from, save, save_to_path};
pub use types::{AppSettings, EndpointSettings, HttpSettings};
