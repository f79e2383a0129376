mod loader;
mod types;
mod validator;

pub use loader::{from_toml_str, load_from_path};
pub use types::{Config, FingerprintConfig, LoggingConfig, PathNormalization};
pub use validator::validate;
