pub use self::config::{APP_NAME, APP_VERSION, Config, ScannerConfig};
pub use self::errors::ConfigError;
pub use self::persistable::Persistable;

mod config;
mod errors;
mod persistable;
