use std::io;
use std::path::PathBuf;

use serde::Serialize;

pub mod alphabet;
pub mod config;
pub mod password_generation;
pub mod session;

pub use alphabet::Alphabet;
pub use config::Config;
pub use password_generation::{generate, GenerationOptions, MAX_LENGTH, MIN_LENGTH};

/// A generated password.
///
/// `Debug` is opaque, so a password that ends up in a log record or a panic message doesn't
/// reveal itself.
#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ConfigError(ConfigErrorRepr);

impl From<ConfigErrorRepr> for ConfigError {
    fn from(err: ConfigErrorRepr) -> ConfigError {
        ConfigError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum ConfigErrorRepr {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid value for `{field}` in config file {}: {reason}", .path.display())]
    Invalid {
        path: PathBuf,
        field: &'static str,
        reason: String,
    },
}
