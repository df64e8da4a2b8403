//! User defaults, read from a YAML file.
//!
//! ```yaml
//! length: 16
//! include_numbers: true
//! include_special_chars: false
//! clipboard_command: [wl-copy]
//! ```
//!
//! Every field is optional; missing ones fall back to [`GenerationOptions::default`].

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{ConfigError, ConfigErrorRepr, GenerationOptions, MAX_LENGTH, MIN_LENGTH};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub options: GenerationOptions,
    /// Program (and its arguments) that receives the password on stdin when copying.
    pub clipboard_command: Option<Vec<String>>,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    length: Option<usize>,
    include_numbers: Option<bool>,
    include_special_chars: Option<bool>,
    clipboard_command: Option<Vec<String>>,
}

impl Config {
    /// Load the config at `path`, which must exist.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigErrorRepr::Io {
            path: path.to_owned(),
            source,
        })?;
        Config::parse(path, &contents)
    }

    /// Load the config from its default location. A missing file yields the defaults.
    pub fn load_default() -> Result<Config, ConfigError> {
        load_or_default(default_path())
    }

    /// Parse config file contents. `path` is only used for error messages.
    pub fn parse(path: &Path, contents: &str) -> Result<Config, ConfigError> {
        log::debug!("reading config from {}", path.display());
        // An empty (or comment-only) YAML document is null, which won't deserialize to a map.
        let is_blank = contents
            .lines()
            .map(str::trim)
            .all(|l| l.is_empty() || l.starts_with('#'));
        let file: ConfigFile = if is_blank {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(contents).map_err(|source| ConfigErrorRepr::Parse {
                path: path.to_owned(),
                source,
            })?
        };

        let invalid = |field, reason: String| ConfigErrorRepr::Invalid {
            path: path.to_owned(),
            field,
            reason,
        };

        let defaults = GenerationOptions::default();
        let length = file.length.unwrap_or(defaults.length);
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(invalid(
                "length",
                format!("{length} is not between {MIN_LENGTH} and {MAX_LENGTH}"),
            )
            .into());
        }
        if let Some(cmd) = file.clipboard_command.as_ref() {
            if cmd.first().map_or(true, |program| program.is_empty()) {
                return Err(invalid("clipboard_command", "no program given".to_owned()).into());
            }
        }

        Ok(Config {
            options: GenerationOptions {
                length,
                include_numbers: file.include_numbers.unwrap_or(defaults.include_numbers),
                include_special_chars: file
                    .include_special_chars
                    .unwrap_or(defaults.include_special_chars),
            },
            clipboard_command: file.clipboard_command,
        })
    }
}

fn load_or_default(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p,
        None => {
            log::debug!("neither XDG_CONFIG_HOME nor HOME is set; using built-in defaults");
            return Ok(Config::default());
        }
    };
    match fs::read_to_string(&path) {
        Ok(contents) => Config::parse(&path, &contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no config file at {}; using built-in defaults", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(ConfigErrorRepr::Io { path, source }.into()),
    }
}

/// `$XDG_CONFIG_HOME/pwgen/config.yaml`, falling back to `$HOME/.config/pwgen/config.yaml`.
pub fn default_path() -> Option<PathBuf> {
    default_path_from(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
}

fn default_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let mut p = match xdg_config_home.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => {
            let mut p = PathBuf::from(home.filter(|v| !v.is_empty())?);
            p.push(".config");
            p
        }
    };
    p.push("pwgen");
    p.push("config.yaml");
    Some(p)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(contents: &str) -> Result<Config, ConfigError> {
        Config::parse(Path::new("config.yaml"), contents)
    }

    #[test]
    fn full_file() {
        let config = parse(
            "length: 16\n\
             include_numbers: true\n\
             include_special_chars: true\n\
             clipboard_command: [wl-copy, --trim-newline]\n",
        )
        .unwrap();
        assert_eq!(
            config.options,
            GenerationOptions {
                length: 16,
                include_numbers: true,
                include_special_chars: true,
            }
        );
        assert_eq!(
            config.clipboard_command,
            Some(vec!["wl-copy".to_owned(), "--trim-newline".to_owned()])
        );
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config = parse("include_numbers: true\n").unwrap();
        assert_eq!(config.options.length, 8);
        assert!(config.options.include_numbers);
        assert!(!config.options.include_special_chars);
        assert_eq!(config.clipboard_command, None);
    }

    #[test]
    fn blank_file_is_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
        assert_eq!(parse("# nothing here\n\n").unwrap(), Config::default());
    }

    #[test]
    fn length_out_of_range() {
        let err = parse("length: 31\n").unwrap_err().to_string();
        assert!(err.contains("`length`"), "{err}");
        assert!(parse("length: 5\n").is_err());
        assert!(parse("length: 6\n").is_ok());
        assert!(parse("length: 30\n").is_ok());
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(parse("lenght: 12\n").is_err());
    }

    #[test]
    fn empty_clipboard_command_rejected() {
        assert!(parse("clipboard_command: []\n").is_err());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"length: 20\ninclude_special_chars: true\n")
            .unwrap();
        file.flush().unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.options.length, 20);
        assert!(config.options.include_special_chars);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn missing_default_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pwgen").join("config.yaml");
        assert_eq!(load_or_default(Some(path)).unwrap(), Config::default());
    }

    #[test]
    fn no_default_location_is_defaults() {
        assert_eq!(load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn existing_default_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "length: 12\ninclude_numbers: true\n").unwrap();
        let config = load_or_default(Some(path)).unwrap();
        assert_eq!(config.options.length, 12);
        assert!(config.options.include_numbers);
        assert!(!config.options.include_special_chars);
    }

    #[test]
    fn default_path_prefers_xdg() {
        assert_eq!(
            default_path_from(Some("/xdg".into()), Some("/home/u".into())),
            Some(PathBuf::from("/xdg/pwgen/config.yaml"))
        );
        assert_eq!(
            default_path_from(None, Some("/home/u".into())),
            Some(PathBuf::from("/home/u/.config/pwgen/config.yaml"))
        );
        assert_eq!(
            default_path_from(Some("".into()), Some("/home/u".into())),
            Some(PathBuf::from("/home/u/.config/pwgen/config.yaml"))
        );
        assert_eq!(default_path_from(None, None), None);
    }
}
