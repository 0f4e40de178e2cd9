use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{adapters::Key, errors::Errors, NumberFormat},
    utils::get_file_contents,
};

/// Presentation and parsing settings for a [`crate::Console`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Column count used to centre banners and warnings.
    pub width: usize,
    pub pad_char: char,
    pub warning_symbol: String,
    /// Pause after a message before the screen moves on.
    pub delay_ms: u64,
    /// Clear the screen after every message.
    pub auto_clear: bool,
    pub confirm_key: Key,
    pub reject_key: Key,
    pub decimal_separator: char,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            width: 119,
            pad_char: '-',
            warning_symbol: "[!]".into(),
            delay_ms: 1500,
            auto_clear: true,
            confirm_key: Key::new('Y'),
            reject_key: Key::new('N'),
            decimal_separator: '.',
        }
    }
}

/// Where the active configuration was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Once(PathBuf),
    User(PathBuf),
    Default,
}

impl ConsoleConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.decimal_separator)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, Errors> {
        let config = serde_yaml::from_str::<ConsoleConfig>(contents).map_err(|e| {
            Errors::Configuration {
                message: "Failed to parse configuration, please ensure yaml is valid".into(),
                source: e.into(),
            }
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, Errors> {
        let contents = get_file_contents(path).map_err(|e| Errors::Configuration {
            message: format!("Failed to read configuration file '{}'", path.display()),
            source: e,
        })?;

        Self::from_yaml(&contents)
    }

    /// Once off file first, then the user config file when present, else defaults.
    pub fn resolve(once_off_config_path: Option<&Path>) -> Result<(Self, ConfigSource), Errors> {
        let source = match once_off_config_path {
            Some(path) => ConfigSource::Once(path.to_owned()),
            None => match Self::user_config_path() {
                Some(path) if path.exists() => ConfigSource::User(path),
                _ => ConfigSource::Default,
            },
        };

        let config = match &source {
            ConfigSource::Once(path) => {
                log::info!("⏳ Loading once off config...");
                Self::load(path)?
            }
            ConfigSource::User(path) => {
                log::info!("⏳ Loading user config from '{}'...", path.display());
                Self::load(path)?
            }
            ConfigSource::Default => {
                log::info!("⏳ Using default config...");
                ConsoleConfig::default()
            }
        };

        Ok((config, source))
    }

    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "console-kit", "console-kit")
            .map(|dirs| dirs.config_dir().join("config.yml"))
    }

    pub fn validate(&self) -> Result<(), Errors> {
        let invalid = |message: &str| Errors::Configuration {
            message: message.into(),
            source: anyhow::anyhow!("{:?}", self),
        };

        if self.confirm_key == self.reject_key {
            return Err(invalid("Confirm and reject keys must differ"));
        }

        let separator = self.decimal_separator;
        if separator.is_ascii_digit() || matches!(separator, '-' | '+') {
            return Err(invalid("Decimal separator cannot be a digit or sign"));
        }

        // Would turn '1e5' into 1.5.
        if matches!(separator, 'e' | 'E') || separator.is_whitespace() {
            return Err(invalid(
                "Decimal separator cannot be an exponent marker or whitespace",
            ));
        }

        if self.width == 0 {
            return Err(invalid("Width must be greater than zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ConsoleConfig::default();

        assert_eq!(config.width, 119);
        assert_eq!(config.warning_symbol, "[!]");
        assert_eq!(config.delay(), Duration::from_millis(1500));
        assert!(config.auto_clear);
        assert_eq!(config.number_format(), NumberFormat::new('.'));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() -> anyhow::Result<()> {
        let config = ConsoleConfig::from_yaml("decimal_separator: ','\nconfirm_key: s\n")?;

        assert_eq!(config.decimal_separator, ',');
        assert_eq!(config.confirm_key, Key::new('S'));
        assert_eq!(config.reject_key, Key::new('N'));
        assert_eq!(config.width, 119);

        Ok(())
    }

    #[test]
    fn identical_confirm_and_reject_keys_are_rejected() {
        let error = ConsoleConfig::from_yaml("confirm_key: n\n").unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid configuration confirm and reject keys must differ"
        );
    }

    #[test]
    fn digit_decimal_separator_is_rejected() {
        let config = ConsoleConfig {
            decimal_separator: '5',
            ..ConsoleConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn exponent_and_whitespace_separators_are_rejected() {
        for separator in ['e', 'E', ' ', '\t'] {
            let config = ConsoleConfig {
                decimal_separator: separator,
                ..ConsoleConfig::default()
            };

            assert!(config.validate().is_err(), "accepted {separator:?}");
        }
    }

    #[test]
    fn invalid_yaml_is_a_configuration_error() {
        let error = ConsoleConfig::from_yaml("width: [").unwrap_err();

        assert!(matches!(error, Errors::Configuration { .. }));
    }

    #[test]
    fn once_off_path_takes_priority() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "delay_ms: 0\nauto_clear: false")?;

        let (config, source) = ConsoleConfig::resolve(Some(file.path()))?;

        assert_eq!(source, ConfigSource::Once(file.path().to_owned()));
        assert_eq!(config.delay_ms, 0);
        assert!(!config.auto_clear);

        Ok(())
    }

    #[test]
    fn missing_once_off_file_is_a_configuration_error() {
        let result = ConsoleConfig::resolve(Some(Path::new("/definitely/not/here.yml")));

        assert!(matches!(result, Err(Errors::Configuration { .. })));
    }
}
