//! Loading and saving chain configuration files.

use basicosc_core::{ChainConfig, ConfigError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read a file
    #[error("failed to read file '{path}'")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}'")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Parsed, but holds an unusable value
    #[error("invalid configuration")]
    Invalid(#[from] ConfigError),
}

/// Parse and validate a configuration from TOML text.
pub fn from_toml_str(text: &str) -> Result<ChainConfig, ConfigFileError> {
    let config: ChainConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Serialize a configuration to TOML text.
pub fn to_toml_string(config: &ChainConfig) -> Result<String, ConfigFileError> {
    Ok(toml::to_string_pretty(config)?)
}

/// Load and validate a configuration file.
pub fn load(path: &Path) -> Result<ChainConfig, ConfigFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigFileError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_toml_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Load `path` if given, otherwise the shipped defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ChainConfig, ConfigFileError> {
    path.map_or_else(|| Ok(ChainConfig::default()), load)
}

/// Write a configuration file.
pub fn save(path: &Path, config: &ChainConfig) -> Result<(), ConfigFileError> {
    let text = to_toml_string(config)?;
    std::fs::write(path, text).map_err(|source| ConfigFileError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use basicosc_core::{Composition, OscillatorConfig};

    #[test]
    fn default_roundtrips_through_toml() {
        let text = to_toml_string(&ChainConfig::default()).unwrap();
        assert!(text.contains("frequency_hz = 155.563"), "{text}");
        assert!(text.contains("linear = 0.1"), "{text}");
        assert_eq!(from_toml_str(&text).unwrap(), ChainConfig::default());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(from_toml_str("").unwrap(), ChainConfig::default());
    }

    #[test]
    fn partial_file_overrides_sections() {
        let config = from_toml_str(
            r#"
            composition = "replace"

            [osc_a]
            frequency_hz = 440.0
            "#,
        )
        .unwrap();
        assert_eq!(config.osc_a, OscillatorConfig::sine(440.0));
        assert_eq!(config.osc_b.frequency_hz, 233.082);
        assert_eq!(config.composition, Composition::Replace);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = from_toml_str("[gain]\nlinear = 0.5\ndb = -6.0\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::TomlParse(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = from_toml_str("[osc_b]\nfrequency_hz = -10.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::Invalid(ConfigError::InvalidFrequency(_))
        ));
    }

    #[test]
    fn invalid_error_chains_to_its_cause() {
        use std::error::Error as _;

        let err = from_toml_str("[gain]\nlinear = nan\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration");
        let cause = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(cause.starts_with("invalid gain"), "{cause}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load(Path::new("/nonexistent/basicosc.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/basicosc.toml"));
    }
}
