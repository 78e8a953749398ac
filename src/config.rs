//! Configuration file support for the command-line tool.
//!
//! Every section is optional. Missing values fall back to the invariant
//! culture, an alphanumeric character set, and SHA-256 over UTF-8.

use crate::conversion::Culture;
use crate::generation::{charset::ALPHANUMERIC, CharacterSet, MAX_LENGTH};
use crate::transformation::{HashAlgorithm, TextEncoding};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    #[error("unknown culture '{0}'")]
    UnknownCulture(String),
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),
    #[error("invalid generation settings: {0}")]
    InvalidGeneration(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub hashing: HashingConfig,
}

/// Text conversion settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConversionConfig {
    /// Culture used when the command line names none.
    pub culture: Option<String>,
    /// Additional cultures, looked up before the built-in ones.
    pub cultures: Vec<Culture>,
}

/// Random text settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Characters to draw from.
    pub character_set: String,
    /// Number of characters to generate.
    pub length: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            character_set: ALPHANUMERIC.to_owned(),
            length: 16,
        }
    }
}

/// Hashing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Digest algorithm.
    pub algorithm: HashAlgorithm,
    /// Encoding label applied to text before hashing.
    pub encoding: String,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            encoding: "utf-8".to_owned(),
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every named culture and encoding resolves and that the
    /// generation settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.conversion.culture {
            self.resolve_culture(name)?;
        }
        self.resolve_encoding(&self.hashing.encoding)?;

        let generation = &self.generation;
        if generation.length == 0 || generation.length > MAX_LENGTH {
            return Err(ConfigError::InvalidGeneration(format!(
                "length must be between 1 and {MAX_LENGTH}"
            )));
        }
        CharacterSet::new(&generation.character_set)
            .map_err(|e| ConfigError::InvalidGeneration(e.to_string()))?;

        Ok(())
    }

    /// Finds a culture by name: custom cultures first, then built-ins.
    pub fn resolve_culture(&self, name: &str) -> Result<Culture, ConfigError> {
        self.conversion
            .cultures
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .or_else(|| Culture::from_name(name))
            .ok_or_else(|| ConfigError::UnknownCulture(name.to_owned()))
    }

    /// The culture named by the command line, else the configured default,
    /// else the invariant culture.
    pub fn culture_or_default(&self, name: Option<&str>) -> Result<Culture, ConfigError> {
        match name.or(self.conversion.culture.as_deref()) {
            Some(name) => self.resolve_culture(name),
            None => Ok(Culture::invariant()),
        }
    }

    /// Resolves an encoding label.
    pub fn resolve_encoding(&self, label: &str) -> Result<TextEncoding, ConfigError> {
        TextEncoding::for_label(label).ok_or_else(|| ConfigError::UnknownEncoding(label.to_owned()))
    }
}
