//! YAML configuration file support.
//!
//! Lets a deployment describe how search queries are cleaned and turned into
//! highlight patterns in one file, loaded at startup.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "council transcripts"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!   lowercase: true
//!   strip_punctuation: true
//!
//! matcher:
//!   version: 1
//!   language: english
//!   boundary: whole_word
//!   literal: escaped
//!   extra_stopwords: ["um", "uh"]
//! ```

use std::fs;
use std::path::Path;

use canonical::CanonicalizeConfig;
use matcher::{Language, LiteralMode, MatchConfig, WordBoundary};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct HighlightConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Query cleaning configuration
    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    /// Pattern building configuration
    #[serde(default)]
    pub matcher: MatcherYamlConfig,
}

impl HighlightConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: HighlightConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.canonical.validate()?;
        self.matcher.validate()?;

        // Catch anything the stage checks above do not cover.
        self.to_match_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }

    /// Convert to the configuration consumed by
    /// [`MatchPatternBuilder::from_config`](matcher::MatchPatternBuilder::from_config).
    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig {
            version: self.matcher.version,
            canonical: self.canonical.to_canonical_config(),
            language: self.matcher.language,
            boundary: self.matcher.boundary,
            literal: self.matcher.literal,
            extra_stopwords: self.matcher.extra_stopwords.clone(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            matcher: MatcherYamlConfig::default(),
        }
    }
}

/// Query cleaning YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub normalize_unicode: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "true_value")]
    pub strip_punctuation: bool,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_canonical_config(&self) -> CanonicalizeConfig {
        CanonicalizeConfig {
            version: self.version,
            normalize_unicode: self.normalize_unicode,
            strip_punctuation: self.strip_punctuation,
            lowercase: self.lowercase,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            strip_punctuation: true,
        }
    }
}

/// Pattern building YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub boundary: WordBoundary,

    #[serde(default)]
    pub literal: LiteralMode,

    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl MatcherYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            language: Language::default(),
            boundary: WordBoundary::default(),
            literal: LiteralMode::default(),
            extra_stopwords: Vec::new(),
        }
    }
}

fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
