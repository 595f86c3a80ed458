//! Configuration for query canonicalization.
//!
//! [`CanonicalizeConfig`] controls how a raw search query is normalized
//! before it is split into tokens.
//!
//! # Versioning
//!
//! Any change to canonicalization behavior (even bug fixes) must come with a
//! version bump, so cached pattern sets built from an older cleaning policy
//! can be told apart from new ones.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! assert!(config.strip_punctuation);
//! assert!(config.lowercase);
//!
//! // Keep punctuation inside tokens, e.g. for code-like queries.
//! let keep = CanonicalizeConfig {
//!     strip_punctuation: false,
//!     ..Default::default()
//! };
//! assert!(!keep.strip_punctuation);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the canonical query pipeline.
///
/// Cheap to clone and serializable:
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": true,
///   "strip_punctuation": true,
///   "lowercase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the canonicalization behavior. Must be >= 1; version 0 is
    /// reserved and rejected with [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before other transforms.
    ///
    /// ```text
    /// "Café" (U+00E9)          → "café"
    /// "Cafe" + U+0301          → "café"
    /// "ﬁle" (U+FB01 ligature)  → "file"
    /// ```
    pub normalize_unicode: bool,

    /// If true, every Unicode punctuation character acts as a delimiter and
    /// is dropped from the canonical text.
    ///
    /// ```text
    /// "Hello, world!"   → "hello world"
    /// "It's 100% fun."  → "it s 100 fun"
    /// ```
    ///
    /// Symbols (`$`, `+`, `^`) are not punctuation and are kept.
    pub strip_punctuation: bool,

    /// If true, apply locale-free Unicode lowercasing.
    pub lowercase: bool,
}

impl CanonicalizeConfig {
    /// Rejects configurations the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    /// Defaults tuned for search queries: NFKC, lowercase, punctuation
    /// stripped.
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            strip_punctuation: true,
            lowercase: true,
        }
    }
}
