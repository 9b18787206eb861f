use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::source_ref::ReferenceSyntax;

/// Knobs for decoding build blocks, loadable from a TOML file:
///
/// ```toml
/// reference-syntax = "lenient"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DecodeOptions {
    /// Accepted forms for shorthand and `source` block references.
    pub reference_syntax: ReferenceSyntax,
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid decode options: {0}")]
    Parse(#[from] toml::de::Error),
}

impl DecodeOptions {
    pub fn from_toml_str(input: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }
}
