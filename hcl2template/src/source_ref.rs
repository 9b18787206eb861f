use std::fmt;

use hclsyntax::valid_identifier;
use serde::Deserialize;
use thiserror::Error;

/// The literal first segment of a prefixed source reference.
pub const SOURCE_PREFIX: &str = "source";

/// Which shorthand forms a source reference string may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceSyntax {
    /// Only `source.<type>.<name>`.
    #[default]
    Prefixed,
    /// `source.<type>.<name>` or the bare `<type>.<name>`.
    Lenient,
}

/// Why a reference string does not name a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("\"{input}\" has {found} dot-separated part(s), expected {expected}")]
    SegmentCount {
        input: String,
        found: usize,
        expected: &'static str,
    },
    #[error("\"{input}\" must start with \"source.\"")]
    MissingPrefix { input: String },
    #[error("\"{part}\" in \"{input}\" is not a valid identifier")]
    InvalidIdentifier { input: String, part: String },
}

/// A reference to a source block declared elsewhere in the document.
///
/// Both parts are always valid identifiers: the only ways to build one are
/// [`SourceRef::new`] and [`parse_source_ref`], which check them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceRef {
    source_type: String,
    name: String,
    /// Overrides `name` in logs and artifact names when set.
    local_name: Option<String>,
}

impl SourceRef {
    pub fn new(source_type: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let source_type = source_type.into();
        let name = name.into();
        if !valid_identifier(&source_type) || !valid_identifier(&name) {
            return None;
        }
        Some(SourceRef {
            source_type,
            name,
            local_name: None,
        })
    }

    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }

    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    /// The name the build uses for this source: the local name if one was given.
    pub fn display_name(&self) -> &str {
        self.local_name.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", SOURCE_PREFIX, self.source_type, self.name)
    }
}

/// Parse a shorthand reference such as `source.amazon-ebs.web`.
///
/// Every segment is checked as an identifier before the segment grammar, so
/// `"bad type.name"` is rejected for its space whatever the syntax.
pub fn parse_source_ref(input: &str, syntax: ReferenceSyntax) -> Result<SourceRef, ReferenceError> {
    let parts: Vec<&str> = input.split('.').collect();

    if let Some(bad) = parts.iter().find(|p| !valid_identifier(p)) {
        return Err(ReferenceError::InvalidIdentifier {
            input: input.to_string(),
            part: bad.to_string(),
        });
    }

    let (source_type, name) = match (parts.as_slice(), syntax) {
        ([prefix, source_type, name], _) if *prefix == SOURCE_PREFIX => (*source_type, *name),
        ([_, _, _], _) => {
            return Err(ReferenceError::MissingPrefix {
                input: input.to_string(),
            });
        }
        ([source_type, name], ReferenceSyntax::Lenient) => (*source_type, *name),
        _ => {
            return Err(ReferenceError::SegmentCount {
                input: input.to_string(),
                found: parts.len(),
                expected: match syntax {
                    ReferenceSyntax::Prefixed => "3",
                    ReferenceSyntax::Lenient => "2 or 3",
                },
            });
        }
    };

    Ok(SourceRef {
        source_type: source_type.to_string(),
        name: name.to_string(),
        local_name: None,
    })
}
