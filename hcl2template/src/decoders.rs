use hclsyntax::{Block, Diagnostic, Diagnostics, decode_string};

use crate::provisioner::{self, PostProcessorBlock, ProvisionerBlock};
use crate::schema::SOURCE_USE_SCHEMA;
use crate::source_ref::{ReferenceError, ReferenceSyntax, SourceRef, parse_source_ref};

/// Decoders for the blocks nested in a build, one per block type.
///
/// Implementations must not panic on malformed input. A failure is a `None`
/// or a result whose diagnostics contain an error; either way the build
/// decoder skips the item and keeps the diagnostics.
pub trait BuildDecoders {
    fn decode_source(&self, block: &Block) -> (Option<SourceRef>, Diagnostics);

    fn decode_provisioner(&self, block: &Block) -> (Option<ProvisionerBlock>, Diagnostics);

    fn decode_post_processor(&self, block: &Block) -> (Option<PostProcessorBlock>, Diagnostics);
}

/// The decoders used unless a caller supplies its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDecoders {
    reference_syntax: ReferenceSyntax,
}

impl StandardDecoders {
    pub fn new(reference_syntax: ReferenceSyntax) -> Self {
        StandardDecoders { reference_syntax }
    }
}

impl BuildDecoders for StandardDecoders {
    /// `source "source.type.name" { name = "local" }`
    fn decode_source(&self, block: &Block) -> (Option<SourceRef>, Diagnostics) {
        let (content, mut diags) = block.body.content(&SOURCE_USE_SCHEMA);

        let Some(label) = block.labels.first() else {
            diags.push(
                Diagnostic::error(
                    "Missing reference for source",
                    "All source blocks in a build must have 1 label(s): reference.",
                )
                .with_subject(block.def_range.clone()),
            );
            return (None, diags);
        };

        let source = match parse_source_ref(&label.value, self.reference_syntax) {
            Ok(source) => source,
            Err(err) => {
                diags.push(
                    invalid_source_reference(&err, self.reference_syntax)
                        .with_subject(label.range.clone())
                        .with_context(block.def_range.clone()),
                );
                return (None, diags);
            }
        };

        let mut local_name = None;
        if let Some(attr) = content.attribute("name") {
            let (value, more) = decode_string(attr);
            diags.append(more);
            local_name = value;
        }

        if diags.has_errors() {
            return (None, diags);
        }
        let source = match local_name {
            Some(local_name) => source.with_local_name(local_name),
            None => source,
        };
        (Some(source), diags)
    }

    fn decode_provisioner(&self, block: &Block) -> (Option<ProvisionerBlock>, Diagnostics) {
        provisioner::decode_provisioner(block)
    }

    fn decode_post_processor(&self, block: &Block) -> (Option<PostProcessorBlock>, Diagnostics) {
        provisioner::decode_post_processor(block)
    }
}

/// The diagnostic for a reference string that does not name a source.
/// Callers attach the subject.
pub fn invalid_source_reference(err: &ReferenceError, syntax: ReferenceSyntax) -> Diagnostic {
    let example = match syntax {
        ReferenceSyntax::Prefixed => "`source.type.name`",
        ReferenceSyntax::Lenient => "`source.type.name` or `type.name`",
    };
    Diagnostic::error(
        "Invalid source reference",
        format!(
            "{}. A source reference is made of parts split by a dot `.`; each part must start \
             with a letter and may contain only letters, digits, underscores, and dashes. \
             A valid source reference looks like: {}",
            err, example
        ),
    )
}
