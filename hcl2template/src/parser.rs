use hclsyntax::{Block, Body, Diagnostic, Diagnostics};
use tracing::debug;

use crate::build::{BuildBlock, Builds, decode_build_block};
use crate::decoders::{BuildDecoders, StandardDecoders};
use crate::options::DecodeOptions;
use crate::schema::BUILD_LABEL;

/// Decodes the build blocks of a document.
///
/// A parser holds no per-document state, so one instance can decode any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Parser<D = StandardDecoders> {
    decoders: D,
    options: DecodeOptions,
}

impl Parser<StandardDecoders> {
    pub fn new(options: DecodeOptions) -> Self {
        Parser {
            decoders: StandardDecoders::new(options.reference_syntax),
            options,
        }
    }
}

impl Default for Parser<StandardDecoders> {
    fn default() -> Self {
        Parser::new(DecodeOptions::default())
    }
}

impl<D: BuildDecoders> Parser<D> {
    /// A parser that hands nested blocks to `decoders`.
    pub fn with_decoders(decoders: D, options: DecodeOptions) -> Self {
        Parser { decoders, options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a single `build` block. See [`decode_build_block`].
    pub fn decode_build_config(&self, block: &Block) -> (Option<BuildBlock>, Diagnostics) {
        decode_build_block(block, &self.decoders, self.options.reference_syntax)
    }

    /// Decode every top-level `build` block of `body`, in order.
    ///
    /// Each build block is decoded independently: one that fails to decode is
    /// left out without affecting the others. Other top-level blocks are ignored.
    pub fn decode_builds(&self, body: &Body) -> (Builds, Diagnostics) {
        let mut builds = Builds::new();
        let mut diags = Diagnostics::new();

        for block in body.blocks_of_type(BUILD_LABEL) {
            if let Some(extra) = block.labels.first() {
                diags.push(
                    Diagnostic::error(
                        "Extra label on build block",
                        "No labels are expected for build blocks; use the \"name\" argument to name a build.",
                    )
                    .with_subject(extra.range.clone())
                    .with_context(block.def_range.clone()),
                );
                continue;
            }

            let (build, more) = self.decode_build_config(block);
            diags.append(more);
            builds.extend(build);
        }

        debug!(builds = builds.len(), errors = diags.errors().count(), "decoded builds");
        (builds, diags)
    }
}
