use hclsyntax::schema::{unsupported_argument, unsupported_block};
use hclsyntax::{Block, Body, Diagnostics, Spanned, decode_string, decode_string_list};
use tracing::{debug, trace};

use crate::decoders::{BuildDecoders, invalid_source_reference};
use crate::hcl2_ref::Hcl2Ref;
use crate::provisioner::{PostProcessorBlock, ProvisionerBlock};
use crate::schema::{
    BUILD_ATTRIBUTES_SCHEMA, BUILD_POST_PROCESSOR_LABEL, BUILD_PROVISIONER_LABEL, BUILD_SCHEMA,
    BUILD_SOURCE_LABEL,
};
use crate::source_ref::{ReferenceSyntax, SourceRef, parse_source_ref};

/// A decoded `build` block:
///
/// ```hcl
/// build {
///   name    = "web"
///   sources = ["source.amazon-ebs.web"]
///   source "source.docker.web" { }
///   provisioner "shell" { ... }
///   post-processor "manifest" { ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildBlock {
    /// Shown in logs; not required to be unique.
    pub name: String,
    pub description: String,
    /// Shorthand `sources` entries first, then `source` blocks, each in authored order.
    pub sources: Vec<SourceRef>,
    pub provisioner_blocks: Vec<ProvisionerBlock>,
    pub post_processors: Vec<PostProcessorBlock>,
    pub hcl2_ref: Hcl2Ref,
}

pub type Builds = Vec<BuildBlock>;

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

#[derive(Default)]
struct BuildAttributes {
    name: String,
    description: String,
    sources: Vec<Spanned<String>>,
}

/// Decode the attributes set directly on the build block and return the rest
/// of the body for block matching. `None` means the attributes are unusable.
fn decode_build_attributes(body: &Body) -> (Option<BuildAttributes>, Body, Diagnostics) {
    let (content, remain, mut diags) = body.partial_content(&BUILD_ATTRIBUTES_SCHEMA);
    let mut attrs = BuildAttributes::default();

    for (key, target) in [("name", &mut attrs.name), ("description", &mut attrs.description)] {
        if let Some(attr) = content.attribute(key) {
            let (value, more) = decode_string(attr);
            diags.append(more);
            *target = value.unwrap_or_default();
        }
    }
    if let Some(attr) = content.attribute("sources") {
        let (values, more) = decode_string_list(attr);
        diags.append(more);
        attrs.sources = values.unwrap_or_default();
    }

    if diags.has_errors() {
        return (None, remain, diags);
    }
    (Some(attrs), remain, diags)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

type Handler = fn(&dyn BuildDecoders, &Block, &mut BuildBlock) -> Diagnostics;

/// Nested block type to handler. A matched block whose type has no entry
/// (`from`) is accepted and ignored.
static HANDLERS: &[(&str, Handler)] = &[
    (BUILD_SOURCE_LABEL, dispatch_source),
    (BUILD_PROVISIONER_LABEL, dispatch_provisioner),
    (BUILD_POST_PROCESSOR_LABEL, dispatch_post_processor),
];

fn handler_for(block_type: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(ty, _)| *ty == block_type)
        .map(|(_, handler)| *handler)
}

fn dispatch_source(decoders: &dyn BuildDecoders, block: &Block, build: &mut BuildBlock) -> Diagnostics {
    let (source, diags) = decoders.decode_source(block);
    if let Some(source) = accepted(source, &diags, block) {
        build.sources.push(source);
    }
    diags
}

fn dispatch_provisioner(decoders: &dyn BuildDecoders, block: &Block, build: &mut BuildBlock) -> Diagnostics {
    let (provisioner, diags) = decoders.decode_provisioner(block);
    if let Some(provisioner) = accepted(provisioner, &diags, block) {
        build.provisioner_blocks.push(provisioner);
    }
    diags
}

fn dispatch_post_processor(decoders: &dyn BuildDecoders, block: &Block, build: &mut BuildBlock) -> Diagnostics {
    let (post_processor, diags) = decoders.decode_post_processor(block);
    if let Some(post_processor) = accepted(post_processor, &diags, block) {
        build.post_processors.push(post_processor);
    }
    diags
}

/// A delegate's result is kept only if it produced a value and no errors.
fn accepted<T>(item: Option<T>, diags: &Diagnostics, block: &Block) -> Option<T> {
    if diags.has_errors() || item.is_none() {
        trace!(
            block_type = %block.block_type,
            label = block.label(0).unwrap_or_default(),
            errors = diags.errors().count(),
            "skipping nested block"
        );
        return None;
    }
    item
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode one `build` block.
///
/// Returns `None` only for structural problems with the build block itself:
/// a bad `name`/`description`/`sources` value or an unsupported argument.
/// Bad source references, unknown nested blocks, and failing nested decoders
/// are reported and skipped; the rest of the block is still decoded.
pub fn decode_build_block(
    block: &Block,
    decoders: &dyn BuildDecoders,
    reference_syntax: ReferenceSyntax,
) -> (Option<BuildBlock>, Diagnostics) {
    let (attrs, remain, mut diags) = decode_build_attributes(&block.body);
    let Some(attrs) = attrs else {
        debug!(errors = diags.errors().count(), "build block attributes failed to decode");
        return (None, diags);
    };

    let mut build = BuildBlock {
        name: attrs.name,
        description: attrs.description,
        hcl2_ref: Hcl2Ref::from_block(block),
        ..BuildBlock::default()
    };

    for entry in &attrs.sources {
        match parse_source_ref(&entry.value, reference_syntax) {
            Ok(source) => build.sources.push(source),
            Err(err) => {
                trace!(reference = %entry.value, %err, "skipping source reference");
                diags.push(
                    invalid_source_reference(&err, reference_syntax)
                        .with_subject(block.def_range.clone())
                        .with_context(entry.range.clone()),
                );
            }
        }
    }

    let (content, leftover, more) = remain.partial_content(&BUILD_SCHEMA);
    diags.append(more);
    for nested in &leftover.blocks {
        diags.push(unsupported_block(nested, &BUILD_SCHEMA));
    }
    if !leftover.attributes.is_empty() {
        diags.extend(
            leftover
                .attributes
                .iter()
                .map(|attr| unsupported_argument(attr, &BUILD_ATTRIBUTES_SCHEMA)),
        );
        debug!(name = %build.name, "build block has unsupported arguments");
        return (None, diags);
    }

    for nested in &content.blocks {
        if let Some(handler) = handler_for(&nested.block_type) {
            diags.append(handler(decoders, nested, &mut build));
        }
    }

    debug!(
        name = %build.name,
        sources = build.sources.len(),
        provisioners = build.provisioner_blocks.len(),
        post_processors = build.post_processors.len(),
        diagnostics = diags.len(),
        "decoded build block"
    );
    (Some(build), diags)
}
