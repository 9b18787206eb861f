use crate::body::{Attribute, Block, Body};
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::range::SourceRange;
use crate::suggest::{did_you_mean, name_suggestion};

// ---------------------------------------------------------------------------
// Schema types
// ---------------------------------------------------------------------------

/// An attribute a body may (or must) contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub required: bool,
}

/// A nested block type a body may contain, and the labels it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeaderSchema {
    pub block_type: &'static str,
    pub label_names: &'static [&'static str],
}

/// The expected shape of a body. Schemas are fixed tables, usually `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySchema {
    pub attributes: &'static [AttributeSchema],
    pub blocks: &'static [BlockHeaderSchema],
}

impl BodySchema {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn block(&self, block_type: &str) -> Option<&BlockHeaderSchema> {
        self.blocks.iter().find(|b| b.block_type == block_type)
    }
}

/// The part of a body that matched a schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyContent {
    pub attributes: Vec<Attribute>,
    pub blocks: Vec<Block>,
    pub missing_item_range: SourceRange,
}

impl BodyContent {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

impl Body {
    /// Match the whole body against `schema`. Anything the schema does not
    /// declare is reported as unsupported.
    ///
    /// Blocks rejected for their type or label count are left out of the
    /// returned content; every other block is still returned.
    pub fn content(&self, schema: &BodySchema) -> (BodyContent, Diagnostics) {
        let (content, remain, mut diags) = self.partial_content(schema);
        for attr in &remain.attributes {
            diags.push(unsupported_argument(attr, schema));
        }
        for block in &remain.blocks {
            diags.push(unsupported_block(block, schema));
        }
        (content, diags)
    }

    /// Match the parts of the body that `schema` declares and hand back the
    /// rest, untouched, as a separate body.
    pub fn partial_content(&self, schema: &BodySchema) -> (BodyContent, Body, Diagnostics) {
        let mut diags = Diagnostics::new();
        let mut content = BodyContent {
            missing_item_range: self.missing_item_range.clone(),
            ..BodyContent::default()
        };
        let mut remain = self.empty_like();

        for attr in &self.attributes {
            if schema.attribute(&attr.name).is_none() {
                remain.attributes.push(attr.clone());
                continue;
            }
            if let Some(previous) = content.attribute(&attr.name) {
                diags.push(
                    Diagnostic::error(
                        "Duplicate argument",
                        format!(
                            "The argument \"{}\" was already set at {}. Each argument may be set only once.",
                            attr.name, previous.name_range
                        ),
                    )
                    .with_subject(attr.name_range.clone()),
                );
                continue;
            }
            content.attributes.push(attr.clone());
        }

        for required in schema.attributes.iter().filter(|a| a.required) {
            if content.attribute(required.name).is_none() {
                diags.push(
                    Diagnostic::error(
                        "Missing required argument",
                        format!("The argument \"{}\" is required, but no definition was found.", required.name),
                    )
                    .with_subject(self.missing_item_range.clone()),
                );
            }
        }

        for block in &self.blocks {
            let Some(header) = schema.block(&block.block_type) else {
                remain.blocks.push(block.clone());
                continue;
            };
            match check_labels(block, header) {
                Some(diag) => diags.push(diag),
                None => content.blocks.push(block.clone()),
            }
        }

        (content, remain, diags)
    }
}

fn check_labels(block: &Block, header: &BlockHeaderSchema) -> Option<Diagnostic> {
    let expected = header.label_names.len();
    let found = block.labels.len();

    if found < expected {
        let missing = header.label_names[found];
        return Some(
            Diagnostic::error(
                format!("Missing {} for {}", missing, block.block_type),
                format!(
                    "All {} blocks must have {} label(s): {}.",
                    block.block_type,
                    expected,
                    header.label_names.join(", ")
                ),
            )
            .with_subject(block.def_range.clone())
            .with_context(block.range.clone()),
        );
    }

    if found > expected {
        let extra = &block.labels[expected];
        let detail = if expected == 0 {
            format!("No labels are expected for {} blocks.", block.block_type)
        } else {
            format!(
                "Only {} label(s) are expected for {} blocks: {}.",
                expected,
                block.block_type,
                header.label_names.join(", ")
            )
        };
        return Some(
            Diagnostic::error(format!("Extra label on {} block", block.block_type), detail)
                .with_subject(extra.range.clone())
                .with_context(block.def_range.clone()),
        );
    }

    None
}

/// Diagnostic for an attribute that `schema` does not declare.
pub fn unsupported_argument(attr: &Attribute, schema: &BodySchema) -> Diagnostic {
    let suggestion = name_suggestion(&attr.name, schema.attributes.iter().map(|a| a.name));
    Diagnostic::error(
        "Unsupported argument",
        format!(
            "An argument named \"{}\" is not expected here.{}",
            attr.name,
            did_you_mean(suggestion)
        ),
    )
    .with_subject(attr.name_range.clone())
}

/// Diagnostic for a block whose type `schema` does not declare.
pub fn unsupported_block(block: &Block, schema: &BodySchema) -> Diagnostic {
    let suggestion = name_suggestion(&block.block_type, schema.blocks.iter().map(|b| b.block_type));
    Diagnostic::error(
        "Unsupported block type",
        format!(
            "Blocks of type \"{}\" are not expected here.{}",
            block.block_type,
            did_you_mean(suggestion)
        ),
    )
    .with_subject(block.type_range.clone())
}
