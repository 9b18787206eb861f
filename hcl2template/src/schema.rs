//! Fixed schemas for the blocks this crate decodes.

use hclsyntax::{AttributeSchema, BlockHeaderSchema, BodySchema};

pub const BUILD_LABEL: &str = "build";

pub const BUILD_FROM_LABEL: &str = "from";
pub const BUILD_SOURCE_LABEL: &str = "source";
pub const BUILD_PROVISIONER_LABEL: &str = "provisioner";
pub const BUILD_POST_PROCESSOR_LABEL: &str = "post-processor";

const fn optional(name: &'static str) -> AttributeSchema {
    AttributeSchema { name, required: false }
}

/// Attributes set directly on a build block.
pub static BUILD_ATTRIBUTES_SCHEMA: BodySchema = BodySchema {
    attributes: &[optional("name"), optional("description"), optional("sources")],
    blocks: &[],
};

/// Nested blocks a build block may contain.
pub static BUILD_SCHEMA: BodySchema = BodySchema {
    attributes: &[],
    blocks: &[
        BlockHeaderSchema {
            block_type: BUILD_FROM_LABEL,
            label_names: &["type"],
        },
        BlockHeaderSchema {
            block_type: BUILD_SOURCE_LABEL,
            label_names: &["reference"],
        },
        BlockHeaderSchema {
            block_type: BUILD_PROVISIONER_LABEL,
            label_names: &["type"],
        },
        BlockHeaderSchema {
            block_type: BUILD_POST_PROCESSOR_LABEL,
            label_names: &["type"],
        },
    ],
};

/// A `source` block used inside a build.
pub static SOURCE_USE_SCHEMA: BodySchema = BodySchema {
    attributes: &[optional("name")],
    blocks: &[],
};

/// Meta-arguments of a provisioner; everything else is provisioner config.
pub static PROVISIONER_SCHEMA: BodySchema = BodySchema {
    attributes: &[optional("name"), optional("only"), optional("except")],
    blocks: &[],
};

/// Meta-arguments of a post-processor; everything else is post-processor config.
pub static POST_PROCESSOR_SCHEMA: BodySchema = BodySchema {
    attributes: &[
        optional("name"),
        optional("only"),
        optional("except"),
        optional("keep_input_artifact"),
    ],
    blocks: &[],
};
