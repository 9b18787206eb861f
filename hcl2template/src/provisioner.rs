use hclsyntax::{
    Block, Body, BodyContent, Diagnostic, Diagnostics, decode_bool, decode_string, decode_string_list,
    valid_identifier,
};

use crate::hcl2_ref::Hcl2Ref;
use crate::schema::{POST_PROCESSOR_SCHEMA, PROVISIONER_SCHEMA};

/// Restricts a step to some of the build's sources, by source name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnlyExcept {
    pub only: Vec<String>,
    pub except: Vec<String>,
}

impl OnlyExcept {
    /// Whether a step filtered this way runs for the named source.
    pub fn applies_to(&self, source_name: &str) -> bool {
        if !self.only.is_empty() {
            return self.only.iter().any(|s| s == source_name);
        }
        !self.except.iter().any(|s| s == source_name)
    }
}

/// A `provisioner "<type>" { ... }` block of a build.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionerBlock {
    pub ptype: String,
    pub name: Option<String>,
    pub only_except: OnlyExcept,
    /// Type-specific configuration, left undecoded.
    pub config: Body,
    pub hcl2_ref: Hcl2Ref,
}

/// A `post-processor "<type>" { ... }` block of a build.
#[derive(Debug, Clone, PartialEq)]
pub struct PostProcessorBlock {
    pub ptype: String,
    pub name: Option<String>,
    pub only_except: OnlyExcept,
    pub keep_input_artifact: Option<bool>,
    /// Type-specific configuration, left undecoded.
    pub config: Body,
    pub hcl2_ref: Hcl2Ref,
}

pub(crate) fn decode_provisioner(block: &Block) -> (Option<ProvisionerBlock>, Diagnostics) {
    let (content, config, mut diags) = block.body.partial_content(&PROVISIONER_SCHEMA);
    let ptype = check_type_label(block, "provisioner", &mut diags);
    let (name, only_except) = decode_meta(block, &content, &mut diags);

    match ptype {
        Some(ptype) if !diags.has_errors() => (
            Some(ProvisionerBlock {
                ptype,
                name,
                only_except,
                config,
                hcl2_ref: Hcl2Ref::from_block(block),
            }),
            diags,
        ),
        _ => (None, diags),
    }
}

pub(crate) fn decode_post_processor(block: &Block) -> (Option<PostProcessorBlock>, Diagnostics) {
    let (content, config, mut diags) = block.body.partial_content(&POST_PROCESSOR_SCHEMA);
    let ptype = check_type_label(block, "post-processor", &mut diags);
    let (name, only_except) = decode_meta(block, &content, &mut diags);

    let mut keep_input_artifact = None;
    if let Some(attr) = content.attribute("keep_input_artifact") {
        let (value, more) = decode_bool(attr);
        diags.append(more);
        keep_input_artifact = value;
    }

    match ptype {
        Some(ptype) if !diags.has_errors() => (
            Some(PostProcessorBlock {
                ptype,
                name,
                only_except,
                keep_input_artifact,
                config,
                hcl2_ref: Hcl2Ref::from_block(block),
            }),
            diags,
        ),
        _ => (None, diags),
    }
}

fn check_type_label(block: &Block, kind: &str, diags: &mut Diagnostics) -> Option<String> {
    let Some(label) = block.labels.first() else {
        diags.push(
            Diagnostic::error(
                format!("Missing type for {}", kind),
                format!("All {} blocks must have 1 label(s): type.", kind),
            )
            .with_subject(block.def_range.clone()),
        );
        return None;
    };
    if !valid_identifier(&label.value) {
        diags.push(
            Diagnostic::error(
                format!("Invalid {} type", kind),
                format!(
                    "\"{}\" is not a valid {} type: it must start with a letter and may contain only letters, digits, underscores, and dashes.",
                    label.value, kind
                ),
            )
            .with_subject(label.range.clone())
            .with_context(block.def_range.clone()),
        );
        return None;
    }
    Some(label.value.clone())
}

fn decode_meta(block: &Block, content: &BodyContent, diags: &mut Diagnostics) -> (Option<String>, OnlyExcept) {
    let mut name = None;
    if let Some(attr) = content.attribute("name") {
        let (value, more) = decode_string(attr);
        diags.append(more);
        name = value;
    }

    let mut only_except = OnlyExcept::default();
    for (key, target) in [("only", &mut only_except.only), ("except", &mut only_except.except)] {
        if let Some(attr) = content.attribute(key) {
            let (values, more) = decode_string_list(attr);
            diags.append(more);
            *target = values.into_iter().flatten().map(|v| v.value).collect();
        }
    }

    if let (Some(_), Some(except)) = (content.attribute("only"), content.attribute("except")) {
        diags.push(
            Diagnostic::error(
                "Conflicting arguments",
                format!(
                    "Only one of \"only\" or \"except\" may be set on a {} block.",
                    block.block_type
                ),
            )
            .with_subject(except.name_range.clone())
            .with_context(block.def_range.clone()),
        );
    }

    (name, only_except)
}
