use hclsyntax::{Block, SourceRange};

/// Where a decoded block came from, kept for diagnostics and tooling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hcl2Ref {
    pub def_range: SourceRange,
    pub type_range: SourceRange,
    pub label_ranges: Vec<SourceRange>,
}

impl Hcl2Ref {
    pub fn from_block(block: &Block) -> Self {
        Hcl2Ref {
            def_range: block.def_range.clone(),
            type_range: block.type_range.clone(),
            label_ranges: block.label_ranges(),
        }
    }
}
