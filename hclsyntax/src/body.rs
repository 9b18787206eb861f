use crate::expression::Expression;
use crate::range::SourceRange;

/// A `name = value` pair inside a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub expr: Expression,
    pub name_range: SourceRange,
    /// The whole attribute, name through value.
    pub range: SourceRange,
}

/// A quoted or bare label following a block's type name.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLabel {
    pub value: String,
    pub range: SourceRange,
}

/// A nested block: `type "label" ... { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub block_type: String,
    pub labels: Vec<BlockLabel>,
    pub body: Body,
    pub type_range: SourceRange,
    /// Type name through the last label, excluding the body.
    pub def_range: SourceRange,
    pub range: SourceRange,
}

impl Block {
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|l| l.value.as_str())
    }

    pub fn label_ranges(&self) -> Vec<SourceRange> {
        self.labels.iter().map(|l| l.range.clone()).collect()
    }
}

/// The content between a block's braces, or a whole file.
///
/// Attributes and blocks each keep their authored order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub attributes: Vec<Attribute>,
    pub blocks: Vec<Block>,
    pub range: SourceRange,
    /// Where a diagnostic about something absent from the body should point,
    /// usually the opening brace.
    pub missing_item_range: SourceRange,
}

impl Body {
    pub fn empty(range: SourceRange) -> Self {
        Body {
            attributes: Vec::new(),
            blocks: Vec::new(),
            missing_item_range: range.clone(),
            range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.blocks.is_empty()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn blocks_of_type<'a>(&'a self, block_type: &'a str) -> impl Iterator<Item = &'a Block> {
        self.blocks.iter().filter(move |b| b.block_type == block_type)
    }

    /// A body with no content that keeps this body's location.
    pub(crate) fn empty_like(&self) -> Body {
        Body {
            attributes: Vec::new(),
            blocks: Vec::new(),
            range: self.range.clone(),
            missing_item_range: self.missing_item_range.clone(),
        }
    }
}
