#![allow(dead_code)]

use std::cell::Cell;

use hclsyntax::{Attribute, Block, BlockLabel, Body, ExprKind, Expression, SourceRange};

/// Builds syntax trees by hand. Every node gets its own byte range so
/// diagnostics can be matched back to the node they point at.
pub struct Doc {
    next: Cell<usize>,
}

impl Doc {
    pub fn new() -> Self {
        Doc { next: Cell::new(0) }
    }

    pub fn range(&self, len: usize) -> SourceRange {
        let start = self.next.get();
        self.next.set(start + len + 1);
        SourceRange::new(0, start..start + len)
    }

    pub fn expr(&self, kind: ExprKind) -> Expression {
        Expression::new(kind, self.range(4))
    }

    pub fn string(&self, value: &str) -> Expression {
        Expression::new(ExprKind::String(value.to_string()), self.range(value.len() + 2))
    }

    pub fn strings(&self, values: &[&str]) -> Expression {
        let elements = values.iter().map(|v| self.string(v)).collect();
        self.expr(ExprKind::Tuple(elements))
    }

    pub fn attr(&self, name: &str, expr: Expression) -> Attribute {
        let name_range = self.range(name.len());
        let range = name_range.to(&expr.range);
        Attribute {
            name: name.to_string(),
            expr,
            name_range,
            range,
        }
    }

    pub fn body(&self, attributes: Vec<Attribute>, blocks: Vec<Block>) -> Body {
        let open_brace = self.range(1);
        let range = attributes
            .iter()
            .map(|a| &a.range)
            .chain(blocks.iter().map(|b| &b.range))
            .fold(open_brace.clone(), |acc, r| acc.to(r));
        Body {
            attributes,
            blocks,
            range,
            missing_item_range: open_brace,
        }
    }

    pub fn block(&self, block_type: &str, labels: &[&str], body: Body) -> Block {
        let type_range = self.range(block_type.len());
        let labels: Vec<BlockLabel> = labels
            .iter()
            .map(|l| BlockLabel {
                value: l.to_string(),
                range: self.range(l.len() + 2),
            })
            .collect();
        let def_range = labels
            .last()
            .map(|l| type_range.to(&l.range))
            .unwrap_or_else(|| type_range.clone());
        let range = def_range.to(&body.range);
        Block {
            block_type: block_type.to_string(),
            labels,
            body,
            type_range,
            def_range,
            range,
        }
    }

    pub fn empty_block(&self, block_type: &str, labels: &[&str]) -> Block {
        let body = self.body(Vec::new(), Vec::new());
        self.block(block_type, labels, body)
    }
}
