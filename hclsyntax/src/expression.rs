use crate::range::SourceRange;

/// An attribute value as it appears in the syntax tree.
///
/// Expressions are never evaluated here. A reference such as `var.region`
/// is kept as an unresolved [`ExprKind::Traversal`].
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExprKind,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // Literals
    String(String),
    Number(f64),
    Bool(bool),
    Null,

    // Collections
    Tuple(Vec<Expression>),
    Object(Vec<(String, Expression)>),

    /// A dotted variable reference, e.g. `var.region` or `local.name`.
    Traversal(String),
}

impl Expression {
    pub fn new(kind: ExprKind, range: SourceRange) -> Self {
        Expression { kind, range }
    }

    /// The type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ExprKind::String(_) => "string",
            ExprKind::Number(_) => "number",
            ExprKind::Bool(_) => "bool",
            ExprKind::Null => "null",
            ExprKind::Tuple(_) => "tuple",
            ExprKind::Object(_) => "object",
            ExprKind::Traversal(_) => "variable reference",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, ExprKind::Null)
    }
}
