//! Typed decoding of literal attribute values.
//!
//! Only literal values are accepted: there is no evaluation context, so a
//! variable reference is always an error. A `null` value decodes as absent.

use crate::body::Attribute;
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::expression::{ExprKind, Expression};
use crate::range::SourceRange;

/// A decoded value together with the range it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub range: SourceRange,
}

pub fn decode_string(attr: &Attribute) -> (Option<String>, Diagnostics) {
    match expect_string(attr) {
        Ok(value) => (value, Diagnostics::new()),
        Err(diag) => (None, diag.into()),
    }
}

pub fn decode_bool(attr: &Attribute) -> (Option<bool>, Diagnostics) {
    match &attr.expr.kind {
        ExprKind::Bool(b) => (Some(*b), Diagnostics::new()),
        ExprKind::Null => (None, Diagnostics::new()),
        _ => (None, mismatch(attr, &attr.expr, None, "bool").into()),
    }
}

/// Decode a list of strings, keeping each element's range.
///
/// Every bad element is reported, not just the first.
pub fn decode_string_list(attr: &Attribute) -> (Option<Vec<Spanned<String>>>, Diagnostics) {
    let elements = match &attr.expr.kind {
        ExprKind::Tuple(elements) => elements,
        ExprKind::Null => return (None, Diagnostics::new()),
        _ => return (None, mismatch(attr, &attr.expr, None, "list of string").into()),
    };

    let mut diags = Diagnostics::new();
    let mut values = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match &element.kind {
            ExprKind::String(value) => values.push(Spanned {
                value: value.clone(),
                range: element.range.clone(),
            }),
            _ => diags.push(mismatch(attr, element, Some(index), "string")),
        }
    }

    if diags.has_errors() {
        return (None, diags);
    }
    (Some(values), diags)
}

fn expect_string(attr: &Attribute) -> Result<Option<String>, Diagnostic> {
    match &attr.expr.kind {
        ExprKind::String(s) => Ok(Some(s.clone())),
        ExprKind::Null => Ok(None),
        _ => Err(mismatch(attr, &attr.expr, None, "string")),
    }
}

fn mismatch(attr: &Attribute, expr: &Expression, index: Option<usize>, expected: &str) -> Diagnostic {
    if let ExprKind::Traversal(reference) = &expr.kind {
        return Diagnostic::error(
            "Variables not allowed",
            format!("Variables may not be used here; found reference to \"{}\".", reference),
        )
        .with_subject(expr.range.clone())
        .with_context(attr.range.clone());
    }

    let position = match index {
        Some(i) => format!("element {}: ", i),
        None => String::new(),
    };
    Diagnostic::error(
        "Incorrect attribute value type",
        format!(
            "Inappropriate value for attribute \"{}\": {}{} required, found {}.",
            attr.name,
            position,
            expected,
            expr.type_name()
        ),
    )
    .with_subject(expr.range.clone())
    .with_context(attr.range.clone())
}
