//! Syntax-tree interface for HCL-style configuration documents.
//!
//! Parsing text into this tree happens elsewhere; this crate describes the
//! tree, matches bodies against fixed schemas, decodes literal attribute
//! values, and carries the diagnostics produced along the way.

pub mod body;
pub mod decode;
pub mod diagnostic;
pub mod expression;
pub mod identifier;
pub mod range;
pub mod schema;
pub mod suggest;

pub use body::{Attribute, Block, BlockLabel, Body};
pub use decode::{Spanned, decode_bool, decode_string, decode_string_list};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use expression::{ExprKind, Expression};
pub use identifier::valid_identifier;
pub use range::SourceRange;
pub use schema::{AttributeSchema, BlockHeaderSchema, BodyContent, BodySchema};

pub use codespan_reporting::diagnostic::Severity;
