//! Decoding of `build` blocks into typed build pipelines.
//!
//! A build block names the sources to build from and the provisioners and
//! post-processors to run against them. Decoding is partial: a bad entry is
//! reported and skipped, and only structural problems with the build block
//! itself discard the whole block.

pub mod build;
pub mod decoders;
pub mod hcl2_ref;
pub mod options;
pub mod parser;
pub mod provisioner;
pub mod schema;
pub mod source_ref;

pub use build::{BuildBlock, Builds, decode_build_block};
pub use decoders::{BuildDecoders, StandardDecoders};
pub use hcl2_ref::Hcl2Ref;
pub use options::{DecodeOptions, OptionsError};
pub use parser::Parser;
pub use provisioner::{OnlyExcept, PostProcessorBlock, ProvisionerBlock};
pub use source_ref::{ReferenceError, ReferenceSyntax, SourceRef, parse_source_ref};
