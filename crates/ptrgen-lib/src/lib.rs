//! ptrgen: generator for Go pointer helper functions.
//!
//! The pipeline is linear:
//! - `catalogue` - the validated, ordered list of scalar types
//! - `template` - a small template language (named templates, includes, blocks)
//! - `document` - the Go template set and per-document rendering
//! - `emit` - file creation and rendering into the output files
//! - `config` - generator settings (package, marker, output paths)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalogue;
pub mod config;
pub mod document;
pub mod emit;
pub mod template;
pub mod utils;

#[cfg(test)]
mod catalogue_tests;

pub use catalogue::{Catalogue, CatalogueError, ExternalReference, ScalarType};
pub use config::Config;
pub use document::{DocumentKind, Engine};
pub use emit::{GenerateError, generate, generate_with};
pub use template::{RenderError, Scope, TemplateError, TemplateSet, Value};

/// Errors that can occur while generating pointer helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalogue violated one of its construction rules.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// A file could not be created or rendered.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
