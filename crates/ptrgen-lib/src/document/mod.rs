//! Rendering of the two pointer helper documents.
//!
//! A document is one output file. Both kinds share a header (generated-file
//! marker, package clause, imports) followed by three functions per
//! catalogue entry, in catalogue order.

mod go;


use std::fmt;
use std::io::Write;

use tracing::{debug, trace};

use crate::catalogue::{Catalogue, ExternalReference, ScalarType};
use crate::config::Config;
use crate::template::{RenderError, Scope, TemplateError, TemplateSet};

/// The two documents the generator writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Value -> pointer helpers (`String`, `StringSlice`, `StringMap`).
    ToPointer,
    /// Pointer -> value helpers (`ToString`, `ToStringSlice`, `ToStringMap`).
    FromPointer,
}

impl DocumentKind {
    /// Generation order.
    pub const ALL: [DocumentKind; 2] = [DocumentKind::ToPointer, DocumentKind::FromPointer];

    /// Name of the template that renders this document.
    pub fn template_name(self) -> &'static str {
        match self {
            DocumentKind::ToPointer => "scalar to pointer",
            DocumentKind::FromPointer => "scalar from pointer",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            DocumentKind::ToPointer => "to_ptr.go",
            DocumentKind::FromPointer => "from_ptr.go",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

/// Renders documents from a template set.
#[derive(Clone, Debug)]
pub struct Engine {
    templates: TemplateSet,
}

impl Engine {
    /// Engine backed by the built-in Go templates.
    pub fn new() -> Result<Self, TemplateError> {
        let templates = go::templates()?;
        debug!(templates = templates.names().count(), "parsed go templates");
        Ok(Self { templates })
    }

    /// Engine backed by a caller-provided template set.
    pub fn with_templates(templates: TemplateSet) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render the document of `kind` for `catalogue` into `out`.
    pub fn render<W: Write>(
        &self,
        kind: DocumentKind,
        catalogue: &Catalogue,
        config: &Config,
        out: &mut W,
    ) -> Result<(), RenderError> {
        let scope = document_scope(catalogue, config);
        trace!(%kind, types = catalogue.len(), "rendering document");
        self.templates.render(kind.template_name(), &scope, out)
    }

    /// Render the document of `kind` into a new string.
    pub fn render_to_string(
        &self,
        kind: DocumentKind,
        catalogue: &Catalogue,
        config: &Config,
    ) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(kind, catalogue, config, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn document_scope(catalogue: &Catalogue, config: &Config) -> Scope {
    Scope::new()
        .text("generator", config.generator_name())
        .text("package", config.package_name())
        .list(
            "imports",
            catalogue.required_references().into_iter().map(import_scope),
        )
        .list("types", catalogue.iter().map(type_scope))
}

fn import_scope(reference: &ExternalReference) -> Scope {
    let alias_prefix = match reference.alias() {
        Some(alias) if !alias.is_empty() => format!("{alias} "),
        _ => String::new(),
    };

    Scope::new()
        .text("locator", reference.locator())
        .text("alias_prefix", alias_prefix)
        .text("reference", reference.reference_name())
}

fn type_scope(ty: &ScalarType) -> Scope {
    Scope::new()
        .text("type", ty.type_name())
        .text("name", ty.display_name())
        .text("symbol", ty.symbol())
}
