//! Minimal template language for code generation.
//!
//! Templates are plain text with four kinds of tags:
//! - `{{value}}` - substitute a text value from the scope
//! - `{{> name}}` - include another template with the current scope
//! - `{{#each list}} ... {{/each}}` - render the body once per list item
//! - `{{#if name}} ... {{/if}}` - render the body if the value is non-empty
//!
//! A tag other than `{{value}}` that sits alone on its line consumes the
//! whole line, so block structure leaves no blank lines in the output.

mod error;
mod parse;
mod render;
mod scope;


pub use error::{RenderError, TemplateError};
pub use render::MAX_INCLUDE_DEPTH;
pub use scope::{Scope, Value};

use indexmap::IndexMap;

use parse::Node;

/// A parsed template.
#[derive(Clone, Debug)]
pub(crate) struct Template {
    pub(crate) nodes: Vec<Node>,
}

/// Named templates that can include each other.
#[derive(Clone, Debug, Default)]
pub struct TemplateSet {
    templates: IndexMap<String, Template>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and register it under `name`.
    pub fn define(&mut self, name: &str, text: &str) -> Result<&mut Self, TemplateError> {
        if self.templates.contains_key(name) {
            return Err(TemplateError::Duplicate {
                name: name.to_string(),
            });
        }

        let nodes = parse::parse(name, text)?;
        self.templates.insert(name.to_string(), Template { nodes });
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }
}
