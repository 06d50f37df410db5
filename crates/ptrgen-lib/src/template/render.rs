//! Template expansion.

use std::io::Write;

use tracing::trace;

use super::parse::Node;
use super::{RenderError, Scope, TemplateSet, Value};

/// Maximum nesting of `{{> name}}` includes; deeper means an include cycle.
pub const MAX_INCLUDE_DEPTH: usize = 32;

/// Scopes visible at a point of rendering, innermost last.
type ScopeStack<'s> = Vec<&'s Scope>;

impl TemplateSet {
    /// Render the template `name` into `out`.
    pub fn render<W: Write>(&self, name: &str, scope: &Scope, out: &mut W) -> Result<(), RenderError> {
        let mut scopes: ScopeStack<'_> = vec![scope];
        self.render_named(name, &mut scopes, out, 0)
    }

    /// Render the template `name` into a new string.
    pub fn render_to_string(&self, name: &str, scope: &Scope) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(name, scope, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn render_named<'s, W: Write>(
        &self,
        name: &str,
        scopes: &mut ScopeStack<'s>,
        out: &mut W,
        depth: usize,
    ) -> Result<(), RenderError> {
        if depth > MAX_INCLUDE_DEPTH {
            return Err(RenderError::TooDeep(MAX_INCLUDE_DEPTH));
        }

        let template = self
            .get(name)
            .ok_or_else(|| RenderError::UnknownTemplate(name.to_string()))?;
        trace!(template = name, depth, "rendering template");
        self.render_nodes(name, &template.nodes, scopes, out, depth)
    }

    fn render_nodes<'s, W: Write>(
        &self,
        template: &str,
        nodes: &[Node],
        scopes: &mut ScopeStack<'s>,
        out: &mut W,
        depth: usize,
    ) -> Result<(), RenderError> {
        for node in nodes {
            match node {
                Node::Text(text) => out.write_all(text.as_bytes())?,
                Node::Value(name) => match lookup(scopes, template, name)? {
                    Value::Text(text) => out.write_all(text.as_bytes())?,
                    Value::List(_) => return Err(wrong_shape(template, name, "text")),
                },
                Node::Include(name) => self.render_named(name, scopes, out, depth + 1)?,
                Node::Each { list, body } => {
                    let Value::List(items) = lookup(scopes, template, list)? else {
                        return Err(wrong_shape(template, list, "a list"));
                    };
                    for item in items {
                        scopes.push(item);
                        let result = self.render_nodes(template, body, scopes, out, depth);
                        scopes.pop();
                        result?;
                    }
                }
                Node::If { name, body } => {
                    if lookup(scopes, template, name)?.is_present() {
                        self.render_nodes(template, body, scopes, out, depth)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn lookup<'s>(scopes: &[&'s Scope], template: &str, name: &str) -> Result<&'s Value, RenderError> {
    scopes
        .iter()
        .rev()
        .find_map(|&scope| scope.get(name))
        .ok_or_else(|| RenderError::UnknownValue {
            template: template.to_string(),
            name: name.to_string(),
        })
}

fn wrong_shape(template: &str, name: &str, expected: &'static str) -> RenderError {
    RenderError::WrongShape {
        template: template.to_string(),
        name: name.to_string(),
        expected,
    }
}
