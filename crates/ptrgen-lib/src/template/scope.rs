//! Values visible to a template while it renders.

use indexmap::IndexMap;

/// A value bound in a scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    List(Vec<Scope>),
}

impl Value {
    /// Truthiness used by `{{#if}}`: non-empty text or a non-empty list.
    pub fn is_present(&self) -> bool {
        match self {
            Value::Text(text) => !text.is_empty(),
            Value::List(items) => !items.is_empty(),
        }
    }
}

/// Named values, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    values: IndexMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a text value.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), Value::Text(value.into()));
        self
    }

    /// Bind `name` to a list of nested scopes.
    pub fn list(mut self, name: impl Into<String>, items: impl IntoIterator<Item = Scope>) -> Self {
        self.values
            .insert(name.into(), Value::List(items.into_iter().collect()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}
