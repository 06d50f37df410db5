//! Scalar type catalogue.
//!
//! The catalogue is the only input of the generator: an ordered list of
//! scalar types, each optionally tied to the module it is imported from.
//! Order is significant, it fixes the order of functions in the output.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::debug;

use crate::utils::{capitalize_first, is_identifier};

/// Module a scalar type is imported from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExternalReference {
    locator: String,
    alias: Option<String>,
}

impl ExternalReference {
    /// Reference the module at `locator` (an import path such as `time`).
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            alias: None,
        }
    }

    /// Import the module under `alias` instead of its own name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Name used to qualify symbols from this module.
    ///
    /// The alias if one is set, otherwise the last `/` segment of the locator.
    pub fn reference_name(&self) -> &str {
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() => alias,
            _ => self.locator.rsplit('/').next().unwrap_or_default(),
        }
    }
}

/// One catalogue entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarType {
    type_name: String,
    reference: Option<ExternalReference>,
}

impl ScalarType {
    /// A type that needs no import, like `string` or `int64`.
    pub fn builtin(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            reference: None,
        }
    }

    /// A type defined in another module, like `time.Time`.
    pub fn external(type_name: impl Into<String>, reference: ExternalReference) -> Self {
        Self {
            type_name: type_name.into(),
            reference: Some(reference),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn reference(&self) -> Option<&ExternalReference> {
        self.reference.as_ref()
    }

    /// Name component of the exported functions (`int8` -> `Int8`).
    pub fn display_name(&self) -> String {
        capitalize_first(&self.type_name)
    }

    /// Every function generated for this type, across both documents.
    ///
    /// All of them live in one package, so they must be unique catalogue-wide.
    pub fn function_names(&self) -> [String; 6] {
        let name = self.display_name();
        [
            name.clone(),
            format!("{name}Slice"),
            format!("{name}Map"),
            format!("To{name}"),
            format!("To{name}Slice"),
            format!("To{name}Map"),
        ]
    }

    /// Type expression used in generated signatures.
    pub fn symbol(&self) -> String {
        match &self.reference {
            Some(reference) => format!("{}.{}", reference.reference_name(), self.type_name),
            None => self.type_name.clone(),
        }
    }
}

/// Catalogue entries that would produce broken output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("catalogue entry #{index} has an empty type name")]
    EmptyTypeName { index: usize },

    #[error("type name `{type_name}` is not a valid identifier")]
    InvalidTypeName { type_name: String },

    #[error("type `{type_name}` is listed more than once")]
    DuplicateTypeName { type_name: String },

    #[error("types `{first}` and `{second}` both produce a function named `{function_name}`")]
    FunctionNameCollision {
        function_name: String,
        first: String,
        second: String,
    },

    #[error("type `{type_name}` references `{locator}`, which has no usable name")]
    EmptyReferenceName { type_name: String, locator: String },

    #[error("type `{type_name}` is referred to through `{reference_name}`, which is not a valid identifier")]
    InvalidReferenceName {
        type_name: String,
        reference_name: String,
    },

    #[error("type `{type_name}` references `{locator}`, which is not a valid import path")]
    InvalidLocator { type_name: String, locator: String },

    #[error("imports `{first}` and `{second}` are both referred to as `{reference_name}`")]
    ReferenceNameConflict {
        reference_name: String,
        first: String,
        second: String,
    },
}

/// Ordered, validated list of scalar types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalogue {
    types: Vec<ScalarType>,
}

impl Catalogue {
    /// Build a catalogue, rejecting entries that would emit broken code.
    pub fn new(types: impl IntoIterator<Item = ScalarType>) -> Result<Self, CatalogueError> {
        let types: Vec<ScalarType> = types.into_iter().collect();
        validate(&types)?;
        debug!(types = types.len(), "catalogue validated");
        Ok(Self { types })
    }

    /// The scalar types pointer helpers are generated for by default.
    pub fn standard() -> Result<Self, CatalogueError> {
        let builtins = [
            "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
            "uint32", "uint64", "float32", "float64",
        ];

        Self::new(
            builtins
                .into_iter()
                .map(ScalarType::builtin)
                .chain([ScalarType::external("Time", ExternalReference::new("time"))]),
        )
    }

    pub fn types(&self) -> &[ScalarType] {
        &self.types
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScalarType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Distinct references used by the catalogue, in order of first use.
    ///
    /// References to the same locator under the same name are one import; the
    /// first spelling wins.
    pub fn required_references(&self) -> Vec<&ExternalReference> {
        let mut imports: IndexMap<(&str, &str), &ExternalReference> = IndexMap::new();
        for reference in self.types.iter().filter_map(ScalarType::reference) {
            imports
                .entry((reference.locator(), reference.reference_name()))
                .or_insert(reference);
        }
        imports.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a ScalarType;
    type IntoIter = std::slice::Iter<'a, ScalarType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

fn validate(types: &[ScalarType]) -> Result<(), CatalogueError> {
    let mut type_names: HashSet<&str> = HashSet::new();
    let mut function_names: HashMap<String, &str> = HashMap::new();
    let mut reference_names: HashMap<&str, &ExternalReference> = HashMap::new();

    for (index, ty) in types.iter().enumerate() {
        let type_name = ty.type_name();
        if type_name.is_empty() {
            return Err(CatalogueError::EmptyTypeName { index });
        }
        if !is_identifier(type_name) {
            return Err(CatalogueError::InvalidTypeName {
                type_name: type_name.to_string(),
            });
        }
        if !type_names.insert(type_name) {
            return Err(CatalogueError::DuplicateTypeName {
                type_name: type_name.to_string(),
            });
        }

        for function_name in ty.function_names() {
            if let Some(first) = function_names.get(&function_name) {
                return Err(CatalogueError::FunctionNameCollision {
                    function_name,
                    first: first.to_string(),
                    second: type_name.to_string(),
                });
            }
            function_names.insert(function_name, type_name);
        }

        let Some(reference) = ty.reference() else {
            continue;
        };
        validate_reference(type_name, reference)?;

        // Same name must always mean the same module.
        let reference_name = reference.reference_name();
        match reference_names.get(reference_name) {
            Some(&first) if first.locator() != reference.locator() => {
                return Err(CatalogueError::ReferenceNameConflict {
                    reference_name: reference_name.to_string(),
                    first: first.locator().to_string(),
                    second: reference.locator().to_string(),
                });
            }
            Some(_) => {}
            None => {
                reference_names.insert(reference_name, reference);
            }
        }
    }

    Ok(())
}

fn validate_reference(
    type_name: &str,
    reference: &ExternalReference,
) -> Result<(), CatalogueError> {
    let locator = reference.locator();
    if locator
        .chars()
        .any(|c| c == '"' || c == '\\' || c.is_whitespace() || c.is_control())
    {
        return Err(CatalogueError::InvalidLocator {
            type_name: type_name.to_string(),
            locator: locator.to_string(),
        });
    }

    let reference_name = reference.reference_name();
    if reference_name.is_empty() {
        return Err(CatalogueError::EmptyReferenceName {
            type_name: type_name.to_string(),
            locator: locator.to_string(),
        });
    }
    // `_` is the blank identifier and cannot qualify a symbol.
    if reference_name == "_" || !is_identifier(reference_name) {
        return Err(CatalogueError::InvalidReferenceName {
            type_name: type_name.to_string(),
            reference_name: reference_name.to_string(),
        });
    }

    Ok(())
}
