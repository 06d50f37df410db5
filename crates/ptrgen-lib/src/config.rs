//! Generator configuration.

use std::path::{Path, PathBuf};

use crate::document::DocumentKind;

/// Settings for a generation run.
///
/// The defaults produce `to_ptr.go` and `from_ptr.go` for package `ptr` in
/// the working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Package declared by both documents
    pub(crate) package: String,
    /// Tool name written into the generated-file marker
    pub(crate) generator: String,
    /// Directory the documents are written to
    pub(crate) out_dir: PathBuf,
    /// File name of the value -> pointer document
    pub(crate) to_pointer_file: String,
    /// File name of the pointer -> value document
    pub(crate) from_pointer_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: "ptr".to_string(),
            generator: "ptrgen".to_string(),
            out_dir: PathBuf::from("."),
            to_pointer_file: DocumentKind::ToPointer.default_file_name().to_string(),
            from_pointer_file: DocumentKind::FromPointer.default_file_name().to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package name of the generated documents.
    pub fn package(mut self, value: impl Into<String>) -> Self {
        self.package = value.into();
        self
    }

    /// Set the tool name used in the generated-file marker.
    pub fn generator(mut self, value: impl Into<String>) -> Self {
        self.generator = value.into();
        self
    }

    /// Set the output directory.
    pub fn out_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.out_dir = value.into();
        self
    }

    /// Set the file name used for a document kind.
    pub fn file_name(mut self, kind: DocumentKind, value: impl Into<String>) -> Self {
        match kind {
            DocumentKind::ToPointer => self.to_pointer_file = value.into(),
            DocumentKind::FromPointer => self.from_pointer_file = value.into(),
        }
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    pub fn generator_name(&self) -> &str {
        &self.generator
    }

    pub fn output_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Full path the document of `kind` is written to.
    pub fn path_for(&self, kind: DocumentKind) -> PathBuf {
        let file = match kind {
            DocumentKind::ToPointer => &self.to_pointer_file,
            DocumentKind::FromPointer => &self.from_pointer_file,
        };
        self.out_dir.join(file)
    }
}
