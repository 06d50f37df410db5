//! Writing documents to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalogue::Catalogue;
use crate::config::Config;
use crate::document::{DocumentKind, Engine};
use crate::template::{RenderError, TemplateError};

/// Errors that abort generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to parse templates: {0}")]
    Templates(#[from] TemplateError),

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to generate {} from template `{kind}`: {source}", path.display())]
    Render {
        path: PathBuf,
        kind: DocumentKind,
        source: RenderError,
    },
}

/// Write every document for `catalogue` as described by `config`.
///
/// Documents are written in [`DocumentKind::ALL`] order and generation stops
/// at the first failure. Returns the paths written.
pub fn generate(catalogue: &Catalogue, config: &Config) -> Result<Vec<PathBuf>, GenerateError> {
    let engine = Engine::new()?;
    generate_with(&engine, catalogue, config)
}

/// Like [`generate`], with a caller-provided engine.
pub fn generate_with(
    engine: &Engine,
    catalogue: &Catalogue,
    config: &Config,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut written = Vec::with_capacity(DocumentKind::ALL.len());
    for kind in DocumentKind::ALL {
        let path = config.path_for(kind);
        emit_file(engine, kind, catalogue, config, &path)?;
        written.push(path);
    }
    Ok(written)
}

fn emit_file(
    engine: &Engine,
    kind: DocumentKind,
    catalogue: &Catalogue,
    config: &Config,
    path: &Path,
) -> Result<(), GenerateError> {
    let file = File::create(path).map_err(|source| GenerateError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let rendered = engine
        .render(kind, catalogue, config, &mut out)
        .and_then(|()| out.flush().map_err(RenderError::from));

    if let Err(source) = rendered {
        warn!(path = %path.display(), %kind, "left partial output behind");
        return Err(GenerateError::Render {
            path: path.to_path_buf(),
            kind,
            source,
        });
    }

    info!(path = %path.display(), %kind, types = catalogue.len(), "generated file");
    Ok(())
}
