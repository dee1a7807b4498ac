//! bindoc-manifest: Manifest-driven registration
//!
//! Populates a [`DocRegistry`] from YAML or JSON manifest files, so the
//! registration phase of a documentation build can be configured instead of
//! hand-coded.
//!
//! # Example
//!
//! ```ignore
//! use bindoc_manifest::load_registry;
//! use bindoc_registry::RenderPass;
//!
//! let (registry, languages) = load_registry("manifests/mlpack-bindings.yaml")?;
//! RenderPass::all(&registry).run_languages(&registry, &languages, &mut emitter)?;
//! ```

pub mod manifest;

pub use manifest::{BindingEntry, DocManifest, ManifestFormat};

use bindoc_core::{InvalidBindingId, LanguageSet, RegistryError};
use bindoc_registry::DocRegistry;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or applying a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("MANIFEST/IO: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("MANIFEST/PARSE: {0}")]
    Parse(String),

    #[error("MANIFEST/BINDING: entry {index}: {source}")]
    InvalidBinding {
        index: usize,
        #[source]
        source: InvalidBindingId,
    },

    #[error("MANIFEST/LANG: language entry {index} is empty")]
    InvalidLanguage { index: usize },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Load a manifest and build its registry together with the language set
/// the render phase should cover.
pub fn load_registry(path: impl AsRef<Path>) -> Result<(DocRegistry, LanguageSet), ManifestError> {
    let manifest = DocManifest::load(path)?;
    let languages = manifest.language_set()?;
    let registry = manifest.build_registry()?;
    Ok((registry, languages))
}
