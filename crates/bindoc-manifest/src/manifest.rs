//! Manifest loading and registration for bindoc.
//!
//! A manifest declares, for one documentation build:
//! - the languages documentation is generated for
//! - how repeated binding identifiers are handled
//! - the documentation of each binding
//!
//! YAML is the default format; files ending in `.json` are read as JSON.

use bindoc_core::{BindingId, LanguageSet, ProgramDoc, RegistryError};
use bindoc_registry::{DocRegistry, DuplicatePolicy, RegistryConfig, SharedRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::ManifestError;

/// Top-level manifest file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocManifest {
    pub version: String,
    /// Supported languages; `None` means [`LanguageSet::default`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    #[serde(default)]
    pub bindings: Vec<BindingEntry>,
}

/// One binding and its documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingEntry {
    pub id: String,
    pub doc: ProgramDoc,
}

/// On-disk encoding of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// `.json` is JSON, anything else YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

impl DocManifest {
    /// Load a manifest from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest = Self::parse(&content, ManifestFormat::from_path(path))?;
        info!(
            "loaded manifest {} ({} bindings)",
            path.display(),
            manifest.bindings.len()
        );
        Ok(manifest)
    }

    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        match format {
            ManifestFormat::Yaml => Self::from_yaml(content),
            ManifestFormat::Json => Self::from_json(content),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        serde_yaml::from_str(yaml).map_err(|e| ManifestError::Parse(format!("yaml: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|e| ManifestError::Parse(format!("json: {}", e)))
    }

    /// The declared languages, validated; the default set when none are listed
    pub fn language_set(&self) -> Result<LanguageSet, ManifestError> {
        let Some(languages) = &self.languages else {
            return Ok(LanguageSet::default());
        };

        let mut set = LanguageSet::empty();
        for (index, tag) in languages.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(ManifestError::InvalidLanguage { index });
            }
            set.insert(tag.as_str());
        }
        Ok(set)
    }

    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig::default().with_policy(self.duplicate_policy)
    }

    /// Validated `(id, doc)` pairs in file order
    pub fn entries(&self) -> Result<Vec<(BindingId, ProgramDoc)>, ManifestError> {
        self.bindings
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                BindingId::new(entry.id.as_str())
                    .map(|id| (id, entry.doc.clone()))
                    .map_err(|source| ManifestError::InvalidBinding { index, source })
            })
            .collect()
    }

    /// Register every binding into `registry`, returning how many new
    /// bindings were added. Replaced documents are not counted.
    ///
    /// Nothing is registered unless the whole manifest can be: identifiers
    /// are validated first, and when either this manifest or `registry`
    /// rejects duplicates, an id repeated in the manifest or already present
    /// in `registry` fails with `DuplicateRegistration`.
    pub fn register_into(&self, registry: &mut DocRegistry) -> Result<usize, ManifestError> {
        let entries = self.entries()?;

        if self.duplicate_policy == DuplicatePolicy::Reject
            || registry.config().duplicate_policy == DuplicatePolicy::Reject
        {
            let mut seen = HashSet::new();
            for (id, _) in &entries {
                if registry.contains(id.as_str()) || !seen.insert(id.as_str()) {
                    return Err(RegistryError::duplicate(id.as_str()).into());
                }
            }
        }

        let mut added = 0;
        for (id, doc) in entries {
            debug!("manifest registers '{}'", id);
            if registry.register(id, doc)?.is_none() {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Same as [`DocManifest::register_into`], holding the write lock for
    /// the whole manifest
    pub fn register_shared(&self, registry: &SharedRegistry) -> Result<usize, ManifestError> {
        registry.with_write(|inner| self.register_into(inner))
    }

    /// Fresh registry configured and populated from this manifest
    pub fn build_registry(&self) -> Result<DocRegistry, ManifestError> {
        let mut registry = DocRegistry::with_config(self.registry_config());
        self.register_into(&mut registry)?;
        Ok(registry)
    }
}
