//! Documentation Registry
//!
//! Maps binding identifiers to their [`ProgramDoc`] and carries the ambient
//! "current language" slot. A registry is an ordinary value: build one per
//! documentation run (or per test) and hand it to the registration and
//! rendering passes.

use bindoc_core::{BindingId, LanguageTag, ProgramDoc, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::context::RenderContext;

/// What `register` does when the identifier is already present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Replace the stored document and hand back the old one
    #[default]
    Overwrite,
    /// Fail with `DuplicateRegistration`, keeping the first document
    Reject,
}

/// Registry settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl RegistryConfig {
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Binding documentation store plus the ambient language slot
#[derive(Debug, Clone, Default)]
pub struct DocRegistry {
    docs: HashMap<BindingId, ProgramDoc>,
    language: LanguageTag,
    config: RegistryConfig,
}

impl DocRegistry {
    /// Empty registry with the default (overwrite) policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self::with_config(RegistryConfig::default().with_policy(policy))
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Store `doc` under `id`.
    ///
    /// Under [`DuplicatePolicy::Overwrite`] a repeated identifier replaces the
    /// stored document and the previous one is returned. Under
    /// [`DuplicatePolicy::Reject`] it fails with `DuplicateRegistration` and
    /// the registry is left unchanged.
    pub fn register(
        &mut self,
        id: BindingId,
        doc: ProgramDoc,
    ) -> Result<Option<ProgramDoc>, RegistryError> {
        match self.docs.entry(id) {
            Entry::Vacant(slot) => {
                debug!("registered documentation for '{}'", slot.key());
                slot.insert(doc);
                Ok(None)
            }
            Entry::Occupied(mut slot) => match self.config.duplicate_policy {
                DuplicatePolicy::Overwrite => {
                    warn!("overwriting documentation for '{}'", slot.key());
                    Ok(Some(slot.insert(doc)))
                }
                DuplicatePolicy::Reject => Err(RegistryError::duplicate(slot.key().as_str())),
            },
        }
    }

    /// Documentation registered for `id`, or `NotFound`
    pub fn lookup(&self, id: &str) -> Result<&ProgramDoc, RegistryError> {
        self.docs.get(id).ok_or_else(|| RegistryError::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Registered identifiers, sorted
    pub fn binding_ids(&self) -> Vec<&BindingId> {
        let mut ids: Vec<&BindingId> = self.docs.keys().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BindingId, &ProgramDoc)> {
        self.docs.iter()
    }

    /// Overwrite the ambient language. Any tag is accepted; checking it
    /// against a [`bindoc_core::LanguageSet`] is the caller's job.
    pub fn set_language(&mut self, tag: impl Into<LanguageTag>) {
        let tag = tag.into();
        debug!("current language {} -> {}", self.language, tag);
        self.language = tag;
    }

    /// The ambient language; [`LanguageTag::unset`] until first set.
    ///
    /// The unset sentinel is the empty tag, so after `set_language("")`
    /// the slot cannot be told apart from one that was never set.
    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Read view bound to an explicit language, independent of the ambient
    /// slot.
    pub fn render_context(&self, language: impl Into<LanguageTag>) -> RenderContext<'_> {
        RenderContext::new(self, language.into())
    }

    /// Read view bound to the ambient language as it is right now
    pub fn current_context(&self) -> RenderContext<'_> {
        RenderContext::new(self, self.language.clone())
    }
}
