//! Render Pass: hands registered documentation to an emitter
//!
//! The registry does no formatting. A render pass resolves the requested
//! bindings in one language context and feeds each document to a
//! [`DocEmitter`] supplied by the renderer.

use bindoc_core::{BindingId, LanguageSet, LanguageTag, ProgramDoc, RegistryError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::context::RenderContext;
use crate::registry::DocRegistry;

/// Receiver of resolved documentation, implemented by the renderer
pub trait DocEmitter {
    type Error: std::error::Error + 'static;

    fn emit(
        &mut self,
        language: &LanguageTag,
        id: &BindingId,
        doc: &ProgramDoc,
    ) -> Result<(), Self::Error>;
}

impl<T: DocEmitter + ?Sized> DocEmitter for &mut T {
    type Error = T::Error;

    fn emit(
        &mut self,
        language: &LanguageTag,
        id: &BindingId,
        doc: &ProgramDoc,
    ) -> Result<(), Self::Error> {
        (**self).emit(language, id, doc)
    }
}

#[derive(Error, Debug)]
pub enum PassError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("EMIT/{binding} ({language}): {source}")]
    Emit {
        binding: String,
        language: String,
        #[source]
        source: E,
    },
}

/// Outcome of one completed pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSummary {
    pub language: LanguageTag,
    pub emitted: usize,
}

/// Ordered list of bindings to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPass {
    bindings: Vec<BindingId>,
}

impl RenderPass {
    pub fn new(bindings: impl IntoIterator<Item = BindingId>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Every binding in the registry, sorted by identifier
    pub fn all(registry: &DocRegistry) -> Self {
        Self::new(registry.binding_ids().into_iter().cloned())
    }

    pub fn bindings(&self) -> &[BindingId] {
        &self.bindings
    }

    /// Render every binding in `ctx`'s language.
    ///
    /// All bindings are resolved before the first `emit`, so an unregistered
    /// identifier aborts the pass with `NotFound` and the emitter sees
    /// nothing. An emitter error stops the pass at that binding.
    pub fn run<E: DocEmitter>(
        &self,
        ctx: &RenderContext<'_>,
        mut emitter: E,
    ) -> Result<RenderSummary, PassError<E::Error>> {
        let resolved = self
            .bindings
            .iter()
            .map(|id| ctx.lookup(id.as_str()).map(|doc| (id, doc)))
            .collect::<Result<Vec<_>, _>>()?;

        for (id, doc) in &resolved {
            emitter
                .emit(ctx.language(), id, doc)
                .map_err(|source| PassError::Emit {
                    binding: id.to_string(),
                    language: ctx.language().to_string(),
                    source,
                })?;
        }

        info!(
            "rendered {} bindings for language {}",
            resolved.len(),
            ctx.language()
        );

        Ok(RenderSummary {
            language: ctx.language().clone(),
            emitted: resolved.len(),
        })
    }

    /// One pass per language, in set order, each with its own context.
    /// Stops at the first failing pass.
    pub fn run_languages<E: DocEmitter>(
        &self,
        registry: &DocRegistry,
        languages: &LanguageSet,
        mut emitter: E,
    ) -> Result<Vec<RenderSummary>, PassError<E::Error>> {
        languages
            .iter()
            .map(|language| self.run(&registry.render_context(language), &mut emitter))
            .collect()
    }
}
