//! Render Context: explicit language for one render pass
use bindoc_core::{LanguageTag, ProgramDoc, RegistryError};

use crate::registry::DocRegistry;

/// Read-only view of a registry tied to one target language.
///
/// Contexts never touch the registry's ambient language slot, so passes for
/// different languages can run side by side over the same registry.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    registry: &'a DocRegistry,
    language: LanguageTag,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a DocRegistry, language: LanguageTag) -> Self {
        Self { registry, language }
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn lookup(&self, id: &str) -> Result<&'a ProgramDoc, RegistryError> {
        self.registry.lookup(id)
    }

    pub fn registry(&self) -> &'a DocRegistry {
        self.registry
    }

    /// Same registry, different language
    pub fn for_language(&self, language: impl Into<LanguageTag>) -> RenderContext<'a> {
        RenderContext::new(self.registry, language.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindoc_core::BindingId;

    #[test]
    fn test_contexts_ignore_ambient_slot() {
        let mut registry = DocRegistry::new();
        registry
            .register(BindingId::new("knn").unwrap(), ProgramDoc::new("kNN"))
            .unwrap();
        registry.set_language("go");

        let cli = registry.render_context("cli");
        let python = cli.for_language("python");

        assert_eq!(cli.language().as_str(), "cli");
        assert_eq!(python.language().as_str(), "python");
        assert_eq!(registry.language().as_str(), "go");
        assert_eq!(cli.lookup("knn").unwrap().name, "kNN");
        assert_eq!(python.lookup("knn").unwrap().name, "kNN");
    }

    #[test]
    fn test_current_context_snapshots_language() {
        let mut registry = DocRegistry::new();
        assert!(registry.current_context().language().is_unset());

        registry.set_language("julia");
        let ctx = registry.current_context();
        assert_eq!(ctx.language().as_str(), "julia");
        assert!(ctx.lookup("kmeans").is_err());
    }
}
