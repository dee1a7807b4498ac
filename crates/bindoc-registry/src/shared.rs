//! Shared Registry: lock-guarded handle for parallel registration
use bindoc_core::{BindingId, LanguageTag, ProgramDoc, RegistryError};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::registry::DocRegistry;

/// Cloneable handle to a registry behind a read/write lock.
///
/// Registration from several threads takes the write lock per insert.
/// Once registration is finished, [`SharedRegistry::into_inner`] returns the
/// plain registry for rendering.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<DocRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: DocRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn register(
        &self,
        id: BindingId,
        doc: ProgramDoc,
    ) -> Result<Option<ProgramDoc>, RegistryError> {
        self.inner.write().register(id, doc)
    }

    /// Clone of the registered document; the lock is not held afterwards
    pub fn lookup_cloned(&self, id: &str) -> Result<ProgramDoc, RegistryError> {
        self.inner.read().lookup(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn set_language(&self, tag: impl Into<LanguageTag>) {
        self.inner.write().set_language(tag);
    }

    pub fn language(&self) -> LanguageTag {
        self.inner.read().language().clone()
    }

    /// Run `f` under the read lock
    pub fn with_read<R>(&self, f: impl FnOnce(&DocRegistry) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` under the write lock, so a batch of registrations is applied
    /// without other writers interleaving
    pub fn with_write<R>(&self, f: impl FnOnce(&mut DocRegistry) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Take the registry back out. Fails, returning the handle, while other
    /// clones are still alive.
    pub fn into_inner(self) -> Result<DocRegistry, SharedRegistry> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => {
                let registry = lock.into_inner();
                debug!("registration closed with {} bindings", registry.len());
                Ok(registry)
            }
            Err(inner) => Err(SharedRegistry { inner }),
        }
    }
}

impl From<DocRegistry> for SharedRegistry {
    fn from(registry: DocRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DuplicatePolicy;
    use std::thread;

    #[test]
    fn test_parallel_registration() {
        let shared = SharedRegistry::default();

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let id = BindingId::new(format!("binding_{n}")).unwrap();
                    shared.register(id, ProgramDoc::new(format!("Binding {n}")))
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), None);
        }

        assert_eq!(shared.len(), 8);
        assert_eq!(shared.lookup_cloned("binding_3").unwrap().name, "Binding 3");

        let registry = shared.into_inner().unwrap();
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_into_inner_with_live_clone() {
        let shared = SharedRegistry::default();
        let other = shared.clone();

        let shared = shared.into_inner().unwrap_err();
        drop(other);
        assert!(shared.into_inner().is_ok());
    }

    #[test]
    fn test_policy_and_language_through_handle() {
        let shared = SharedRegistry::new(DocRegistry::with_policy(DuplicatePolicy::Reject));
        let id = BindingId::new("kmeans").unwrap();

        shared.register(id.clone(), ProgramDoc::new("a")).unwrap();
        assert!(matches!(
            shared.register(id, ProgramDoc::new("b")),
            Err(RegistryError::DuplicateRegistration { .. })
        ));

        assert!(shared.language().is_unset());
        shared.set_language("python");
        assert_eq!(shared.language().as_str(), "python");
        assert!(shared.with_read(|r| r.contains("kmeans")));
    }

    #[test]
    fn test_with_write_batch() {
        let shared = SharedRegistry::default();
        let added = shared.with_write(|registry| {
            for name in ["knn", "kmeans"] {
                registry
                    .register(BindingId::new(name).unwrap(), ProgramDoc::new(name))
                    .unwrap();
            }
            registry.len()
        });
        assert_eq!(added, 2);
        assert!(shared.contains("knn"));
    }
}
