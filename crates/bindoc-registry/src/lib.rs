//! bindoc-registry: Binding documentation registry
//!
//! Stores one [`ProgramDoc`] per binding and lets render passes read them in
//! an explicit language context.
//!
//! # Example
//!
//! ```
//! use bindoc_registry::{BindingId, DocRegistry, ProgramDoc};
//!
//! let mut registry = DocRegistry::new();
//! registry
//!     .register(BindingId::new("knn").unwrap(), ProgramDoc::new("k-Nearest-Neighbors Search"))
//!     .unwrap();
//!
//! let ctx = registry.render_context("python");
//! assert_eq!(ctx.lookup("knn").unwrap().name, "k-Nearest-Neighbors Search");
//! assert!(ctx.lookup("kmeans").is_err());
//! ```
//!
//! Registration is expected to finish before rendering starts. When several
//! threads register at once, use [`SharedRegistry`] and call
//! [`SharedRegistry::into_inner`] when they are done.

pub mod context;
pub mod pass;
pub mod registry;
pub mod shared;

pub use context::RenderContext;
pub use pass::{DocEmitter, PassError, RenderPass, RenderSummary};
pub use registry::{DocRegistry, DuplicatePolicy, RegistryConfig};
pub use shared::SharedRegistry;

pub use bindoc_core::{
    BindingId, LanguageSet, LanguageTag, ParamDoc, ProgramDoc, RegistryError, SeeAlso,
};
