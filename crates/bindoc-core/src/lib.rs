//! bindoc-core: Documentation data model
//!
//! Types shared between the registry, the registration side (manifests,
//! source compilers) and the rendering side (emitters).

pub mod binding;
pub mod doc;
pub mod error;
pub mod language;

pub use binding::BindingId;
pub use doc::{ParamDoc, ProgramDoc, SeeAlso};
pub use error::{InvalidBindingId, RegistryError, UnknownLanguage};
pub use language::{LanguageSet, LanguageTag, DEFAULT_LANGUAGES};
