//! Target documentation languages
//!
//! A [`LanguageTag`] names the flavor being rendered ("cli", "python", ...).
//! Tags are free-form; the fixed list of languages a generator supports lives
//! in a caller-owned [`LanguageSet`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::UnknownLanguage;

/// Languages mlpack generates binding documentation for
pub const DEFAULT_LANGUAGES: &[&str] = &["cli", "python", "julia", "go", "r"];

/// Identifier of a documentation flavor.
///
/// The empty tag is the "unset" sentinel reported by a registry whose
/// language has never been set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn unset() -> Self {
        Self(String::new())
    }

    /// True for the empty tag, whether it came from [`LanguageTag::unset`]
    /// or was set explicitly.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            f.write_str("<unset>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<&LanguageTag> for LanguageTag {
    fn from(tag: &LanguageTag) -> Self {
        tag.clone()
    }
}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered set of languages a generator supports.
///
/// Order is kept so render passes run languages in the order they were
/// declared. Duplicates are dropped on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageSet {
    languages: Vec<LanguageTag>,
}

impl LanguageSet {
    pub fn empty() -> Self {
        Self { languages: Vec::new() }
    }

    /// Add a language; returns `false` if it was already present
    pub fn insert(&mut self, tag: impl Into<LanguageTag>) -> bool {
        let tag = tag.into();
        if self.contains(tag.as_str()) {
            return false;
        }
        self.languages.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.languages.iter().any(|l| l.as_str() == tag)
    }

    /// Validate a tag against the set.
    pub fn check(&self, tag: &str) -> Result<LanguageTag, UnknownLanguage> {
        self.languages
            .iter()
            .find(|l| l.as_str() == tag)
            .cloned()
            .ok_or_else(|| UnknownLanguage {
                tag: tag.to_string(),
                supported: self.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        DEFAULT_LANGUAGES.iter().copied().collect()
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.languages.iter().map(|l| l.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl<T: Into<LanguageTag>> FromIterator<T> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<'a> IntoIterator for &'a LanguageSet {
    type Item = &'a LanguageTag;
    type IntoIter = std::slice::Iter<'a, LanguageTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_sentinel() {
        let tag = LanguageTag::default();
        assert!(tag.is_unset());
        assert_eq!(tag, LanguageTag::unset());
        assert_eq!(tag.to_string(), "<unset>");
    }

    #[test]
    fn test_default_set_order() {
        let set = LanguageSet::default();
        let names: Vec<&str> = set.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, vec!["cli", "python", "julia", "go", "r"]);
    }

    #[test]
    fn test_insert_dedupes() {
        let mut set: LanguageSet = ["cli", "python"].into_iter().collect();
        assert!(!set.insert("cli"));
        assert!(set.insert("markdown"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_check() {
        let set = LanguageSet::default();
        assert_eq!(set.check("python").unwrap(), "python");

        let err = set.check("cobol").unwrap_err();
        assert_eq!(err.tag, "cobol");
        assert!(err.to_string().contains("cli, python, julia, go, r"));
    }
}
