//! Binding identifiers
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidBindingId;

/// Name of one exposed binding, e.g. `"knn"`.
///
/// Always non-empty and free of whitespace; the only way to build one is
/// through [`BindingId::new`] (or `FromStr` / `TryFrom`), which validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BindingId(String);

impl BindingId {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidBindingId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidBindingId::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(InvalidBindingId::Whitespace(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BindingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<BindingId, _>` be queried with a plain `&str`.
impl Borrow<str> for BindingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for BindingId {
    type Err = InvalidBindingId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BindingId {
    type Error = InvalidBindingId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BindingId {
    type Error = InvalidBindingId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BindingId> for String {
    fn from(id: BindingId) -> Self {
        id.0
    }
}
