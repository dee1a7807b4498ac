//! Program documentation records
//!
//! A [`ProgramDoc`] is everything a renderer needs to document one binding.
//! The registry never looks inside; these types only exist so registration
//! and rendering agree on a shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Documentation for one binding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDoc {
    /// Human-readable program name
    pub name: String,

    /// One-paragraph summary
    #[serde(default)]
    pub short_description: String,

    /// Full description
    #[serde(default)]
    pub long_description: String,

    /// Example invocations
    #[serde(default)]
    pub examples: Vec<String>,

    /// Parameter descriptions, in declaration order
    #[serde(default)]
    pub params: Vec<ParamDoc>,

    /// Related documentation
    #[serde(default)]
    pub see_also: Vec<SeeAlso>,
}

impl ProgramDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_param(mut self, param: ParamDoc) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_see_also(mut self, description: impl Into<String>, link: impl Into<String>) -> Self {
        self.see_also.push(SeeAlso {
            description: description.into(),
            link: link.into(),
        });
        self
    }

    /// Find a parameter by name
    pub fn param(&self, name: &str) -> Option<&ParamDoc> {
        self.params.iter().find(|p| p.name == name)
    }

    /// JSON view for template-driven emitters
    pub fn to_json(&self) -> Value {
        // Plain strings and vectors; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Description of one binding parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    /// Type as the binding declares it (e.g. "int", "matrix")
    #[serde(rename = "type", alias = "type_name")]
    pub type_name: String,
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ParamDoc {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: description.into(),
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Link to related documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeeAlso {
    pub description: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn knn_doc() -> ProgramDoc {
        ProgramDoc::new("k-Nearest-Neighbors Search")
            .with_short_description("Find the k nearest neighbors of each query point.")
            .with_example("knn --reference_file ref.csv --k 5")
            .with_param(ParamDoc::new("k", "int", "Number of neighbors.").required())
            .with_param(ParamDoc::new("leaf_size", "int", "Leaf size for trees.").with_default("20"))
            .with_see_also("k-furthest neighbors", "#kfn")
    }

    #[test]
    fn test_builder() {
        let doc = knn_doc();
        assert_eq!(doc.examples.len(), 1);
        assert!(doc.param("k").unwrap().required);
        assert_eq!(doc.param("leaf_size").unwrap().default.as_deref(), Some("20"));
        assert!(doc.param("missing").is_none());
        assert_eq!(doc.see_also[0].link, "#kfn");
    }

    #[test]
    fn test_json_view() {
        let value = knn_doc().to_json();
        assert_eq!(value["name"], json!("k-Nearest-Neighbors Search"));
        assert_eq!(value["params"][0]["type"], json!("int"));
        assert!(value["params"][0].get("default").is_none());
    }

    #[test]
    fn test_minimal_deserialize() {
        let doc: ProgramDoc = serde_json::from_value(json!({ "name": "K-Means" })).unwrap();
        assert_eq!(doc, ProgramDoc::new("K-Means"));
    }
}
