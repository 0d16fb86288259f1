use indexmap::IndexMap;
use serde::Serialize;

use super::models::CanonicalModel;
use super::operations::{ImportEntry, OperationSet};

/// Key under which the pass-wide import entries are handed to templates.
pub const REFS_KEY: &str = "refs";

/// Everything one generation pass produces, ready for the renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPass {
    pub models: Vec<CanonicalModel>,
    pub operation_sets: Vec<OperationSet>,
    /// Import entries of every operation set, first occurrence wins.
    pub refs: Vec<ImportEntry>,
    pub targets: Vec<RenderTarget>,
    pub additional_properties: IndexMap<String, serde_json::Value>,
}

impl GenerationPass {
    /// The property bag templates see, with `refs` published under [`REFS_KEY`].
    pub fn template_properties(
        &self,
    ) -> Result<IndexMap<String, serde_json::Value>, serde_json::Error> {
        let mut properties = self.additional_properties.clone();
        properties.insert(REFS_KEY.to_string(), serde_json::to_value(&self.refs)?);
        Ok(properties)
    }

    pub fn model(&self, name: &str) -> Option<&CanonicalModel> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn operation_set(&self, classname: &str) -> Option<&OperationSet> {
        self.operation_sets
            .iter()
            .find(|s| s.classname == classname)
    }
}

/// Which kind of artifact a render target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Api,
}

/// One template to render and the file it renders to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTarget {
    pub kind: ArtifactKind,
    /// Model name or operation set classname.
    pub name: String,
    pub template: String,
    pub path: String,
}

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum IrType {
    String,
    Number,
    Integer,
    Boolean,
    DateTime,
    Binary,
    Array(Box<IrType>),
    Map(Box<IrType>),
    Ref(String), // model name (PascalCase)
    Any,
}

impl IrType {
    /// Model names referenced by this type, outermost first.
    pub fn referenced_models(&self) -> Vec<&str> {
        match self {
            IrType::Ref(name) => vec![name.as_str()],
            IrType::Array(inner) | IrType::Map(inner) => inner.referenced_models(),
            _ => Vec::new(),
        }
    }
}
