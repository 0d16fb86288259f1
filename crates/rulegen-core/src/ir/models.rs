use serde::Serialize;

use super::types::IrType;
use crate::parse::schema::Property;

/// A template-ready model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalModel {
    /// Name as declared under `definitions`.
    pub name: String,
    pub classname: String,
    pub class_filename: String,
    pub description: Option<String>,
    /// Classname of the `allOf` parent, if any.
    pub parent: Option<String>,
    pub properties: Vec<ModelProperty>,
    /// Import paths of the models this one references.
    pub imports: Vec<String>,
    /// Pretty-printed raw schema, for template debugging.
    pub model_json: Option<String>,
}

impl CanonicalModel {
    pub fn property(&self, base_name: &str) -> Option<&ModelProperty> {
        self.properties.iter().find(|p| p.base_name == base_name)
    }
}

/// A field on a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProperty {
    /// Escaped variable name.
    pub name: String,
    /// Key in the raw schema.
    pub base_name: String,
    pub data_type: IrType,
    pub required: bool,
    pub description: Option<String>,
    pub descriptor: Property,
}
