use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Prefix every intra-document schema reference starts with.
pub const SCHEMA_ROOT_PREFIX: &str = "#/definitions";

/// Strip the schema root from a reference path: `#/definitions/Pet` → `/Pet`.
pub fn local_ref_path(ref_path: &str) -> Result<&str, ResolveError> {
    ref_path
        .strip_prefix(SCHEMA_ROOT_PREFIX)
        .filter(|rest| rest.len() > 1 && rest.starts_with('/'))
        .ok_or_else(|| ResolveError::MalformedReference(ref_path.to_string()))
}

/// Name of the definition a reference points at: `#/definitions/Pet` → `Pet`.
pub fn definition_name(ref_path: &str) -> Result<&str, ResolveError> {
    local_ref_path(ref_path).map(|local| &local[1..])
}

/// A property type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Array(ArrayProperty),
    Primitive(PrimitiveProperty),
}

impl Property {
    pub fn reference(ref_path: impl Into<String>) -> Self {
        Property::Ref {
            ref_path: ref_path.into(),
        }
    }

    pub fn array_of(items: Property) -> Self {
        Property::Array(ArrayProperty {
            array_type: ArrayType::Array,
            items: Box::new(items),
            description: None,
            min_items: None,
            max_items: None,
            unique_items: None,
        })
    }

    pub fn primitive(property_type: impl Into<String>) -> Self {
        Property::Primitive(PrimitiveProperty {
            property_type: Some(property_type.into()),
            ..PrimitiveProperty::default()
        })
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Property::Ref { .. } => None,
            Property::Array(a) => a.description.as_deref(),
            Property::Primitive(p) => p.description.as_deref(),
        }
    }
}

/// The `type` keyword of an array property. Only `array` matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayType {
    Array,
}

/// An array property with its item descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayProperty {
    #[serde(rename = "type")]
    pub array_type: ArrayType,

    pub items: Box<Property>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(rename = "uniqueItems", skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
}

/// Any property that is neither a reference nor an array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrimitiveProperty {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// A reference or inline schema, as found in `allOf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

/// A model definition from the `definitions` section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Property>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ref_path() {
        assert_eq!(local_ref_path("#/definitions/Pet"), Ok("/Pet"));
        assert_eq!(definition_name("#/definitions/Pet"), Ok("Pet"));
    }

    #[test]
    fn test_local_ref_path_rejects_foreign_roots() {
        for bad in [
            "/Pet",
            "Pet",
            "#/components/schemas/Pet",
            "#/definitionsPet",
            "#/definitions/",
            "#/definitions",
        ] {
            assert_eq!(
                local_ref_path(bad),
                Err(ResolveError::MalformedReference(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_property_variants_deserialize() {
        let reference: Property =
            serde_json::from_str(r##"{"$ref": "#/definitions/Category"}"##).unwrap();
        assert_eq!(reference, Property::reference("#/definitions/Category"));

        let array: Property =
            serde_json::from_str(r##"{"type": "array", "items": {"$ref": "#/definitions/Tag"}}"##)
                .unwrap();
        assert_eq!(
            array,
            Property::array_of(Property::reference("#/definitions/Tag"))
        );

        let primitive: Property =
            serde_json::from_str(r#"{"type": "integer", "format": "int64"}"#).unwrap();
        match primitive {
            Property::Primitive(p) => {
                assert_eq!(p.property_type.as_deref(), Some("integer"));
                assert_eq!(p.format.as_deref(), Some("int64"));
            }
            other => panic!("expected primitive, got {other:?}"),
        }
    }

    #[test]
    fn test_array_without_items_is_primitive() {
        let property: Property = serde_json::from_str(r#"{"type": "array"}"#).unwrap();
        assert!(matches!(property, Property::Primitive(_)));
    }

    #[test]
    fn test_ref_serializes_back_to_dollar_ref() {
        let json = serde_json::to_value(Property::reference("#/definitions/Pet")).unwrap();
        assert_eq!(json, serde_json::json!({"$ref": "#/definitions/Pet"}));
    }
}
