use indexmap::IndexMap;
use rulegen_core::error::TransformError;
use rulegen_core::ir::CanonicalModel;
use rulegen_core::naming::NamingPolicy;
use rulegen_core::parse::schema::Schema;
use rulegen_core::transform;

use crate::reference::{strip_schema_refs, strip_schema_root};

/// Turn a raw definition into a canonical model: build the base shell,
/// rewrite every reference to its local path and attach the rewritten
/// schema as pretty JSON. `schema` itself is left as parsed.
pub fn normalize_model(
    naming: &NamingPolicy<'_>,
    name: &str,
    schema: &Schema,
    all_definitions: &IndexMap<String, Schema>,
) -> Result<CanonicalModel, TransformError> {
    let mut model = transform::from_model(naming, name, schema, all_definitions)?;

    let model_error = |source| TransformError::Model {
        name: name.to_string(),
        source,
    };
    for property in &mut model.properties {
        strip_schema_root(&mut property.descriptor).map_err(model_error)?;
    }

    let mut localized = schema.clone();
    strip_schema_refs(&mut localized).map_err(model_error)?;
    model.model_json = Some(serde_json::to_string_pretty(&localized)?);
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegen_core::config::GeneratorConfig;
    use rulegen_core::error::ResolveError;
    use rulegen_core::parse::schema::Property;

    fn pet_schema() -> Schema {
        let mut schema = Schema::default();
        schema
            .properties
            .insert("id".to_string(), Property::primitive("integer"));
        schema.properties.insert(
            "category".to_string(),
            Property::reference("#/definitions/Category"),
        );
        schema.properties.insert(
            "tags".to_string(),
            Property::array_of(Property::reference("#/definitions/Tag")),
        );
        schema
    }

    #[test]
    fn test_category_ref_is_localized() {
        let config = GeneratorConfig::default();
        let naming = NamingPolicy::new(&config);
        let schema = pet_schema();

        let model = normalize_model(&naming, "Pet", &schema, &IndexMap::new()).unwrap();
        assert_eq!(
            model.property("category").unwrap().descriptor,
            Property::reference("/Category")
        );
        assert_eq!(
            model.property("tags").unwrap().descriptor,
            Property::array_of(Property::reference("/Tag"))
        );
        assert_eq!(
            model.property("id").unwrap().descriptor,
            Property::primitive("integer")
        );
    }

    #[test]
    fn test_raw_schema_is_untouched_and_json_is_localized() {
        let config = GeneratorConfig::default();
        let naming = NamingPolicy::new(&config);
        let schema = pet_schema();

        let model = normalize_model(&naming, "Pet", &schema, &IndexMap::new()).unwrap();
        assert_eq!(schema, pet_schema());

        let snapshot: serde_json::Value =
            serde_json::from_str(model.model_json.as_deref().unwrap()).unwrap();
        assert_eq!(snapshot["properties"]["category"]["$ref"], "/Category");
        assert_eq!(snapshot["properties"]["tags"]["items"]["$ref"], "/Tag");
        assert!(model.model_json.unwrap().contains('\n'));
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let config = GeneratorConfig::default();
        let naming = NamingPolicy::new(&config);
        let schema = pet_schema();

        let first = normalize_model(&naming, "Pet", &schema, &IndexMap::new()).unwrap();
        let second = normalize_model(&naming, "Pet", &schema, &IndexMap::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_reference_names_the_model() {
        let config = GeneratorConfig::default();
        let naming = NamingPolicy::new(&config);
        let mut schema = Schema::default();
        schema
            .properties
            .insert("owner".to_string(), Property::reference("#/parameters/Owner"));

        let err = normalize_model(&naming, "Pet", &schema, &IndexMap::new()).unwrap_err();
        assert!(err.to_string().contains("model `Pet`"));
        assert_eq!(
            err.resolve_error(),
            Some(&ResolveError::MalformedReference(
                "#/parameters/Owner".to_string()
            ))
        );
    }
}
