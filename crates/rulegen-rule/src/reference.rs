use rulegen_core::error::ResolveError;
use rulegen_core::parse::schema::{Property, Schema, SchemaOrRef, local_ref_path};

/// Rewrite a property's reference path to its generator-local form,
/// `#/definitions/Category` → `/Category`. Arrays have their item descriptor
/// rewritten; primitives are left alone.
pub fn strip_schema_root(property: &mut Property) -> Result<(), ResolveError> {
    match property {
        Property::Ref { ref_path } => {
            let local = local_ref_path(ref_path)?.to_string();
            *ref_path = local;
            Ok(())
        }
        Property::Array(array) => strip_schema_root(&mut array.items),
        Property::Primitive(_) => Ok(()),
    }
}

/// Rewrite every property reference of a definition, including the
/// properties of inline `allOf` parts. `allOf` parent references keep their
/// full path.
pub fn strip_schema_refs(schema: &mut Schema) -> Result<(), ResolveError> {
    for property in schema.properties.values_mut() {
        strip_schema_root(property)?;
    }
    if let Some(items) = schema.items.as_deref_mut() {
        strip_schema_root(items)?;
    }
    for part in &mut schema.all_of {
        if let SchemaOrRef::Schema(inline) = part {
            strip_schema_refs(inline)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_direct_ref() {
        let mut property = Property::reference("#/definitions/Category");
        strip_schema_root(&mut property).unwrap();
        assert_eq!(property, Property::reference("/Category"));
    }

    #[test]
    fn test_strip_array_item_ref() {
        let mut property = Property::array_of(Property::reference("#/definitions/Tag"));
        strip_schema_root(&mut property).unwrap();
        assert_eq!(property, Property::array_of(Property::reference("/Tag")));
    }

    #[test]
    fn test_strip_nested_array_item_ref() {
        let mut property =
            Property::array_of(Property::array_of(Property::reference("#/definitions/Tag")));
        strip_schema_root(&mut property).unwrap();
        assert_eq!(
            property,
            Property::array_of(Property::array_of(Property::reference("/Tag")))
        );
    }

    #[test]
    fn test_primitives_untouched() {
        let mut property = Property::primitive("string");
        strip_schema_root(&mut property).unwrap();
        assert_eq!(property, Property::primitive("string"));

        let mut strings = Property::array_of(Property::primitive("string"));
        strip_schema_root(&mut strings).unwrap();
        assert_eq!(strings, Property::array_of(Property::primitive("string")));
    }

    #[test]
    fn test_already_local_ref_is_rejected() {
        let mut property = Property::reference("/Category");
        assert_eq!(
            strip_schema_root(&mut property),
            Err(ResolveError::MalformedReference("/Category".to_string()))
        );
        assert_eq!(property, Property::reference("/Category"));
    }

    #[test]
    fn test_strip_schema_refs_covers_inline_all_of() {
        let mut inline = Schema::default();
        inline.properties.insert(
            "owner".to_string(),
            Property::reference("#/definitions/Owner"),
        );
        let mut schema = Schema {
            all_of: vec![
                SchemaOrRef::Ref {
                    ref_path: "#/definitions/Pet".to_string(),
                },
                SchemaOrRef::Schema(Box::new(inline)),
            ],
            ..Schema::default()
        };
        schema.properties.insert(
            "tags".to_string(),
            Property::array_of(Property::reference("#/definitions/Tag")),
        );

        strip_schema_refs(&mut schema).unwrap();

        assert_eq!(
            schema.properties["tags"],
            Property::array_of(Property::reference("/Tag"))
        );
        assert_eq!(
            schema.all_of[0],
            SchemaOrRef::Ref {
                ref_path: "#/definitions/Pet".to_string(),
            }
        );
        match &schema.all_of[1] {
            SchemaOrRef::Schema(inline) => {
                assert_eq!(inline.properties["owner"], Property::reference("/Owner"))
            }
            other => panic!("expected inline schema, got {other:?}"),
        }
    }
}
