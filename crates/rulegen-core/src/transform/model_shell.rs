use indexmap::IndexMap;

use crate::error::{ResolveError, TransformError};
use crate::ir::{CanonicalModel, ModelProperty};
use crate::naming::NamingPolicy;
use crate::parse::schema::{Property, Schema, SchemaOrRef, definition_name};

use super::schema_resolver::property_to_ir_type;

/// Build the model shell for a definition: resolved parent, typed
/// properties and model imports. Property descriptors are copied verbatim.
pub fn from_model(
    naming: &NamingPolicy<'_>,
    name: &str,
    schema: &Schema,
    all_definitions: &IndexMap<String, Schema>,
) -> Result<CanonicalModel, TransformError> {
    build_model(naming, name, schema, all_definitions).map_err(|source| TransformError::Model {
        name: name.to_string(),
        source,
    })
}

fn build_model(
    naming: &NamingPolicy<'_>,
    name: &str,
    schema: &Schema,
    all_definitions: &IndexMap<String, Schema>,
) -> Result<CanonicalModel, ResolveError> {
    let classname = naming.to_model_name(name);
    let mut parent = None;
    let mut properties: Vec<(&String, &Property)> = schema.properties.iter().collect();
    let mut required: Vec<&String> = schema.required.iter().collect();

    // allOf: the first $ref is the parent, inline parts contribute properties
    for part in &schema.all_of {
        match part {
            SchemaOrRef::Ref { ref_path } => {
                let parent_name = definition_name(ref_path)?;
                if !all_definitions.contains_key(parent_name) {
                    return Err(ResolveError::RefTargetNotFound(ref_path.clone()));
                }
                if parent.is_none() {
                    parent = Some(naming.to_model_name(parent_name));
                }
            }
            SchemaOrRef::Schema(inline) => {
                properties.extend(inline.properties.iter());
                required.extend(inline.required.iter());
            }
        }
    }

    let mut model_properties = Vec::with_capacity(properties.len());
    let mut imports: Vec<String> = Vec::new();
    let mut add_import = |model: &str| {
        if model != classname {
            let import = naming.to_model_import(model);
            if !imports.contains(&import) {
                imports.push(import);
            }
        }
    };

    if let Some(parent) = &parent {
        add_import(parent);
    }

    for (base_name, property) in properties {
        let data_type = property_to_ir_type(naming, property)?;
        for model in data_type.referenced_models() {
            add_import(model);
        }
        model_properties.push(ModelProperty {
            name: naming.to_var_name(base_name),
            base_name: base_name.clone(),
            data_type,
            required: required.contains(&base_name),
            description: property.description().map(str::to_string),
            descriptor: property.clone(),
        });
    }

    log::debug!(
        "model shell `{}`: {} properties, {} imports",
        classname,
        model_properties.len(),
        imports.len()
    );

    Ok(CanonicalModel {
        name: name.to_string(),
        class_filename: naming.to_model_filename(name),
        classname,
        description: schema.description.clone(),
        parent,
        properties: model_properties,
        imports,
        model_json: None,
    })
}
