use indexmap::IndexMap;

use crate::error::{ResolveError, TransformError};
use crate::ir::{CanonicalOperation, ConsumeEntry, HttpMethod, IrType, OperationParameter, OperationSet};
use crate::naming::{NamingPolicy, route_to_name};
use crate::parse::operation::{
    Operation, Parameter, ParameterLocation, ParameterOrRef, PathItem, Response, ResponseOrRef,
};
use crate::parse::spec::SwaggerSpec;

use super::schema_resolver::property_to_ir_type;

const DEFAULT_TAG: &str = "default";

#[derive(Default)]
struct TagGroup {
    operations: Vec<CanonicalOperation>,
    imports: Vec<String>,
}

/// Group every operation of the document into one operation set per tag, sorted
/// by tag. Operations without tags land in `default`; an operation with
/// several tags appears in each of their sets. Consume entries are left
/// unclassified and `api_filename` unset.
pub fn group_operations(
    naming: &NamingPolicy<'_>,
    spec: &SwaggerSpec,
) -> Result<Vec<OperationSet>, TransformError> {
    let mut groups: IndexMap<String, TagGroup> = IndexMap::new();

    for (path, item) in &spec.paths {
        for (method, op) in path_operations(item) {
            let (operation, imports) = build_operation(naming, spec, method, path, item, op)
                .map_err(|source| TransformError::Operation {
                    method: method.as_str().to_string(),
                    path: path.clone(),
                    source,
                })?;

            let tags = if op.tags.is_empty() {
                vec![DEFAULT_TAG.to_string()]
            } else {
                op.tags.clone()
            };
            for tag in tags {
                let group = groups.entry(tag).or_default();
                for import in &imports {
                    if !group.imports.contains(import) {
                        group.imports.push(import.clone());
                    }
                }
                group.operations.push(operation.clone());
            }
        }
    }

    groups.sort_keys();

    Ok(groups
        .into_iter()
        .map(|(tag, group)| {
            log::debug!(
                "operation set for tag `{tag}`: {} operations",
                group.operations.len()
            );
            OperationSet {
                classname: naming.to_api_name(&tag),
                api_filename: None,
                operations: group.operations,
                imports: group.imports,
                import_entries: Vec::new(),
            }
        })
        .collect())
}

fn path_operations(item: &PathItem) -> Vec<(HttpMethod, &Operation)> {
    let mut ops = Vec::new();
    macro_rules! add_op {
        ($method:expr, $op:expr) => {
            if let Some(ref op) = $op {
                ops.push(($method, op));
            }
        };
    }
    add_op!(HttpMethod::Get, item.get);
    add_op!(HttpMethod::Post, item.post);
    add_op!(HttpMethod::Put, item.put);
    add_op!(HttpMethod::Delete, item.delete);
    add_op!(HttpMethod::Patch, item.patch);
    add_op!(HttpMethod::Options, item.options);
    add_op!(HttpMethod::Head, item.head);
    ops
}

fn build_operation(
    naming: &NamingPolicy<'_>,
    spec: &SwaggerSpec,
    method: HttpMethod,
    path: &str,
    item: &PathItem,
    op: &Operation,
) -> Result<(CanonicalOperation, Vec<String>), ResolveError> {
    let nickname = op
        .operation_id
        .clone()
        .unwrap_or_else(|| route_to_name(method.as_str(), path));

    let path_params = resolve_parameters(spec, &item.parameters)?;
    let op_params = resolve_parameters(spec, &op.parameters)?;

    // Operation-level parameters override path-level ones with the same name and location
    let inherited = path_params.iter().filter(|p| {
        !op_params
            .iter()
            .any(|o| o.name == p.name && o.location == p.location)
    });
    let parameters = inherited
        .chain(op_params.iter())
        .map(|p| build_parameter(naming, p))
        .collect::<Result<Vec<_>, _>>()?;
    let body_param = parameters
        .iter()
        .find(|p| p.location == ParameterLocation::Body)
        .cloned();

    let return_type = success_response(spec, &op.responses)?
        .and_then(|r| r.schema.as_ref())
        .map(|schema| property_to_ir_type(naming, schema))
        .transpose()?;

    let mut imports: Vec<String> = Vec::new();
    let referenced = parameters
        .iter()
        .map(|p| &p.data_type)
        .chain(return_type.as_ref());
    for ir_type in referenced {
        collect_imports(naming, ir_type, &mut imports);
    }

    let consumes = if op.consumes.is_empty() {
        &spec.consumes
    } else {
        &op.consumes
    };
    let produces = if op.produces.is_empty() {
        &spec.produces
    } else {
        &op.produces
    };

    let operation = CanonicalOperation {
        nickname,
        http_method: method,
        path: path.to_string(),
        summary: op.summary.clone(),
        notes: op.description.clone(),
        tags: op.tags.clone(),
        deprecated: op.deprecated.unwrap_or(false),
        parameters,
        body_param,
        return_type,
        has_consumes: !consumes.is_empty(),
        consumes: consumes.iter().map(ConsumeEntry::new).collect(),
        produces: produces.clone(),
    };
    Ok((operation, imports))
}

fn build_parameter(
    naming: &NamingPolicy<'_>,
    param: &Parameter,
) -> Result<OperationParameter, ResolveError> {
    Ok(OperationParameter {
        name: naming.to_var_name(&param.name),
        base_name: param.name.clone(),
        location: param.location,
        data_type: property_to_ir_type(naming, &param.as_property())?,
        required: param.required || param.location == ParameterLocation::Path,
        description: param.description.clone(),
    })
}

fn resolve_parameters<'a>(
    spec: &'a SwaggerSpec,
    params: &'a [ParameterOrRef],
) -> Result<Vec<&'a Parameter>, ResolveError> {
    params.iter().map(|p| spec.resolve_parameter(p)).collect()
}

/// First 2xx response, falling back to `default`.
fn success_response<'a>(
    spec: &'a SwaggerSpec,
    responses: &'a IndexMap<String, ResponseOrRef>,
) -> Result<Option<&'a Response>, ResolveError> {
    responses
        .iter()
        .find(|(status, _)| status.starts_with('2'))
        .map(|(_, r)| r)
        .or_else(|| responses.get("default"))
        .map(|r| spec.resolve_response(r))
        .transpose()
}

fn collect_imports(naming: &NamingPolicy<'_>, ir_type: &IrType, imports: &mut Vec<String>) {
    for model in ir_type.referenced_models() {
        let import = naming.to_model_import(model);
        if !imports.contains(&import) {
            imports.push(import);
        }
    }
}
