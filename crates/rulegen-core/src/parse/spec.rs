use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::{Parameter, ParameterOrRef, PathItem, Response, ResponseOrRef};
use super::schema::Schema;
use crate::error::ResolveError;

const PARAMETERS_PREFIX: &str = "#/parameters/";
const RESPONSES_PREFIX: &str = "#/responses/";

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Top-level Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerSpec {
    pub swagger: String,

    pub info: Info,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Document-wide request media types, used when an operation declares none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Schema>,

    /// Parameters shared between operations, keyed by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,

    /// Responses shared between operations, keyed by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, Response>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl SwaggerSpec {
    /// Follow a `#/parameters/...` reference; inline parameters are returned as is.
    pub fn resolve_parameter<'a>(
        &'a self,
        param: &'a ParameterOrRef,
    ) -> Result<&'a Parameter, ResolveError> {
        match param {
            ParameterOrRef::Parameter(p) => Ok(p),
            ParameterOrRef::Ref { ref_path } => {
                lookup_shared(&self.parameters, PARAMETERS_PREFIX, ref_path)
            }
        }
    }

    /// Follow a `#/responses/...` reference; inline responses are returned as is.
    pub fn resolve_response<'a>(
        &'a self,
        response: &'a ResponseOrRef,
    ) -> Result<&'a Response, ResolveError> {
        match response {
            ResponseOrRef::Response(r) => Ok(r),
            ResponseOrRef::Ref { ref_path } => {
                lookup_shared(&self.responses, RESPONSES_PREFIX, ref_path)
            }
        }
    }
}

fn lookup_shared<'a, T>(
    section: &'a IndexMap<String, T>,
    prefix: &str,
    ref_path: &str,
) -> Result<&'a T, ResolveError> {
    let name = ref_path
        .strip_prefix(prefix)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ResolveError::MalformedReference(ref_path.to_string()))?;
    section
        .get(name)
        .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.to_string()))
}
