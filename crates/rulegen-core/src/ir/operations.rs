use serde::Serialize;

use super::types::IrType;
use crate::parse::operation::ParameterLocation;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

/// How a request body is encoded by the generated client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Json,
    Form,
}

/// One media type an operation accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeEntry {
    pub media_type: String,
    /// Set during operation normalization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_kind: Option<BodyKind>,
}

impl ConsumeEntry {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            body_kind: None,
        }
    }
}

/// A resolved operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationParameter {
    /// Escaped variable name.
    pub name: String,
    pub base_name: String,
    pub location: ParameterLocation,
    pub data_type: IrType,
    pub required: bool,
    pub description: Option<String>,
}

/// A template-ready operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalOperation {
    pub nickname: String,
    pub http_method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub deprecated: bool,
    pub parameters: Vec<OperationParameter>,
    pub body_param: Option<OperationParameter>,
    pub return_type: Option<IrType>,
    /// Whether the source declared any request media types.
    pub has_consumes: bool,
    pub consumes: Vec<ConsumeEntry>,
    pub produces: Vec<String>,
}

/// Model import metadata for a generated API file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEntry {
    pub import_path: String,
    pub filename: String,
    pub classname: String,
}

/// The operations rendered into one API file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSet {
    pub classname: String,
    /// Set during operation normalization.
    pub api_filename: Option<String>,
    pub operations: Vec<CanonicalOperation>,
    /// Raw model import paths, e.g. `model/pet`.
    pub imports: Vec<String>,
    /// Resolved form of `imports`, in the same order.
    pub import_entries: Vec<ImportEntry>,
}
