use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported Swagger version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("malformed reference `{0}`")]
    MalformedReference(String),

    #[error("malformed import `{import}`: expected a `{package}/` prefix")]
    MalformedImport { import: String, package: String },

    #[error("reference target not found: {0}")]
    RefTargetNotFound(String),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("model `{name}`: {source}")]
    Model {
        name: String,
        #[source]
        source: ResolveError,
    },

    #[error("operation `{method} {path}`: {source}")]
    Operation {
        method: String,
        path: String,
        #[source]
        source: ResolveError,
    },

    #[error("operation set `{classname}`: {source}")]
    OperationSet {
        classname: String,
        #[source]
        source: ResolveError,
    },

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TransformError {
    /// The resolve failure underneath a contextual error, if any.
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        match self {
            TransformError::Model { source, .. }
            | TransformError::Operation { source, .. }
            | TransformError::OperationSet { source, .. } => Some(source),
            TransformError::Parse(_) | TransformError::Serialize(_) => None,
        }
    }
}
