use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ParseError;

/// Words that cannot be used as identifiers in generated TypeScript.
pub const TYPESCRIPT_RESERVED_WORDS: &[&str] = &[
    "abstract",
    "await",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "formParams",
    "function",
    "goto",
    "headerParams",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "queryParameters",
    "requestOptions",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "transient",
    "true",
    "try",
    "typeof",
    "useFormData",
    "var",
    "varLocalDeferred",
    "varLocalPath",
    "void",
    "volatile",
    "while",
    "with",
    "yield",
];

/// Generator settings supplied by the invoking tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub output_folder: String,
    pub source_folder: String,
    pub api_package: String,
    pub model_package: String,
    pub api_version: String,
    /// Where the renderer looks up templates.
    pub template_dir: String,
    /// Template name → output file extension, rendered once per model.
    pub model_templates: IndexMap<String, String>,
    /// Template name → output file extension, rendered once per operation set.
    pub api_templates: IndexMap<String, String>,
    pub reserved_words: BTreeSet<String>,
    /// Extra values handed to every template.
    pub additional_properties: IndexMap<String, serde_json::Value>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_folder: "generated-code/rule".to_string(),
            source_folder: "src".to_string(),
            api_package: "validator".to_string(),
            model_package: "model".to_string(),
            api_version: "1.0.0".to_string(),
            template_dir: "rule".to_string(),
            model_templates: IndexMap::from([("model.mustache".to_string(), ".ts".to_string())]),
            api_templates: IndexMap::from([("api.mustache".to_string(), ".ts".to_string())]),
            reserved_words: TYPESCRIPT_RESERVED_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            additional_properties: IndexMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from YAML. Missing keys take their defaults.
    pub fn from_yaml(input: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(input)?)
    }

    /// Directory that model files are written under.
    pub fn model_file_folder(&self) -> String {
        self.package_folder(&self.model_package)
    }

    /// Directory that API files are written under.
    pub fn api_file_folder(&self) -> String {
        self.package_folder(&self.api_package)
    }

    pub fn model_file_path(&self, filename: &str, extension: &str) -> String {
        format!("{}/{}{}", self.model_file_folder(), filename, extension)
    }

    pub fn api_file_path(&self, filename: &str, extension: &str) -> String {
        format!("{}/{}{}", self.api_file_folder(), filename, extension)
    }

    fn package_folder(&self, package: &str) -> String {
        format!(
            "{}/{}/{}",
            self.output_folder,
            self.source_folder,
            package.replace('.', "/")
        )
    }
}
