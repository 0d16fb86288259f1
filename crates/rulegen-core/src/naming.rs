use heck::{ToLowerCamelCase, ToPascalCase};

use crate::config::GeneratorConfig;

/// Derive a camelCase operation name from HTTP method + path, for
/// operations without an `operationId`.
///
/// - `GET /pets` → `listPets`
/// - `GET /pets/{petId}` → `getPet`
/// - `POST /pets/{petId}/uploadImage` → `createPetsUploadImage`
pub fn route_to_name(method: &str, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for seg in path.split('/').filter(|s| !s.is_empty()) {
        if seg.starts_with('{') && seg.ends_with('}') {
            ends_with_param = true;
        } else {
            resource_parts.push(seg);
            ends_with_param = false;
        }
    }

    let method_upper = method.to_uppercase();
    let prefix = match method_upper.as_str() {
        "GET" if ends_with_param => "get",
        "GET" => "list",
        "POST" => "create",
        "PUT" => "update",
        "DELETE" => "delete",
        "PATCH" => "patch",
        "OPTIONS" => "options",
        "HEAD" => "head",
        _ => return method.to_lowercase(),
    };

    let mut pascal_parts = String::new();
    for (i, part) in resource_parts.iter().enumerate() {
        let is_last = i == resource_parts.len() - 1;
        let word = if is_last && ends_with_param {
            singularize(part)
        } else {
            part.to_string()
        };
        pascal_parts.push_str(&word.to_pascal_case());
    }

    format!("{prefix}{pascal_parts}")
}

/// English plural of a path segment back to its singular: `categories` →
/// `category`, `boxes` → `box`, `pets` → `pet`.
fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies").filter(|stem| !stem.is_empty()) {
        return format!("{stem}y");
    }
    if ["ses", "xes", "zes"].iter().any(|suffix| word.ends_with(suffix)) {
        return word[..word.len() - 2].to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() && !stem.ends_with('s') => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Join the alphanumeric runs of `name` with `_` so heck sees each run as a
/// word. Yields `unnamed` when nothing is left.
fn sanitize_identifier(name: &str) -> String {
    let words: Vec<&str> = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();
    if words.is_empty() {
        "unnamed".to_string()
    } else {
        words.join("_")
    }
}

/// Maps logical names to the identifiers, file names and import paths used
/// by generated code. Deterministic for a given config.
#[derive(Debug, Clone, Copy)]
pub struct NamingPolicy<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> NamingPolicy<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn model_package(&self) -> &'a str {
        &self.config.model_package
    }

    pub fn api_package(&self) -> &'a str {
        &self.config.api_package
    }

    /// Reserved words match case-insensitively.
    pub fn is_reserved_word(&self, name: &str) -> bool {
        self.config
            .reserved_words
            .iter()
            .any(|w| w.eq_ignore_ascii_case(name))
    }

    /// `class` → `_class`; anything not reserved is returned unchanged.
    pub fn escape_reserved_word(&self, name: &str) -> String {
        if self.is_reserved_word(name) {
            format!("_{name}")
        } else {
            name.to_string()
        }
    }

    /// Variable name for a property or parameter.
    pub fn to_var_name(&self, name: &str) -> String {
        let camel = sanitize_identifier(name).to_lower_camel_case();
        self.escape_reserved_word(&camel)
    }

    /// PascalCase type name for a model.
    pub fn to_model_name(&self, name: &str) -> String {
        let sanitized = sanitize_identifier(name);
        let starts_with_digit = sanitized.starts_with(|c: char| c.is_ascii_digit());
        if self.is_reserved_word(&sanitized) || starts_with_digit {
            let renamed = format!("model_{sanitized}").to_pascal_case();
            log::warn!("model name `{name}` cannot be used as a type name, renamed to `{renamed}`");
            return renamed;
        }
        sanitized.to_pascal_case()
    }

    /// `Pet` → `pet`, `PetStatus` → `petStatus`.
    pub fn to_model_filename(&self, name: &str) -> String {
        self.to_model_name(name).to_lower_camel_case()
    }

    /// `Pet` → `model/pet`.
    pub fn to_model_import(&self, name: &str) -> String {
        format!("{}/{}", self.model_package(), self.to_model_filename(name))
    }

    /// Classname for the operation set of a tag: `pet` → `PetApi`.
    /// Names already ending in `Api` keep a single suffix.
    pub fn to_api_name(&self, name: &str) -> String {
        if name.is_empty() {
            return "DefaultApi".to_string();
        }
        let pascal = sanitize_identifier(name).to_pascal_case();
        if pascal.ends_with("Api") {
            pascal
        } else {
            format!("{pascal}Api")
        }
    }

    /// `PetApi` → `petApi`.
    pub fn to_api_filename(&self, name: &str) -> String {
        self.to_api_name(name).to_lower_camel_case()
    }

    /// `PetApi` → `validator/petApi`.
    pub fn to_api_import(&self, name: &str) -> String {
        format!("{}/{}", self.api_package(), self.to_api_filename(name))
    }
}
