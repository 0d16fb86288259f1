pub mod config;
pub mod error;
pub mod ir;
pub mod naming;
pub mod parse;
pub mod transform;

use serde::Serialize;

/// What kind of artifact a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodegenType {
    Client,
}

/// Trait for generators that turn a parsed spec into a template-ready pass.
pub trait CodeGenerator {
    /// Friendly name used to select the generator.
    fn name(&self) -> &'static str;

    fn tag(&self) -> CodegenType;

    /// Human-friendly help text.
    fn help(&self) -> &'static str;

    fn generate(
        &self,
        spec: &parse::spec::SwaggerSpec,
        config: &config::GeneratorConfig,
    ) -> Result<ir::GenerationPass, error::TransformError>;
}
