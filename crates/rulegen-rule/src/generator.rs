use rulegen_core::config::GeneratorConfig;
use rulegen_core::error::TransformError;
use rulegen_core::ir::{ArtifactKind, CanonicalModel, GenerationPass, OperationSet, RenderTarget};
use rulegen_core::naming::NamingPolicy;
use rulegen_core::parse::spec::SwaggerSpec;
use rulegen_core::{CodeGenerator, CodegenType, transform};

use crate::imports::ImportRefs;
use crate::model::normalize_model;
use crate::operations::normalize_operations;

/// Generator for rule client libraries.
pub struct RuleGenerator;

impl CodeGenerator for RuleGenerator {
    fn name(&self) -> &'static str {
        "rule"
    }

    fn tag(&self) -> CodegenType {
        CodegenType::Client
    }

    fn help(&self) -> &'static str {
        "Generates a rule client library."
    }

    fn generate(
        &self,
        spec: &SwaggerSpec,
        config: &GeneratorConfig,
    ) -> Result<GenerationPass, TransformError> {
        let naming = NamingPolicy::new(config);

        let models = spec
            .definitions
            .iter()
            .map(|(name, schema)| normalize_model(&naming, name, schema, &spec.definitions))
            .collect::<Result<Vec<_>, _>>()?;

        let mut operation_sets = transform::group_operations(&naming, spec)?;
        let mut refs = ImportRefs::default();
        for set in &mut operation_sets {
            normalize_operations(&naming, set, &mut refs)?;
        }

        let targets = render_targets(config, &models, &operation_sets);

        let mut additional_properties = config.additional_properties.clone();
        additional_properties.insert(
            "apiVersion".to_string(),
            serde_json::Value::String(config.api_version.clone()),
        );

        log::debug!(
            "rule pass: {} models, {} operation sets, {} refs",
            models.len(),
            operation_sets.len(),
            refs.len()
        );

        Ok(GenerationPass {
            models,
            operation_sets,
            refs: refs.into_entries(),
            targets,
            additional_properties,
        })
    }
}

fn render_targets(
    config: &GeneratorConfig,
    models: &[CanonicalModel],
    operation_sets: &[OperationSet],
) -> Vec<RenderTarget> {
    let mut targets = Vec::new();

    for model in models {
        for (template, extension) in &config.model_templates {
            targets.push(RenderTarget {
                kind: ArtifactKind::Model,
                name: model.name.clone(),
                template: template.clone(),
                path: config.model_file_path(&model.class_filename, extension),
            });
        }
    }

    for set in operation_sets {
        let Some(filename) = &set.api_filename else {
            continue;
        };
        for (template, extension) in &config.api_templates {
            targets.push(RenderTarget {
                kind: ArtifactKind::Api,
                name: set.classname.clone(),
                template: template.clone(),
                path: config.api_file_path(filename, extension),
            });
        }
    }

    targets
}
