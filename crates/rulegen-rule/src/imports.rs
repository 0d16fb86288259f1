use heck::ToPascalCase;
use indexmap::IndexMap;
use rulegen_core::error::ResolveError;
use rulegen_core::ir::ImportEntry;

/// Type name of the model behind an import path: `model/pet` → `Pet`.
pub fn model_name_from_filename(
    import_path: &str,
    model_package: &str,
) -> Result<String, ResolveError> {
    import_path
        .strip_prefix(model_package)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|name| !name.is_empty())
        .map(|name| name.to_pascal_case())
        .ok_or_else(|| ResolveError::MalformedImport {
            import: import_path.to_string(),
            package: model_package.to_string(),
        })
}

/// Resolve raw import paths into import entries, preserving order.
pub fn resolve_imports(
    imports: &[String],
    model_package: &str,
) -> Result<Vec<ImportEntry>, ResolveError> {
    imports
        .iter()
        .map(|import| {
            let filename = import.clone();
            let classname = model_name_from_filename(&filename, model_package)?;
            Ok(ImportEntry {
                import_path: import.clone(),
                filename,
                classname,
            })
        })
        .collect()
}

/// Import entries gathered across every operation set of one pass.
/// The first entry recorded for an import path wins.
#[derive(Debug, Default)]
pub struct ImportRefs {
    entries: IndexMap<String, ImportEntry>,
}

impl ImportRefs {
    pub fn extend(&mut self, entries: &[ImportEntry]) {
        for entry in entries {
            self.entries
                .entry(entry.import_path.clone())
                .or_insert_with(|| entry.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ImportEntry> {
        self.entries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_from_filename() {
        assert_eq!(model_name_from_filename("model/pet", "model").unwrap(), "Pet");
        assert_eq!(
            model_name_from_filename("model/petStatus", "model").unwrap(),
            "PetStatus"
        );
        assert_eq!(
            model_name_from_filename("io.rules/order", "io.rules").unwrap(),
            "Order"
        );
    }

    #[test]
    fn test_model_name_requires_package_prefix() {
        for bad in ["pet", "models/pet", "modelpet", "model/"] {
            assert_eq!(
                model_name_from_filename(bad, "model"),
                Err(ResolveError::MalformedImport {
                    import: bad.to_string(),
                    package: "model".to_string(),
                }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_imports_end_to_end() {
        let imports = vec!["model/pet".to_string(), "model/order".to_string()];
        let entries = resolve_imports(&imports, "model").unwrap();
        assert_eq!(
            entries,
            vec![
                ImportEntry {
                    import_path: "model/pet".to_string(),
                    filename: "model/pet".to_string(),
                    classname: "Pet".to_string(),
                },
                ImportEntry {
                    import_path: "model/order".to_string(),
                    filename: "model/order".to_string(),
                    classname: "Order".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_import_refs_dedupes_in_first_seen_order() {
        let pet = resolve_imports(&["model/pet".to_string()], "model").unwrap();
        let store =
            resolve_imports(&["model/order".to_string(), "model/pet".to_string()], "model")
                .unwrap();

        let mut refs = ImportRefs::default();
        assert!(refs.is_empty());
        refs.extend(&pet);
        refs.extend(&store);
        assert_eq!(refs.len(), 2);

        let classnames: Vec<String> = refs.into_entries().into_iter().map(|e| e.classname).collect();
        assert_eq!(classnames, vec!["Pet", "Order"]);
    }
}
