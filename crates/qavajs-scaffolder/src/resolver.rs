//! Resolution of selected module names into package identifiers and require paths

use crate::catalog::{self, ModuleDefinition};
use crate::error::ScaffoldError;

/// Resolve each selected name to its catalog entry, preserving input order
pub fn resolve<'a, S: AsRef<str>>(
    selected: &[S],
    partition: &'a [ModuleDefinition],
) -> Result<Vec<&'a ModuleDefinition>, ScaffoldError> {
    selected
        .iter()
        .map(|name| {
            let name = name.as_ref();
            catalog::find(partition, name).ok_or_else(|| ScaffoldError::not_found(name))
        })
        .collect()
}

/// Map selected names to `packageName` or `packageName@version`
pub fn resolve_packages<S: AsRef<str>>(
    selected: &[S],
    partition: &[ModuleDefinition],
) -> Result<Vec<String>, ScaffoldError> {
    Ok(resolve(selected, partition)?
        .into_iter()
        .map(ModuleDefinition::package_identifier)
        .collect())
}

/// Map selected names to `node_modules/<packageName>/index.js`
pub fn resolve_require_paths<S: AsRef<str>>(
    selected: &[S],
    partition: &[ModuleDefinition],
) -> Result<Vec<String>, ScaffoldError> {
    Ok(resolve(selected, partition)?
        .into_iter()
        .map(ModuleDefinition::require_path)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FORMATS, STEPS};

    #[test]
    fn test_resolve_packages_in_input_order() {
        let packages = resolve_packages(&["sql", "wdio"], STEPS).unwrap();
        assert_eq!(packages, vec!["@qavajs/steps-sql@2", "@qavajs/steps-wdio@2"]);
    }

    #[test]
    fn test_resolve_packages_without_version() {
        let packages = resolve_packages(&["console", "html"], FORMATS).unwrap();
        assert_eq!(
            packages,
            vec!["@qavajs/console-formatter", "@qavajs/html-formatter"]
        );
    }

    #[test]
    fn test_resolve_empty_selection() {
        let none: [&str; 0] = [];
        assert!(resolve_packages(&none, STEPS).unwrap().is_empty());
        assert!(resolve_require_paths(&none, STEPS).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_module_is_named_in_error() {
        let err = resolve_packages(&["wdio", "notFound"], STEPS).unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::ModuleNotFound {
                module: "notFound".to_string()
            }
        );
    }

    #[test]
    fn test_formatter_name_not_found_among_steps() {
        let err = resolve_require_paths(&["console".to_string()], STEPS).unwrap_err();
        assert_eq!(err.to_string(), "console module is not found");
    }

    #[test]
    fn test_resolve_require_paths() {
        let paths = resolve_require_paths(&["wdio", "sql"], STEPS).unwrap();
        assert_eq!(
            paths,
            vec![
                "node_modules/@qavajs/steps-wdio/index.js",
                "node_modules/@qavajs/steps-sql/index.js"
            ]
        );
    }
}
