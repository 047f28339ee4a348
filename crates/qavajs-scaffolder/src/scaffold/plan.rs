//! Side-effect-free planning of a scaffold run
//!
//! Every named failure (unknown module, conflicting drivers) surfaces here,
//! before the first file operation.

use crate::answers::{Answers, BrowserDriver, ModuleSystem};
use crate::catalog::{self, ModuleDefinition, FORMATS, MEMORY_STEPS, STEPS};
use crate::filesystem::FsOperation;
use crate::resolver;
use crate::templates::{self, builtin, ConfigParams, FormatEntry};
use anyhow::Result;
use std::path::PathBuf;

/// Fixed output directories, created on every run
pub const PROJECT_DIRS: [&str; 4] = ["features", "memory", "report", "step_definition"];

/// Everything a run will do, computed from the answers alone
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub module_system: ModuleSystem,
    pub driver: Option<BrowserDriver>,
    pub includes_api: bool,
    /// Require/import list written into the main config
    pub require_paths: Vec<String>,
    /// Packages handed to the package manager, in install order
    pub install_list: Vec<String>,
    /// File operations, in the order they are applied
    pub operations: Vec<FsOperation>,
}

impl ScaffoldPlan {
    pub fn new(answers: &Answers, package_manager: &str) -> Result<Self> {
        let module_system = answers.module_system;
        let ext = module_system.extension();

        let step_packages = resolver::resolve_packages(&answers.steps, STEPS)?;
        let format_packages = resolver::resolve_packages(&answers.formats, FORMATS)?;
        let driver = answers.browser_driver()?;
        let includes_api = answers.includes_api();

        let mut require_paths = vec![MEMORY_STEPS.require_path()];
        require_paths.extend(resolver::resolve_require_paths(&answers.steps, STEPS)?);
        require_paths.push(module_system.step_definition_glob());

        // Config lists formatters in catalog order, not selection order
        let formats: Vec<FormatEntry> = FORMATS
            .iter()
            .filter(|def| answers.formats.iter().any(|name| name == def.module))
            .map(FormatEntry::from)
            .collect();

        let config = templates::render_config(&ConfigParams {
            module_system,
            steps: require_paths.clone(),
            formats,
            driver,
        })?;

        let mut operations = vec![
            FsOperation::write_file(".gitignore", builtin::GITIGNORE),
            FsOperation::write_file("package.json", builtin::PACKAGE_JSON),
        ];
        if module_system.is_typescript() {
            operations.push(FsOperation::write_file("tsconfig.json", builtin::TSCONFIG));
        }
        operations.extend(PROJECT_DIRS.iter().map(|dir| FsOperation::create_dir(*dir)));

        if let Some(driver) = driver {
            operations.push(FsOperation::write_file(
                "features/qavajs.feature",
                templates::sample_feature(),
            ));
            operations.push(FsOperation::create_dir("page_object"));
            operations.push(FsOperation::write_file(
                format!("page_object/index.{}", ext),
                templates::render_page_object(module_system, driver),
            ));
        }

        if includes_api {
            operations.push(FsOperation::write_file(
                "features/qavajsApi.feature",
                templates::sample_api_feature(),
            ));
        }

        operations.push(FsOperation::write_file(module_system.config_file(), config));
        operations.push(FsOperation::write_file(
            format!("memory/index.{}", ext),
            templates::render_memory(module_system),
        ));
        operations.push(FsOperation::write_file(
            "README.MD",
            templates::render_readme(module_system, package_manager),
        ));

        let mut install_list = identifiers(catalog::CORE_DEPENDENCIES);
        if module_system.is_typescript() {
            install_list.extend(identifiers(catalog::TYPESCRIPT_DEPENDENCIES));
        }
        install_list.push(MEMORY_STEPS.package_identifier());
        install_list.extend(step_packages);
        install_list.extend(format_packages);

        tracing::debug!(
            operations = operations.len(),
            ?install_list,
            "scaffold plan ready"
        );

        Ok(Self {
            module_system,
            driver,
            includes_api,
            require_paths,
            install_list,
            operations,
        })
    }

    pub fn config_file(&self) -> String {
        self.module_system.config_file()
    }

    /// Paths of the files this plan writes, in write order
    pub fn files(&self) -> Vec<PathBuf> {
        self.operations
            .iter()
            .filter_map(|op| match op {
                FsOperation::WriteFile { path, .. } => Some(path.clone()),
                FsOperation::CreateDir(_) => None,
            })
            .collect()
    }
}

fn identifiers(partition: &[ModuleDefinition]) -> Vec<String> {
    partition.iter().map(ModuleDefinition::package_identifier).collect()
}
