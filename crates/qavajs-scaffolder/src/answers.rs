//! User answers and the flags derived from them

use crate::error::ScaffoldError;
use std::fmt;
use std::str::FromStr;

/// Code convention used for every generated source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleSystem {
    #[default]
    CommonJs,
    EsModules,
    TypeScript,
}

impl ModuleSystem {
    pub const ALL: [ModuleSystem; 3] = [
        ModuleSystem::CommonJs,
        ModuleSystem::EsModules,
        ModuleSystem::TypeScript,
    ];

    /// Label offered in the module-system prompt
    pub fn label(&self) -> &'static str {
        match self {
            ModuleSystem::CommonJs => "CommonJS",
            ModuleSystem::EsModules => "ES Modules",
            ModuleSystem::TypeScript => "Typescript",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, ModuleSystem::TypeScript)
    }

    /// Extension of generated source files
    pub fn extension(&self) -> &'static str {
        if self.is_typescript() {
            "ts"
        } else {
            "js"
        }
    }

    /// Name of the main test-runner config file
    pub fn config_file(&self) -> String {
        format!("config.{}", self.extension())
    }

    /// Glob for project-specific step definitions
    pub fn step_definition_glob(&self) -> String {
        format!("step_definition/*.{}", self.extension())
    }
}

impl fmt::Display for ModuleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ModuleSystem {
    type Err = ScaffoldError;

    /// Accepts prompt labels as well as short CLI spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "commonjs" | "cjs" => Ok(ModuleSystem::CommonJs),
            "es modules" | "esm" | "es" | "module" => Ok(ModuleSystem::EsModules),
            "typescript" | "ts" => Ok(ModuleSystem::TypeScript),
            _ => Err(ScaffoldError::UnknownModuleSystem(s.to_string())),
        }
    }
}

/// Competing browser-driver step modules; at most one per project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserDriver {
    Playwright,
    Wdio,
}

impl BrowserDriver {
    /// Step-module display name in the catalog
    pub fn module(&self) -> &'static str {
        match self {
            BrowserDriver::Playwright => "playwright",
            BrowserDriver::Wdio => "wdio",
        }
    }

    /// Module that exports the `locator` helper used by page objects
    pub fn locator_module(&self) -> &'static str {
        match self {
            BrowserDriver::Playwright => "@qavajs/steps-playwright/po",
            BrowserDriver::Wdio => "@qavajs/steps-wdio/po",
        }
    }

    /// `browserName` capability written into the main config
    pub fn browser_name(&self) -> &'static str {
        match self {
            BrowserDriver::Playwright => "chromium",
            BrowserDriver::Wdio => "chrome",
        }
    }
}

/// Step module that triggers the API sample feature
pub const API_MODULE: &str = "api";

/// Choices collected once per run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answers {
    pub module_system: ModuleSystem,
    pub steps: Vec<String>,
    pub formats: Vec<String>,
}

impl Answers {
    pub fn new(
        module_system: ModuleSystem,
        steps: impl IntoIterator<Item = impl Into<String>>,
        formats: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            module_system,
            steps: steps.into_iter().map(Into::into).collect(),
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_step(&self, module: &str) -> bool {
        self.steps.iter().any(|s| s == module)
    }

    /// Selected browser driver, failing when both are selected
    pub fn browser_driver(&self) -> Result<Option<BrowserDriver>, ScaffoldError> {
        let playwright = self.has_step(BrowserDriver::Playwright.module());
        let wdio = self.has_step(BrowserDriver::Wdio.module());

        match (playwright, wdio) {
            (true, true) => Err(ScaffoldError::ConflictingDrivers),
            (true, false) => Ok(Some(BrowserDriver::Playwright)),
            (false, true) => Ok(Some(BrowserDriver::Wdio)),
            (false, false) => Ok(None),
        }
    }

    pub fn includes_api(&self) -> bool {
        self.has_step(API_MODULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prompt_labels() {
        for system in ModuleSystem::ALL {
            assert_eq!(system.label().parse::<ModuleSystem>().unwrap(), system);
        }
    }

    #[test]
    fn test_parse_short_spellings() {
        assert_eq!("cjs".parse::<ModuleSystem>().unwrap(), ModuleSystem::CommonJs);
        assert_eq!("ESM".parse::<ModuleSystem>().unwrap(), ModuleSystem::EsModules);
        assert_eq!("ts".parse::<ModuleSystem>().unwrap(), ModuleSystem::TypeScript);
    }

    #[test]
    fn test_parse_unknown_module_system() {
        let err = "amd".parse::<ModuleSystem>().unwrap_err();
        assert_eq!(err, ScaffoldError::UnknownModuleSystem("amd".to_string()));
    }

    #[test]
    fn test_typescript_file_names() {
        assert_eq!(ModuleSystem::TypeScript.config_file(), "config.ts");
        assert_eq!(
            ModuleSystem::TypeScript.step_definition_glob(),
            "step_definition/*.ts"
        );
        assert_eq!(ModuleSystem::EsModules.config_file(), "config.js");
    }

    #[test]
    fn test_single_driver_detected() {
        let answers = Answers::new(ModuleSystem::CommonJs, ["sql", "wdio"], Vec::<String>::new());
        assert_eq!(answers.browser_driver(), Ok(Some(BrowserDriver::Wdio)));
        assert!(!answers.includes_api());
    }

    #[test]
    fn test_both_drivers_conflict() {
        let answers = Answers::new(
            ModuleSystem::CommonJs,
            ["wdio", "api", "playwright"],
            Vec::<String>::new(),
        );
        assert_eq!(answers.browser_driver(), Err(ScaffoldError::ConflictingDrivers));
    }

    #[test]
    fn test_no_driver() {
        let answers = Answers::new(ModuleSystem::CommonJs, ["api"], Vec::<String>::new());
        assert_eq!(answers.browser_driver(), Ok(None));
        assert!(answers.includes_api());
    }
}
