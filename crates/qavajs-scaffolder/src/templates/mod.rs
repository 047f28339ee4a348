//! Rendering of generated project files
//!
//! Each function returns the final text of one artifact for the chosen
//! module system. Templates live in [`builtin`]; substitution in [`render`].

pub mod builtin;
pub mod render;

use crate::answers::{BrowserDriver, ModuleSystem};
use crate::catalog::ModuleDefinition;
use anyhow::{Context, Result};
use serde::Serialize;

pub use render::{collapse_blank_lines, RenderContext};

/// Documentation link written into the README
pub const DOCS_URL: &str = "https://qavajs.github.io/docs/intro";

/// One entry of the config `format` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormatEntry {
    /// Formatter writing to stdout
    Package(String),
    /// Formatter with a report file: `[package, out]`
    WithOutput(String, String),
}

impl From<&ModuleDefinition> for FormatEntry {
    fn from(def: &ModuleDefinition) -> Self {
        match def.out {
            Some(out) => FormatEntry::WithOutput(def.package_name.to_string(), out.to_string()),
            None => FormatEntry::Package(def.package_name.to_string()),
        }
    }
}

/// Inputs of the main test-runner config
#[derive(Debug, Clone)]
pub struct ConfigParams {
    pub module_system: ModuleSystem,
    /// Require/import paths, already including the memory module and step-definition glob
    pub steps: Vec<String>,
    pub formats: Vec<FormatEntry>,
    pub driver: Option<BrowserDriver>,
}

/// Import specifier of a local directory module
fn local_import(module_system: ModuleSystem, dir: &str) -> String {
    match module_system {
        ModuleSystem::EsModules => format!("./{}/index.js", dir),
        _ => format!("./{}", dir),
    }
}

fn page_object_import(module_system: ModuleSystem) -> String {
    match module_system {
        ModuleSystem::CommonJs => r#"const App = require("./page_object");"#.to_string(),
        _ => format!(
            r#"import App from "{}";"#,
            local_import(module_system, "page_object")
        ),
    }
}

/// `pageObject` instance and browser capabilities, indented to the config body
fn page_object_fields(driver: BrowserDriver, indent: &str) -> String {
    [
        "pageObject: new App(),".to_string(),
        "browser: {".to_string(),
        "  capabilities: {".to_string(),
        format!("    browserName: \"{}\"", driver.browser_name()),
        "  }".to_string(),
        "},".to_string(),
    ]
    .iter()
    .map(|line| format!("{}{}", indent, line))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Render `config.js` / `config.ts`
pub fn render_config(params: &ConfigParams) -> Result<String> {
    let steps = serde_json::to_string(&params.steps).context("Failed to serialize step paths")?;
    let format =
        serde_json::to_string(&params.formats).context("Failed to serialize format list")?;

    let (template, indent) = match params.module_system {
        ModuleSystem::CommonJs => (builtin::CONFIG_COMMONJS, "    "),
        _ => (builtin::CONFIG_MODULE, "  "),
    };

    let loader_key = match params.module_system {
        ModuleSystem::EsModules => "import",
        _ => "require",
    };

    let mut ctx = RenderContext::new()
        .with_variable("steps", steps)
        .with_variable("format", format)
        .with_variable("loader_key", loader_key)
        .with_variable("memory_import", local_import(params.module_system, "memory"));

    ctx = match params.driver {
        Some(driver) => ctx
            .with_variable("page_object_import", page_object_import(params.module_system))
            .with_variable("page_object_fields", page_object_fields(driver, indent)),
        None => ctx
            .with_variable("page_object_import", "")
            .with_variable("page_object_fields", ""),
    };

    Ok(collapse_blank_lines(&ctx.render(template)))
}

/// Render `page_object/index.<ext>` bound to the driver's locator helper
pub fn render_page_object(module_system: ModuleSystem, driver: BrowserDriver) -> String {
    let template = match module_system {
        ModuleSystem::CommonJs => builtin::PAGE_OBJECT_COMMONJS,
        _ => builtin::PAGE_OBJECT_MODULE,
    };
    let ctx = RenderContext::new().with_variable("locator_module", driver.locator_module());
    collapse_blank_lines(&ctx.render(template))
}

/// Render `memory/index.<ext>`
pub fn render_memory(module_system: ModuleSystem) -> String {
    match module_system {
        ModuleSystem::CommonJs => builtin::MEMORY_COMMONJS.to_string(),
        _ => builtin::MEMORY_MODULE.to_string(),
    }
}

/// Render `README.MD`
pub fn render_readme(module_system: ModuleSystem, package_manager: &str) -> String {
    let ctx = RenderContext::new()
        .with_variable("docs_url", DOCS_URL)
        .with_variable("package_manager", package_manager)
        .with_variable("config_file", module_system.config_file());
    collapse_blank_lines(&ctx.render(builtin::README))
}

/// Browser sample feature
pub fn sample_feature() -> String {
    collapse_blank_lines(builtin::FEATURE)
}

/// API sample feature
pub fn sample_api_feature() -> String {
    collapse_blank_lines(builtin::FEATURE_API)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find, FORMATS};

    fn lines(text: &[&str]) -> String {
        text.join("\n")
    }

    fn memory_only(module_system: ModuleSystem) -> ConfigParams {
        ConfigParams {
            module_system,
            steps: vec![
                "node_modules/@qavajs/steps-memory/index.js".to_string(),
                module_system.step_definition_glob(),
            ],
            formats: Vec::new(),
            driver: None,
        }
    }

    #[test]
    fn test_format_entry_serialization() {
        let entries: Vec<FormatEntry> = ["html", "console"]
            .iter()
            .map(|name| FormatEntry::from(find(FORMATS, name).unwrap()))
            .collect();
        assert_eq!(
            serde_json::to_string(&entries).unwrap(),
            r#"[["@qavajs/html-formatter","report/report.html"],"@qavajs/console-formatter"]"#
        );
    }

    #[test]
    fn test_commonjs_config_without_driver() {
        let config = render_config(&memory_only(ModuleSystem::CommonJs)).unwrap();
        assert_eq!(
            config,
            lines(&[
                r#"const Memory = require("./memory");"#,
                "module.exports = {",
                "  default: {",
                r#"    paths: ["features/**/*.feature"],"#,
                r#"    require: ["node_modules/@qavajs/steps-memory/index.js","step_definition/*.js"],"#,
                "    format: [],",
                "    memory: new Memory(),",
                "  }",
                "}",
                "",
            ])
        );
    }

    #[test]
    fn test_es_modules_config_with_playwright() {
        let mut params = memory_only(ModuleSystem::EsModules);
        params.driver = Some(BrowserDriver::Playwright);
        let config = render_config(&params).unwrap();
        assert_eq!(
            config,
            lines(&[
                r#"import Memory from "./memory/index.js";"#,
                r#"import App from "./page_object/index.js";"#,
                "export default {",
                r#"  paths: ["features/**/*.feature"],"#,
                r#"  import: ["node_modules/@qavajs/steps-memory/index.js","step_definition/*.js"],"#,
                "  format: [],",
                "  memory: new Memory(),",
                "  pageObject: new App(),",
                "  browser: {",
                "    capabilities: {",
                r#"      browserName: "chromium""#,
                "    }",
                "  },",
                "}",
                "",
            ])
        );
    }

    #[test]
    fn test_typescript_config_uses_require_key() {
        let config = render_config(&memory_only(ModuleSystem::TypeScript)).unwrap();
        assert!(config.starts_with(r#"import Memory from "./memory";"#));
        assert!(config.contains(r#"  require: ["node_modules/@qavajs/steps-memory/index.js","step_definition/*.ts"],"#));
        assert!(!config.contains("pageObject"));
    }

    #[test]
    fn test_page_object_binds_locator_helper() {
        let po = render_page_object(ModuleSystem::CommonJs, BrowserDriver::Wdio);
        assert_eq!(
            po,
            lines(&[
                r#"const { locator } = require("@qavajs/steps-wdio/po");"#,
                "module.exports = class App {",
                r#"  Body = locator("body");"#,
                r#"  GetStartedButton = locator("a.button[href='/docs/intro']");"#,
                "}",
                "",
            ])
        );

        let po = render_page_object(ModuleSystem::TypeScript, BrowserDriver::Playwright);
        assert!(po.starts_with(r#"import { locator } from "@qavajs/steps-playwright/po";"#));
        assert!(po.contains("export default class App {"));
    }

    #[test]
    fn test_memory_per_module_system() {
        assert_eq!(
            render_memory(ModuleSystem::CommonJs),
            "module.exports = class Constants {\n}\n"
        );
        assert_eq!(
            render_memory(ModuleSystem::EsModules),
            "export default class Constants {\n}\n"
        );
    }

    #[test]
    fn test_readme_references_config_file() {
        let readme = render_readme(ModuleSystem::TypeScript, "npm");
        assert!(readme.contains("npx qavajs run --config config.ts\n"));
        assert!(readme.contains("- [config](./config.ts) - main config\n"));
        assert!(readme.contains("\nnpm install\n"));
        assert!(readme.contains(DOCS_URL));
    }

    #[test]
    fn test_sample_features_have_no_blank_lines() {
        assert!(!sample_feature().contains("\n\n"));
        assert!(sample_api_feature().starts_with("Feature: qavajs framework\n"));
    }
}
