//! Static catalog of installable qavajs modules
//!
//! Every partition is an ordered slice; the order is the order the user sees
//! in prompts and in `list` output. Display names are unique within a partition.

use std::fmt;

/// An installable module offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDefinition {
    /// Display name shown in prompts
    pub module: &'static str,
    /// npm package name
    pub package_name: &'static str,
    /// Pinned major version, appended as `@<version>` when installing
    pub version: Option<&'static str>,
    /// Report output path (formatters only)
    pub out: Option<&'static str>,
}

impl ModuleDefinition {
    const fn new(module: &'static str, package_name: &'static str) -> Self {
        Self {
            module,
            package_name,
            version: None,
            out: None,
        }
    }

    const fn pinned(self, version: &'static str) -> Self {
        Self {
            version: Some(version),
            ..self
        }
    }

    const fn writes_to(self, out: &'static str) -> Self {
        Self {
            out: Some(out),
            ..self
        }
    }

    /// Identifier passed to the package manager: `name` or `name@version`
    pub fn package_identifier(&self) -> String {
        match self.version {
            Some(version) => format!("{}@{}", self.package_name, version),
            None => self.package_name.to_string(),
        }
    }

    /// Entry point the test runner loads step definitions from
    pub fn require_path(&self) -> String {
        format!("node_modules/{}/index.js", self.package_name)
    }
}

/// Always installed
pub const CORE_DEPENDENCIES: &[ModuleDefinition] = &[
    ModuleDefinition::new("cucumber", "@cucumber/cucumber"),
    ModuleDefinition::new("core", "@qavajs/core").pinned("2"),
];

/// Installed only for the Typescript module system
pub const TYPESCRIPT_DEPENDENCIES: &[ModuleDefinition] = &[
    ModuleDefinition::new("ts-node", "ts-node"),
    ModuleDefinition::new("typescript", "typescript"),
];

/// Memory steps are installed and required in every project
pub const MEMORY_STEPS: ModuleDefinition =
    ModuleDefinition::new("memory", "@qavajs/steps-memory").pinned("2");

pub const STEPS: &[ModuleDefinition] = &[
    ModuleDefinition::new("playwright", "@qavajs/steps-playwright").pinned("2"),
    ModuleDefinition::new("wdio", "@qavajs/steps-wdio").pinned("2"),
    ModuleDefinition::new("api", "@qavajs/steps-api").pinned("2"),
    ModuleDefinition::new("files", "@qavajs/steps-files").pinned("2"),
    ModuleDefinition::new("sql", "@qavajs/steps-sql").pinned("2"),
    ModuleDefinition::new("accessibility", "@qavajs/steps-accessibility").pinned("2"),
    ModuleDefinition::new("lighthouse", "@qavajs/steps-lighthouse").pinned("2"),
    ModuleDefinition::new("visual testing", "@qavajs/steps-visual-testing").pinned("2"),
];

pub const FORMATS: &[ModuleDefinition] = &[
    ModuleDefinition::new("report portal", "@qavajs/format-report-portal").writes_to("report/rp.out"),
    ModuleDefinition::new("console", "@qavajs/console-formatter"),
    ModuleDefinition::new("html", "@qavajs/html-formatter").writes_to("report/report.html"),
    ModuleDefinition::new("jira xray", "@qavajs/xray-formatter").writes_to("report/xray.out"),
];

pub const MODULES: &[ModuleDefinition] = &[
    ModuleDefinition::new("template", "@qavajs/template"),
    ModuleDefinition::new("soft-assertion", "@qavajs/soft-assertion"),
];

pub const ADDITIONAL_MODULES: &[ModuleDefinition] = &[
    ModuleDefinition::new("wdio service adapter", "@qavajs/wdio-service-adapter"),
    ModuleDefinition::new("webstorm adapter", "@qavajs/webstorm-adapter"),
];

/// Catalog partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Core,
    Typescript,
    Steps,
    Formats,
    Modules,
    AdditionalModules,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Core,
        Category::Typescript,
        Category::Steps,
        Category::Formats,
        Category::Modules,
        Category::AdditionalModules,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Core => "Core dependencies",
            Category::Typescript => "Typescript dependencies",
            Category::Steps => "Step libraries",
            Category::Formats => "Formatters",
            Category::Modules => "Modules",
            Category::AdditionalModules => "Additional modules",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered module definitions of a category, in declaration order
pub fn modules(category: Category) -> &'static [ModuleDefinition] {
    match category {
        Category::Core => CORE_DEPENDENCIES,
        Category::Typescript => TYPESCRIPT_DEPENDENCIES,
        Category::Steps => STEPS,
        Category::Formats => FORMATS,
        Category::Modules => MODULES,
        Category::AdditionalModules => ADDITIONAL_MODULES,
    }
}

/// Display names of a partition, for building prompt choices
pub fn choices(partition: &[ModuleDefinition]) -> Vec<&'static str> {
    partition.iter().map(|m| m.module).collect()
}

/// Look up a module by display name
pub fn find<'a>(partition: &'a [ModuleDefinition], module: &str) -> Option<&'a ModuleDefinition> {
    partition.iter().find(|m| m.module == module)
}
