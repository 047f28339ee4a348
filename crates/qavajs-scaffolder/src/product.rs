//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to name the product, point at its
//! documentation and choose the package manager used for installation.

use crate::answers::ModuleSystem;
use std::path::Path;

/// Configuration trait for the scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Environment variable name for overriding the package manager
    fn package_manager_env(&self) -> &'static str;

    /// Package manager used when the environment variable is unset
    fn default_package_manager(&self) -> &'static str {
        "npm"
    }

    /// Package manager for this run
    fn package_manager(&self) -> String {
        resolve_package_manager(
            std::env::var(self.package_manager_env()).ok(),
            self.default_package_manager(),
        )
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, module_system: ModuleSystem) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;
}

/// Non-blank override wins over the default
pub fn resolve_package_manager(override_value: Option<String>, default: &str) -> String {
    override_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
