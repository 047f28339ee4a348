//! Named failures raised while resolving selections and installing packages

use thiserror::Error;

/// Errors with a meaning of their own in the scaffolding flow.
///
/// File-system and prompt failures are not listed here; they travel as
/// `anyhow` errors with context attached at the call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// A selected module name has no entry in the catalog partition it was looked up in
    #[error("{module} module is not found")]
    ModuleNotFound { module: String },

    /// Both competing browser-driver step modules were selected
    #[error("Please select only one browser driver")]
    ConflictingDrivers,

    /// A module-system label that is not one of the supported variants
    #[error("Unknown module system: {0}")]
    UnknownModuleSystem(String),

    /// The package manager exited with a non-zero status
    #[error("{program} install failed with exit code: {code}")]
    InstallFailed { program: String, code: i32 },
}

impl ScaffoldError {
    pub(crate) fn not_found(module: impl Into<String>) -> Self {
        Self::ModuleNotFound {
            module: module.into(),
        }
    }
}
