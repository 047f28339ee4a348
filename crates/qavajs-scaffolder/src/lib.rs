//! qavajs Scaffolder - library behind the `create-qavajs` CLI
//!
//! Generates a qavajs test-automation project: prompts for a module system,
//! step libraries and formatters, writes configuration and skeleton files,
//! then installs the chosen packages with the project's package manager.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Data** - static module [`catalog`], [`answers`] and name [`resolver`]
//! - **Layer 2: Orchestration** - [`scaffold::ScaffoldPlan`] (side-effect free) and
//!   [`scaffold::Scaffolder`], generic over the [`filesystem::Filesystem`] and
//!   [`runtime::PackageInstaller`] seams
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use qavajs_scaffolder::{Answers, ModuleSystem, Scaffolder};
//! use qavajs_scaffolder::filesystem::LocalFilesystem;
//! use qavajs_scaffolder::runtime::CommandInstaller;
//!
//! let answers = Answers::new(ModuleSystem::TypeScript, ["playwright"], ["html"]);
//! let scaffolder = Scaffolder::new(LocalFilesystem::new("."), CommandInstaller::default(), ".");
//! let plan = scaffolder.scaffold(&answers).await?;
//! println!("{}", plan.install_list.join(" "));
//! ```

pub mod answers;
pub mod catalog;
pub mod error;
pub mod filesystem;
pub mod product;
pub mod prompt;
pub mod resolver;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{Answers, BrowserDriver, ModuleSystem};
pub use catalog::{Category, ModuleDefinition};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use prompt::{collect_answers, AnswerPreset, Prompter};
pub use resolver::{resolve_packages, resolve_require_paths};
pub use scaffold::{ScaffoldPlan, Scaffolder};

#[cfg(feature = "tui")]
pub use tui::run;
