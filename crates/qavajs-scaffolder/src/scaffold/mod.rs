//! Scaffold orchestration: plan, generate files, install packages
//!
//! Runs are strictly sequential. Nothing is rolled back: when a file
//! operation or the install fails, everything written before it stays on disk.

mod plan;

pub use plan::{ScaffoldPlan, PROJECT_DIRS};

use crate::answers::Answers;
use crate::filesystem::Filesystem;
use crate::runtime::PackageInstaller;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Drives a run against a filesystem and a package installer
pub struct Scaffolder<F, I> {
    fs: F,
    installer: I,
    project_dir: PathBuf,
    package_manager: String,
}

impl<F: Filesystem, I: PackageInstaller> Scaffolder<F, I> {
    pub fn new(fs: F, installer: I, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            installer,
            project_dir: project_dir.into(),
            package_manager: "npm".to_string(),
        }
    }

    /// Package manager named in the generated README
    pub fn with_package_manager(mut self, package_manager: impl Into<String>) -> Self {
        self.package_manager = package_manager.into();
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    /// Validate the answers and compute the run, without touching the filesystem
    pub fn plan(&self, answers: &Answers) -> Result<ScaffoldPlan> {
        ScaffoldPlan::new(answers, &self.package_manager)
    }

    /// Apply the planned file operations in order
    pub async fn generate(&self, plan: &ScaffoldPlan) -> Result<()> {
        for operation in &plan.operations {
            tracing::debug!(path = %operation.path().display(), "applying file operation");
            self.fs.apply(operation).await?;
        }
        Ok(())
    }

    /// Install the planned packages in the project directory
    pub async fn install(&self, plan: &ScaffoldPlan) -> Result<()> {
        self.installer
            .install(&plan.install_list, &self.project_dir)
            .await
    }

    /// Plan, generate and install in one go
    pub async fn scaffold(&self, answers: &Answers) -> Result<ScaffoldPlan> {
        let plan = self.plan(answers)?;
        self.generate(&plan).await?;
        self.install(&plan).await?;
        tracing::info!(packages = plan.install_list.len(), "scaffold complete");
        Ok(plan)
    }
}
