//! File-system seam used by the scaffolder
//!
//! - [`LocalFilesystem`] writes below a project directory
//! - [`MemoryFilesystem`] records operations in order, for tests

mod local;
mod memory;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

/// Operations the scaffolder performs, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOperation {
    /// Create a directory and its parents (idempotent)
    CreateDir(PathBuf),
    /// Write a file, overwriting any existing content
    WriteFile { path: PathBuf, contents: String },
}

impl FsOperation {
    pub fn create_dir(path: impl Into<PathBuf>) -> Self {
        FsOperation::CreateDir(path.into())
    }

    pub fn write_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        FsOperation::WriteFile {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsOperation::CreateDir(path) => path,
            FsOperation::WriteFile { path, .. } => path,
        }
    }
}

/// Directory creation and file writing, awaited one at a time
#[allow(async_fn_in_trait)]
pub trait Filesystem {
    async fn create_dir_all(&self, path: &Path) -> Result<()>;

    async fn write_file(&self, path: &Path, contents: &str) -> Result<()>;

    /// Apply a single planned operation
    async fn apply(&self, operation: &FsOperation) -> Result<()> {
        match operation {
            FsOperation::CreateDir(path) => self.create_dir_all(path).await,
            FsOperation::WriteFile { path, contents } => self.write_file(path, contents).await,
        }
    }
}
