//! In-memory filesystem that records every operation

use super::{Filesystem, FsOperation};
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    operations: Vec<FsOperation>,
    failing: HashSet<PathBuf>,
}

/// Records operations in the order they were performed
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<Mutex<MemoryFilesystemInner>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any operation on `path` fail
    pub fn fail_on(self, path: impl Into<PathBuf>) -> Self {
        self.lock().failing.insert(path.into());
        self
    }

    fn lock(&self) -> MutexGuard<'_, MemoryFilesystemInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, operation: FsOperation) -> Result<()> {
        let mut inner = self.lock();
        if inner.failing.contains(operation.path()) {
            anyhow::bail!("Simulated failure at {}", operation.path().display());
        }
        inner.operations.push(operation);
        Ok(())
    }

    /// All operations, oldest first
    pub fn operations(&self) -> Vec<FsOperation> {
        self.lock().operations.clone()
    }

    /// Created directories, in creation order
    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.lock()
            .operations
            .iter()
            .filter_map(|op| match op {
                FsOperation::CreateDir(path) => Some(path.clone()),
                FsOperation::WriteFile { .. } => None,
            })
            .collect()
    }

    /// Written file paths, in write order
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.lock()
            .operations
            .iter()
            .filter_map(|op| match op {
                FsOperation::WriteFile { path, .. } => Some(path.clone()),
                FsOperation::CreateDir(_) => None,
            })
            .collect()
    }

    /// Latest content written to `path`
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = path.as_ref();
        self.lock().operations.iter().rev().find_map(|op| match op {
            FsOperation::WriteFile { path: p, contents } if p == path => Some(contents.clone()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lock().operations.is_empty()
    }
}

impl Filesystem for MemoryFilesystem {
    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.record(FsOperation::create_dir(path))
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        self.record(FsOperation::write_file(path, contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_in_order() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new(".gitignore"), "node_modules/")
            .await
            .unwrap();
        fs.create_dir_all(Path::new("features")).await.unwrap();

        assert_eq!(
            fs.operations(),
            vec![
                FsOperation::write_file(".gitignore", "node_modules/"),
                FsOperation::create_dir("features"),
            ]
        );
        assert_eq!(fs.created_dirs(), vec![PathBuf::from("features")]);
        assert_eq!(fs.written_paths(), vec![PathBuf::from(".gitignore")]);
    }

    #[tokio::test]
    async fn test_read_returns_latest_write() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("a"), "1").await.unwrap();
        fs.write_file(Path::new("a"), "2").await.unwrap();
        assert_eq!(fs.read_file("a").as_deref(), Some("2"));
        assert_eq!(fs.read_file("b"), None);
    }

    #[tokio::test]
    async fn test_simulated_failure_is_not_recorded() {
        let fs = MemoryFilesystem::new().fail_on("config.js");
        let err = fs.write_file(Path::new("config.js"), "x").await.unwrap_err();
        assert!(err.to_string().contains("config.js"));
        assert!(fs.is_empty());
    }
}
