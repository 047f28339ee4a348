//! Local filesystem rooted at the project directory

use super::Filesystem;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes files below `root`; relative paths are joined onto it
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Filesystem for LocalFilesystem {
    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        let target = self.resolve(path);
        fs::create_dir_all(&target)
            .await
            .with_context(|| format!("Failed to create directory: {}", target.display()))
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        let target = self.resolve(path);
        fs::write(&target, contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_below_root() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new(dir.path());

        fs.create_dir_all(Path::new("page_object")).await.unwrap();
        fs.write_file(Path::new("page_object/index.js"), "content")
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("page_object/index.js")).unwrap();
        assert_eq!(written, "content");
    }

    #[tokio::test]
    async fn test_create_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new(dir.path());

        fs.create_dir_all(Path::new("a/b")).await.unwrap();
        fs.create_dir_all(Path::new("a/b")).await.unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new(dir.path());

        fs.write_file(Path::new(".gitignore"), "old").await.unwrap();
        fs.write_file(Path::new(".gitignore"), "node_modules/")
            .await
            .unwrap();
        let written = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(written, "node_modules/");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new(dir.path());

        let err = fs
            .write_file(Path::new("missing/index.js"), "x")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
