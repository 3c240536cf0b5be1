use crate::domain::ports::Workspace;
use std::path::{Path, PathBuf};

/// Filesystem workspace rooted at a project directory. Relative target
/// paths are resolved against the root before any check or removal.
#[derive(Debug, Clone)]
pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Workspace for LocalWorkspace {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn remove_file(&self, path: &str) -> std::io::Result<()> {
        std::fs::remove_file(self.resolve(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_and_remove_under_root() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("assets")).unwrap();
        std::fs::write(temp_dir.path().join("assets/icon.png"), b"png").unwrap();

        let workspace = LocalWorkspace::new(temp_dir.path());

        assert!(workspace.exists("assets/icon.png"));
        workspace.remove_file("assets/icon.png").unwrap();
        assert!(!workspace.exists("assets/icon.png"));
    }

    #[test]
    fn test_remove_missing_file_reports_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = LocalWorkspace::new(temp_dir.path());

        let err = workspace.remove_file("assets/missing.png").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("assets")).unwrap();

        let workspace = LocalWorkspace::new(temp_dir.path());

        assert!(workspace.exists("assets"));
        assert!(workspace.remove_file("assets").is_err());
    }
}
