//! Workspace configuration.

use std::path::{Path, PathBuf};

/// Where workspace files are saved and loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Directory holding workspace files; created on save if missing.
    pub directory: PathBuf,
}

impl WorkspaceConfig {
    /// Creates a configuration rooted at `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Full path of a workspace file.
    #[must_use]
    pub fn path_for(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.directory.join(file_name)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self::new("workspaces")
    }
}
