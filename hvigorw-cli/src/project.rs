//! Project layout resolution.
//!
//! The wrapper binary is installed in a subdirectory of the project it
//! builds; the project root is the parent of that directory. The vendored
//! tool sits at a fixed path beneath the project's dependency directory.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::WrapperConfig;

/// Path of the vendored entry script relative to the dependency directory.
const HVIGOR_ENTRY_TAIL: [&str; 4] = ["@ohos", "hvigor", "bin", "hvigor.js"];

/// Resolved project layout.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Resolve the project from the directory containing the wrapper binary.
    /// The project root is that directory's parent.
    pub fn from_wrapper_dir(wrapper_dir: &Path) -> Result<Self> {
        let root = wrapper_dir.parent().ok_or_else(|| {
            anyhow::anyhow!(
                "wrapper directory {} has no parent directory",
                wrapper_dir.display()
            )
        })?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Resolve the project from the running executable's location.
    pub fn from_current_exe() -> Result<Self> {
        let exe = env::current_exe().context("Failed to determine current executable path")?;
        let wrapper_dir = exe
            .parent()
            .with_context(|| format!("Executable path {} has no parent", exe.display()))?;
        Self::from_wrapper_dir(wrapper_dir)
    }

    /// Treat an explicit directory as the project root (used by the doctor,
    /// which runs from inside the project rather than from a known location).
    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expected location of the vendored hvigor entry script.
    pub fn hvigor_entry(&self, config: &WrapperConfig) -> PathBuf {
        let mut path = self.root.join(config.dependency_dir());
        for segment in HVIGOR_ENTRY_TAIL {
            path.push(segment);
        }
        path
    }

    /// Vendored hvigor package directory (holds `package.json`).
    pub fn hvigor_package_dir(&self, config: &WrapperConfig) -> PathBuf {
        self.root
            .join(config.dependency_dir())
            .join("@ohos")
            .join("hvigor")
    }
}
