//! Optional per-project wrapper configuration.
//!
//! `hvigorw.toml` at the project root can override the runtime binary and
//! the dependency directory, and declare a runtime version requirement for
//! the doctor. A missing file means stock behavior.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File name of the wrapper config, looked up in the project root.
pub const CONFIG_FILE: &str = "hvigorw.toml";

const DEFAULT_NODE_BIN: &str = "node";
const DEFAULT_DEPENDENCY_DIR: &str = "node_modules";

/// Wrapper configuration matching `hvigorw.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct WrapperConfig {
    #[serde(default)]
    wrapper: WrapperSection,
}

#[derive(Debug, Default, Deserialize)]
struct WrapperSection {
    /// Runtime binary used to execute the entry script.
    node_bin: Option<String>,
    /// Directory holding vendored dependencies.
    dependency_dir: Option<String>,
    /// Runtime version requirement, e.g. ">=14.19.1".
    node_version: Option<String>,
}

impl WrapperConfig {
    /// Load `hvigorw.toml` from the project root. A missing file yields
    /// defaults; an unreadable or invalid file is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Runtime binary, tilde-expanded. A bare name is looked up in PATH by
    /// the spawn itself.
    pub fn node_bin(&self) -> PathBuf {
        match &self.wrapper.node_bin {
            Some(bin) => PathBuf::from(shellexpand::tilde(bin).as_ref()),
            None => PathBuf::from(DEFAULT_NODE_BIN),
        }
    }

    pub fn dependency_dir(&self) -> &str {
        self.wrapper
            .dependency_dir
            .as_deref()
            .unwrap_or(DEFAULT_DEPENDENCY_DIR)
    }

    /// Version requirement the doctor enforces; the launcher never does.
    pub fn node_version(&self) -> Option<&str> {
        self.wrapper.node_version.as_deref()
    }
}
