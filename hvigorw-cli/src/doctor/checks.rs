//! Prerequisite checks for a successful launch.
//!
//! Two things have to hold: the JavaScript runtime must be reachable (and
//! version-adequate when the config declares a requirement), and the
//! vendored hvigor entry script must exist under the project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::process::Command;

use crate::config::WrapperConfig;
use crate::project::Project;

/// Outcome of checking a single prerequisite.
#[derive(Debug, Serialize)]
pub struct ToolCheck {
    pub name: String,
    pub found: bool,
    pub installed_version: Option<String>,
    pub required_version: Option<String>,
    pub meets_requirement: bool,
    pub path: Option<PathBuf>,
    pub install_hint: Option<String>,
}

/// Check if a binary exists in PATH.
fn find_binary(name: &str) -> Option<PathBuf> {
    Command::new("which")
        .arg(name)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| PathBuf::from(s.trim()))
            } else {
                None
            }
        })
}

/// Get the runtime version by running `<bin> --version`.
fn get_version(bin: &Path) -> Option<String> {
    let output = Command::new(bin).arg("--version").output().ok()?;

    if !output.status.success() {
        return None;
    }

    let version_output = String::from_utf8(output.stdout).ok()?;
    extract_version(&version_output)
}

/// Extract a semantic version from version output.
/// Handles "v18.19.0" (node) as well as bare "18.19.0".
fn extract_version(output: &str) -> Option<String> {
    let re = regex::Regex::new(r"v?(\d+\.\d+\.\d+)").ok()?;
    re.captures(output)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check an installed version against a requirement like ">=14.19.1".
fn version_meets_requirement(installed: &str, requirement: &str) -> Result<bool> {
    let installed = semver::Version::parse(installed.trim())
        .with_context(|| format!("Failed to parse installed version: {installed}"))?;

    let requirement = semver::VersionReq::parse(requirement.trim())
        .with_context(|| format!("Failed to parse version requirement: {requirement}"))?;

    Ok(requirement.matches(&installed))
}

/// `package.json` subset of the vendored hvigor package.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: String,
}

/// Read the vendored package's version from its `package.json`.
fn vendored_version(package_dir: &Path) -> Option<String> {
    let manifest = std::fs::read_to_string(package_dir.join("package.json")).ok()?;
    let manifest: PackageManifest = serde_json::from_str(&manifest).ok()?;
    Some(manifest.version)
}

/// Check the JavaScript runtime the wrapper would spawn.
pub fn check_node(config: &WrapperConfig) -> ToolCheck {
    let bin = config.node_bin();

    // An explicit path override is checked directly; a bare name goes
    // through PATH the same way the spawn would.
    let path = if bin.components().count() > 1 {
        bin.is_file().then(|| bin.clone())
    } else {
        find_binary(&bin.to_string_lossy())
    };
    let found = path.is_some();

    let installed_version = if found { get_version(&bin) } else { None };

    let meets_requirement = match (&installed_version, config.node_version()) {
        (Some(installed), Some(requirement)) => {
            version_meets_requirement(installed, requirement).unwrap_or(false)
        }
        // Found but version unknown - assume OK
        (None, _) | (Some(_), None) => found,
    };

    ToolCheck {
        name: bin.to_string_lossy().into_owned(),
        found,
        installed_version,
        required_version: config.node_version().map(str::to_string),
        meets_requirement,
        path,
        install_hint: (!found).then(|| {
            "install Node.js (https://nodejs.org) or set wrapper.node_bin in hvigorw.toml"
                .to_string()
        }),
    }
}

/// Check the vendored hvigor entry script under the project.
pub fn check_hvigor(project: &Project, config: &WrapperConfig) -> ToolCheck {
    let entry = project.hvigor_entry(config);
    let found = entry.is_file();

    let installed_version = if found {
        vendored_version(&project.hvigor_package_dir(config))
    } else {
        None
    };

    ToolCheck {
        name: "hvigor".to_string(),
        found,
        installed_version,
        required_version: None,
        meets_requirement: found,
        path: found.then_some(entry),
        install_hint: (!found).then(|| "run \"npm install\" in the project root".to_string()),
    }
}

/// Run every prerequisite check, runtime first.
pub fn run_checks(project: &Project, config: &WrapperConfig) -> Vec<ToolCheck> {
    vec![check_node(config), check_hvigor(project, config)]
}
