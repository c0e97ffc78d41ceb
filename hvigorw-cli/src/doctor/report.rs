//! Report rendering for doctor results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::doctor::checks::ToolCheck;

/// Aggregate doctor report for one project.
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub timestamp: String,
    pub project_root: PathBuf,
    pub checks: Vec<ToolCheck>,
    pub all_required_met: bool,
}

impl DoctorReport {
    pub fn new(project_root: PathBuf, checks: Vec<ToolCheck>) -> Self {
        let all_required_met = checks.iter().all(|c| c.found && c.meets_requirement);
        Self {
            timestamp: Utc::now().to_rfc3339(),
            project_root,
            checks,
            all_required_met,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize doctor report")
    }
}

/// Print the report to stdout in human-readable form.
pub fn print_report(report: &DoctorReport) {
    println!("hvigorw doctor");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Project: {}", report.project_root.display());
    println!();

    for check in &report.checks {
        let status = if check.found && check.meets_requirement {
            "✅"
        } else if check.found {
            "⚠️"
        } else {
            "❌"
        };

        print!("  {} {} ", status, check.name);

        match (&check.installed_version, &check.required_version) {
            (Some(installed), Some(required)) => {
                if check.meets_requirement {
                    println!("(installed: {installed}, OK)");
                } else {
                    println!("(installed: {installed}, requires: {required})");
                }
            }
            (Some(installed), None) => println!("({installed})"),
            (None, Some(required)) => println!("(not installed) - requires: {required}"),
            (None, None) => {
                if check.found {
                    println!("(version unknown)");
                } else {
                    println!("(not installed)");
                }
            }
        }

        if let Some(path) = &check.path {
            println!("      at {}", path.display());
        }

        if let Some(hint) = &check.install_hint {
            println!("      hint: {hint}");
        }
    }

    println!();
    if report.all_required_met {
        println!("✅ Ready: hvigorw can launch the vendored hvigor");
    } else {
        println!("⚠️  Not ready: required prerequisites are missing");
    }
}
