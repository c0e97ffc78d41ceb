//! Environment doctor: reports whether `hvigorw` can launch the vendored
//! hvigor build tool from this machine.

use std::env;
use std::path::PathBuf;
use std::process::exit;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hvigorw_cli::doctor::{DoctorReport, print_report, run_checks};
use hvigorw_cli::{Project, WrapperConfig};

#[derive(Debug, Parser)]
#[command(
    name = "hvigorw-doctor",
    version,
    about = "Check that the vendored hvigor build tool can be launched"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<DoctorCommands>,
}

#[derive(Debug, Subcommand, Clone)]
enum DoctorCommands {
    /// Check prerequisites (runtime binary, vendored hvigor)
    Check {
        /// Project root (default: current directory)
        #[arg(long, env = "HVIGORW_PROJECT")]
        project: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(DoctorCommands::Check {
        project: None,
        json: false,
    }) {
        DoctorCommands::Check { project, json } => check(project, json),
    }
}

fn check(project_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let root = match project_dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let project = Project::at_root(root);
    let config = WrapperConfig::load(project.root())?;

    let checks = run_checks(&project, &config);
    let report = DoctorReport::new(project.root().to_path_buf(), checks);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }

    if !report.all_required_met {
        exit(1);
    }

    Ok(())
}
