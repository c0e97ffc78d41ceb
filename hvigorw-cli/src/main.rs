//! Thin wrapper binary that delegates to the vendored hvigor build tool.
//!
//! Installed one directory below the project root, so the project can be
//! built without a system-wide hvigor. Everything after the program name is
//! forwarded to hvigor untouched; flag parsing on this path would break the
//! verbatim-forwarding contract, so there is none.

use std::env;
use std::ffi::OsString;
use std::process::exit;

use hvigorw_cli::{LaunchOutcome, MISSING_HVIGOR_MSG, Project, WrapperConfig, launch};

fn main() {
    env_logger::init();

    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match run(&args) {
        Ok(outcome) => {
            if matches!(outcome, LaunchOutcome::MissingHvigor) {
                eprintln!("{MISSING_HVIGOR_MSG}");
            }
            exit(outcome.exit_code());
        }
        Err(err) => {
            eprintln!("hvigorw: {err:#}");
            exit(1);
        }
    }
}

fn run(args: &[OsString]) -> anyhow::Result<LaunchOutcome> {
    let project = Project::from_current_exe()?;
    let config = WrapperConfig::load(project.root())?;
    launch(&project, &config, args)
}
