//! Wrapper library for launching the vendored hvigor build tool.
//!
//! OpenHarmony-style projects vendor `hvigor` as a local dependency under
//! `node_modules/` instead of relying on a system-wide install. The `hvigorw`
//! binary lives one directory below the project root, resolves the vendored
//! entry script from its own location, and delegates to it with inherited
//! stdio. `hvigorw-doctor` answers whether that delegation can succeed.

pub mod config;
pub mod doctor;
pub mod launch;
pub mod project;

pub use config::WrapperConfig;
pub use launch::{LaunchOutcome, MISSING_HVIGOR_MSG, launch};
pub use project::Project;
