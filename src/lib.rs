//! # git-match-run - run commands for the files a diff touched
//!
//! git-match-run lists the files changed between two git refs, tests them
//! against a list of regular expressions and runs the command attached to
//! every pattern that matched. It is meant for CI jobs and monorepos where
//! only some checks need to run for a given change.
//!
//! ## Quick Start
//!
//! ```yaml
//! # gitmatchrun.yaml
//! - pattern: '\.go$'
//!   command: go
//!   args: ["test", "./..."]
//! - pattern: '^web/'
//!   command: npm
//!   args: ["--prefix", "web", "test"]
//! ```
//!
//! ```bash
//! # Show which commands would run for the changes on this branch
//! git-match-run --from origin/main
//!
//! # Actually run them
//! git-match-run --from origin/main --run
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use git_match_run::cli::Output;
//! use git_match_run::config::RunSettings;
//! use git_match_run::external::ProcessRunner;
//!
//! let settings = RunSettings {
//!     from_ref: "origin/main".to_string(),
//!     ..RunSettings::default()
//! };
//! let report = git_match_run::pipeline::execute(&settings, &ProcessRunner, &Output::default())?;
//! println!("{} rules matched", report.matched());
//! # Ok::<(), git_match_run::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod git;
pub mod pipeline;
pub mod rules;

pub use cli::{Cli, Output};
pub use error::{Error, ErrorKind, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
