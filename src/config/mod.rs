//! Configuration for git-match-run
//!
//! Two kinds of configuration exist: the rules file (a YAML sequence of
//! pattern/command pairs) and the [`RunSettings`] built from the command line
//! once per run.
//!
//! ```yaml
//! - pattern: '\.go$'
//!   command: go
//!   args: ["test", "./..."]
//! - pattern: '^docs/'
//!   command: make
//!   args: ["docs"]
//! ```

mod core;
mod settings;


pub use self::core::{Rule, RunConfig};
pub use self::settings::{DEFAULT_CONFIG_FILE, DEFAULT_GIT_PROGRAM, DEFAULT_TO_REF, RunSettings};
