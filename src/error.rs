//! Error types for each pipeline stage
//!
//! Every error is fatal: the first one encountered aborts the run. Each stage
//! has its own type so callers can tell where a run stopped, and [`Error`]
//! wraps them all for the pipeline as a whole.

use std::path::PathBuf;

use thiserror::Error;

use crate::external::ProcessExit;

/// Result alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which stage of the pipeline an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Vcs,
    Pattern,
    Run,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Vcs(#[from] VcsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Run(#[from] RunError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Vcs(_) => ErrorKind::Vcs,
            Error::Pattern(_) => ErrorKind::Pattern,
            Error::Run(_) => ErrorKind::Run,
        }
    }
}

/// The rules file could not be read or did not have the expected shape
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yml::Error,
    },
}

/// Listing changed files through the version-control tool failed
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("`{command}` failed with {exit}: {stderr}")]
    Failed {
        command: String,
        exit: ProcessExit,
        stderr: String,
    },
}

/// A rule's pattern did not compile
#[derive(Debug, Error)]
#[error("rule #{rule}: invalid pattern /{pattern}/")]
pub struct PatternError {
    pub rule: usize,
    pub pattern: String,
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

/// A matched rule's command could not be started or did not succeed
#[derive(Debug, Error)]
pub enum RunError {
    #[error("rule #{rule}: failed to start `{command}`")]
    Spawn {
        rule: usize,
        command: String,
        source: std::io::Error,
    },
    #[error("rule #{rule}: `{command}` failed with {exit}")]
    Failed {
        rule: usize,
        command: String,
        exit: ProcessExit,
    },
}
