use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "gitmatchrun.yaml";
pub const DEFAULT_TO_REF: &str = "HEAD";
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Everything a single run needs, fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub config_path: PathBuf,
    /// Passed to `git diff` as-is, even when empty
    pub from_ref: String,
    pub to_ref: String,
    /// Run matched commands; otherwise only report them
    pub execute: bool,
    pub git_program: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            from_ref: String::new(),
            to_ref: DEFAULT_TO_REF.to_string(),
            execute: false,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
        }
    }
}
