use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::external::command_line;

/// A pattern and the command to run when a changed path matches it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    /// Regular expression tested against each changed path
    pub pattern: String,

    /// Executable name or path
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl Rule {
    /// The command and its arguments joined by spaces
    pub fn command_line(&self) -> String {
        command_line(&self.command, &self.args)
    }
}

/// The parsed rules file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    rules: Vec<Rule>,
}

impl RunConfig {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Read and parse a rules file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml_str(&contents, path)?;
        tracing::debug!("Loaded {} rules from {}", config.len(), path.display());
        Ok(config)
    }

    /// Parse rules from YAML text; `origin` is only used in error messages
    pub fn from_yaml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        if is_blank_document(contents) {
            return Ok(Self::default());
        }

        // An explicit `~` or `null` document also means no rules
        let rules: Option<Vec<Rule>> =
            serde_yml::from_str(contents).map_err(|source| ConfigError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        Ok(Self::new(rules.unwrap_or_default()))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Only whitespace, comments and document markers
fn is_blank_document(contents: &str) -> bool {
    contents.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
