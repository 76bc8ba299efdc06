//! User-facing output for git-match-run
//!
//! Run reports (which rules fire, which are skipped, what a dry run would
//! have executed) are printed here with consistent symbols and styling.
//! Diagnostics for debugging go through `tracing` instead.

use console::style;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Output handler that prints nothing
    pub fn quiet() -> Self {
        Self::new(false, true)
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a step in a process
    pub fn step(&self, step: &str) {
        if !self.quiet {
            println!("{} {}", style("❯").cyan(), step);
        }
    }

    /// Print something that was deliberately not done
    pub fn skipped(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("○").dim(), style(message).dim());
        }
    }
}
