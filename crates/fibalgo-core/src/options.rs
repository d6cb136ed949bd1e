//! Run options shared by hosts.

use crate::constants::DEFAULT_RECURSIVE_LIMIT;

/// Options for a host-driven run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Largest n the host will hand to the recursive algorithm.
    pub recursive_limit: u32,
    /// Whether to show verbose output.
    pub verbose: bool,
    /// Whether to show detailed output.
    pub details: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            recursive_limit: DEFAULT_RECURSIVE_LIMIT,
            verbose: false,
            details: false,
        }
    }
}

impl Options {
    /// Whether the recursive algorithm may run for `n`.
    #[must_use]
    pub fn allows_recursive(&self, n: u32) -> bool {
        n <= self.recursive_limit
    }
}
