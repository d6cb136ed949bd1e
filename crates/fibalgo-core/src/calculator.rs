//! The `Calculator` trait and the error type shared by all algorithms.
//!
//! Every algorithm is a stateless unit struct implementing `Calculator`,
//! so hosts can hold them as `Arc<dyn Calculator>` and dispatch by name.

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is beyond the precomputed table.
    #[error("index {n} is out of range for the precomputed table (max {max})")]
    OutOfRange {
        /// Requested index.
        n: u32,
        /// Largest valid index.
        max: u32,
    },

    /// No algorithm is registered under the given name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,

    /// Every algorithm in a run failed.
    #[error("no algorithm produced a result")]
    NoResults,
}

/// A Fibonacci algorithm with the host-facing signature `u32 -> u64`.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: u32) -> Result<u64, FibError>;

    /// Exposed name of this calculator, e.g. `fibonacci_iterative`.
    fn name(&self) -> &str;

    /// One-line description shown to hosts.
    fn description(&self) -> &str;
}
