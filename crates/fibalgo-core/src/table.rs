//! Precomputed-table lookup.
//!
//! The table is a `const` built at compile time, so it is fully populated
//! before any caller can read it and never changes afterwards.

use crate::calculator::{Calculator, FibError};
use crate::constants::{FIB_TABLE, MAX_FIB_U64};

/// Look up F(n) in the precomputed table.
///
/// Fails with [`FibError::OutOfRange`] for `n > 93`.
pub fn fibonacci_table(n: u32) -> Result<u64, FibError> {
    usize::try_from(n)
        .ok()
        .and_then(|i| FIB_TABLE.get(i))
        .copied()
        .ok_or(FibError::OutOfRange { n, max: MAX_FIB_U64 })
}

/// Table-lookup calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLookup;

impl TableLookup {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for TableLookup {
    fn calculate(&self, n: u32) -> Result<u64, FibError> {
        fibonacci_table(n)
    }

    fn name(&self) -> &str {
        "fibonacci_table"
    }

    fn description(&self) -> &str {
        "Computes the nth Fibonacci number using a precomputed table."
    }
}
