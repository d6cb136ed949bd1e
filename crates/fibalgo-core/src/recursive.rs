//! Naive recursion, kept as a baseline.
//!
//! Runs in exponential time and recursion depth n. Inputs above
//! [`RECURSIVE_PRACTICAL_MAX`](crate::constants::RECURSIVE_PRACTICAL_MAX)
//! take seconds or more; nothing here stops a caller from asking anyway.

use crate::calculator::{Calculator, FibError};

/// Compute F(n) = F(n-1) + F(n-2) with F(0) = 0, F(1) = 1. No memoization.
#[must_use]
pub fn fibonacci_recursive(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci_recursive(n - 1).wrapping_add(fibonacci_recursive(n - 2)),
    }
}

/// Recursive-definition calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recursive;

impl Recursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for Recursive {
    fn calculate(&self, n: u32) -> Result<u64, FibError> {
        tracing::trace!(n, "recursive descent");
        Ok(fibonacci_recursive(n))
    }

    fn name(&self) -> &str {
        "fibonacci_recursive"
    }

    fn description(&self) -> &str {
        "Computes the nth Fibonacci number using the recursive definition."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci_recursive(0), 0);
        assert_eq!(fibonacci_recursive(1), 1);
    }

    #[test]
    fn known_values() {
        assert_eq!(fibonacci_recursive(10), 55);
        assert_eq!(fibonacci_recursive(20), 6765);
    }

    #[test]
    fn matches_table_small_range() {
        for n in 0..=25u32 {
            assert_eq!(fibonacci_recursive(n), FIB_TABLE[n as usize], "F({n})");
        }
    }

    #[test]
    fn calculator_reports_name() {
        let calc = Recursive::new();
        assert_eq!(calc.calculate(12), Ok(144));
        assert_eq!(calc.name(), "fibonacci_recursive");
    }
}
