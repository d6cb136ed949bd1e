//! Iterative summation.

use crate::calculator::{Calculator, FibError};

/// Compute F(n) by advancing `(a, b) -> (b, a + b)` n times.
///
/// O(n) time, O(1) space. Wraps modulo 2^64 past F(93).
///
/// # Example
/// ```
/// assert_eq!(fibalgo_core::fibonacci_iterative(10), 55);
/// assert_eq!(fibalgo_core::fibonacci_iterative(0), 0);
/// ```
#[must_use]
pub fn fibonacci_iterative(n: u32) -> u64 {
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 0..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    a
}

/// Iterative summation calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for Iterative {
    fn calculate(&self, n: u32) -> Result<u64, FibError> {
        Ok(fibonacci_iterative(n))
    }

    fn name(&self) -> &str {
        "fibonacci_iterative"
    }

    fn description(&self) -> &str {
        "Computes the nth Fibonacci number using an iterative sum."
    }
}
