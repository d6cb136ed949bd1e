//! Closed-form power-law (Binet) solution.
//!
//! F(n) = round(φ^n / √5) with φ = (1 + √5) / 2. The dropped ψ^n / √5 term
//! is below 1/2 in magnitude for every n >= 0, so rounding recovers the
//! integer exactly as long as `f64` keeps enough precision:
//!
//! - repeated multiplication is exact up to n = 70,
//! - square-and-multiply is exact up to n = 75.
//!
//! Past those points the results drift from the true value. φ^n overflows
//! to infinity around n = 1475 and the conversion saturates at `u64::MAX`.

use crate::calculator::{Calculator, FibError};

/// The golden ratio and √5, computed once per call.
fn golden_ratio() -> (f64, f64) {
    let sqrt5 = 5.0_f64.sqrt();
    ((1.0 + sqrt5) / 2.0, sqrt5)
}

/// Divide by √5, round to nearest, convert (saturating) to `u64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_binet(phi_pow: f64, sqrt5: f64) -> u64 {
    (phi_pow / sqrt5).round() as u64
}

/// x^n by n successive multiplications.
fn pow_naive(x: f64, n: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..n {
        result *= x;
    }
    result
}

/// x^n by square-and-multiply, scanning bits of n from LSB to MSB.
fn pow_binary(x: f64, mut n: u32) -> f64 {
    let mut result = 1.0;
    let mut base = x;
    while n > 0 {
        if n & 1 == 1 {
            result *= base;
        }
        n >>= 1;
        if n > 0 {
            base *= base;
        }
    }
    result
}

/// F(n) via Binet's formula, computing φ^n with O(n) multiplications.
#[must_use]
pub fn fibonacci_power_law_naive(n: u32) -> u64 {
    let (phi, sqrt5) = golden_ratio();
    round_binet(pow_naive(phi, n), sqrt5)
}

/// F(n) via Binet's formula, computing φ^n with O(log n) multiplications.
#[must_use]
pub fn fibonacci_power_law(n: u32) -> u64 {
    let (phi, sqrt5) = golden_ratio();
    round_binet(pow_binary(phi, n), sqrt5)
}

/// Power-law calculator with naive exponentiation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerLawNaive;

impl PowerLawNaive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for PowerLawNaive {
    fn calculate(&self, n: u32) -> Result<u64, FibError> {
        Ok(fibonacci_power_law_naive(n))
    }

    fn name(&self) -> &str {
        "fibonacci_power_law_naive"
    }

    fn description(&self) -> &str {
        "Computes the nth Fibonacci number using the power-law solution to \
         the difference equation. Powers are naively computed."
    }
}

/// Power-law calculator with square-and-multiply exponentiation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerLaw;

impl PowerLaw {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for PowerLaw {
    fn calculate(&self, n: u32) -> Result<u64, FibError> {
        Ok(fibonacci_power_law(n))
    }

    fn name(&self) -> &str {
        "fibonacci_power_law"
    }

    fn description(&self) -> &str {
        "Computes the nth Fibonacci number using the power-law solution to \
         the difference equation with fast exponentiation."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIB_TABLE, POWER_LAW_EXACT_MAX, POWER_LAW_NAIVE_EXACT_MAX};

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci_power_law(0), 0);
        assert_eq!(fibonacci_power_law(1), 1);
        assert_eq!(fibonacci_power_law_naive(0), 0);
        assert_eq!(fibonacci_power_law_naive(1), 1);
    }

    #[test]
    fn known_values() {
        assert_eq!(fibonacci_power_law(10), 55);
        assert_eq!(fibonacci_power_law_naive(20), 6765);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn binary_pow_matches_exact_powers_of_two() {
        assert_eq!(pow_binary(2.0, 0), 1.0);
        assert_eq!(pow_binary(2.0, 1), 2.0);
        assert_eq!(pow_binary(2.0, 10), 1024.0);
        assert_eq!(pow_binary(3.0, 5), 243.0);
        assert_eq!(pow_naive(3.0, 5), 243.0);
    }

    #[test]
    fn naive_exact_range() {
        for n in 0..=POWER_LAW_NAIVE_EXACT_MAX {
            assert_eq!(fibonacci_power_law_naive(n), FIB_TABLE[n as usize], "F({n})");
        }
    }

    #[test]
    fn optimized_exact_range() {
        for n in 0..=POWER_LAW_EXACT_MAX {
            assert_eq!(fibonacci_power_law(n), FIB_TABLE[n as usize], "F({n})");
        }
    }

    #[test]
    fn naive_drifts_after_exact_range() {
        let n = POWER_LAW_NAIVE_EXACT_MAX + 1;
        assert_ne!(fibonacci_power_law_naive(n), FIB_TABLE[n as usize]);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(fibonacci_power_law(2_000), u64::MAX);
        assert_eq!(fibonacci_power_law(u32::MAX), u64::MAX);
    }
}
