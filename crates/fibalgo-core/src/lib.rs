//! # fibalgo-core
//!
//! Five ways to compute the nth Fibonacci number with the host-facing
//! signature `u32 -> u64`: iterative summation, naive recursion, table
//! lookup, and Binet's power-law formula with naive or fast exponentiation.
//!
//! Integer algorithms wrap modulo 2^64 past F(93). Power-law algorithms
//! lose precision past F(70) / F(75) and saturate once φ^n overflows.

pub mod algorithm;
pub mod calculator;
pub mod constants;
pub mod iterative;
pub mod options;
pub mod power_law;
pub mod recursive;
pub mod registry;
pub mod table;

// Re-exports
pub use algorithm::Algorithm;
pub use calculator::{Calculator, FibError};
pub use constants::{
    exit_codes, DEFAULT_RECURSIVE_LIMIT, FIB_TABLE, FIB_TABLE_LEN, MAX_FIB_U64,
    POWER_LAW_EXACT_MAX, POWER_LAW_NAIVE_EXACT_MAX, RECURSIVE_PRACTICAL_MAX,
};
pub use iterative::fibonacci_iterative;
pub use options::Options;
pub use power_law::{fibonacci_power_law, fibonacci_power_law_naive};
pub use recursive::fibonacci_recursive;
pub use registry::{CalculatorFactory, Registry};
pub use table::fibonacci_table;
