//! Constants for table bounds, precision limits, and exit codes.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u32 = 93;

/// Number of entries in [`FIB_TABLE`].
pub const FIB_TABLE_LEN: usize = MAX_FIB_U64 as usize + 1;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; FIB_TABLE_LEN] = {
    let mut table = [0u64; FIB_TABLE_LEN];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < FIB_TABLE_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Largest n for which the naive recursion finishes in well under a second.
pub const RECURSIVE_PRACTICAL_MAX: u32 = 40;

/// Largest n for which the naive power-law formula is exact in `f64`.
pub const POWER_LAW_NAIVE_EXACT_MAX: u32 = 70;

/// Largest n for which the square-and-multiply power-law formula is exact in `f64`.
pub const POWER_LAW_EXACT_MAX: u32 = 75;

/// Default recursion ceiling enforced by hosts.
pub const DEFAULT_RECURSIVE_LIMIT: u32 = RECURSIVE_PRACTICAL_MAX;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Input rejected: wrong type, negative, too large, or out of table range.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
