#![no_main]

use libfuzzer_sys::fuzz_target;

use fibalgo_core::{
    fibonacci_iterative, fibonacci_power_law, fibonacci_power_law_naive, fibonacci_recursive,
    fibonacci_table, FibError, MAX_FIB_U64, POWER_LAW_NAIVE_EXACT_MAX,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as n, capped at 10000 for speed
    let n = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 10_000;

    let iterative = fibonacci_iterative(n);

    match fibonacci_table(n) {
        Ok(v) => assert_eq!(v, iterative, "table != iterative at n={n}"),
        Err(FibError::OutOfRange { .. }) => assert!(n > MAX_FIB_U64),
        Err(e) => panic!("unexpected table error at n={n}: {e}"),
    }

    if n <= POWER_LAW_NAIVE_EXACT_MAX {
        assert_eq!(fibonacci_power_law(n), iterative, "power_law != iterative at n={n}");
        assert_eq!(fibonacci_power_law_naive(n), iterative, "naive != iterative at n={n}");
    }

    if n <= 20 {
        assert_eq!(fibonacci_recursive(n), iterative, "recursive != iterative at n={n}");
    }
});
