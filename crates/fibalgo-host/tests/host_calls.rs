//! Property tests for argument marshalling through the host module.

use proptest::prelude::*;

use fibalgo_core::fibonacci_iterative;
use fibalgo_host::{HostError, HostModule, HostValue};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every in-range integer literal reaches the algorithm unchanged.
    #[test]
    fn literal_integers_reach_algorithm(n in 0u32..2000) {
        let module = HostModule::default();
        let arg = HostValue::parse_literal(&n.to_string());
        let result = module.call("fibonacci_iterative", &[arg]);
        prop_assert_eq!(result, Ok(HostValue::UInt(fibonacci_iterative(n))));
    }

    /// Negative integers are rejected, never wrapped.
    #[test]
    fn negatives_rejected(n in i64::MIN..0) {
        let module = HostModule::default();
        let result = module.call("fibonacci_power_law", &[HostValue::Int(n)]);
        let rejected = matches!(result, Err(HostError::Argument { .. }));
        prop_assert!(rejected);
    }

    /// Integers above u32::MAX are rejected, never truncated.
    #[test]
    fn too_large_rejected(n in (u64::from(u32::MAX) + 1)..=u64::MAX) {
        let module = HostModule::default();
        let result = module.call("fibonacci_table", &[HostValue::UInt(n)]);
        let rejected = matches!(result, Err(HostError::Argument { .. }));
        prop_assert!(rejected);
    }

    /// Floats are type errors even when integral.
    #[test]
    fn floats_rejected(x in 0.0f64..100.0) {
        let module = HostModule::default();
        let result = module.call("fibonacci_iterative", &[HostValue::Float(x.floor())]);
        let rejected = matches!(result, Err(HostError::Type { found: "float", .. }));
        prop_assert!(rejected);
    }
}
