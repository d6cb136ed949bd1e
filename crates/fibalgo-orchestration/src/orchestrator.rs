//! Core orchestration: sequential execution and result analysis.

use std::time::Instant;

use fibalgo_core::FibError;
use fibalgo_host::{HostFunction, HostValue};

use crate::interfaces::CalculationResult;

/// Call every selected function with the same host arguments, one after another.
pub fn execute_calculations(
    functions: &[&HostFunction],
    args: &[HostValue],
) -> Vec<CalculationResult> {
    functions
        .iter()
        .map(|func| {
            let start = Instant::now();
            let outcome = func.call(args);
            let duration = start.elapsed();

            match &outcome {
                Ok(value) => {
                    tracing::debug!(function = func.name(), %value, ?duration, "call complete");
                }
                Err(e) => tracing::debug!(function = func.name(), error = %e, "call failed"),
            }

            CalculationResult {
                algorithm: func.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(CalculationResult::value);

    let Some(first_value) = values.next() else {
        return Err(FibError::NoResults);
    };

    // Compare all results to the first valid one
    if values.any(|v| v != first_value) {
        return Err(FibError::Mismatch);
    }

    Ok(())
}
