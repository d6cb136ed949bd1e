//! Orchestration interfaces.

use std::time::Duration;

use fibalgo_host::{HostError, HostValue};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a single successful calculation.
    fn present_result(
        &self,
        algorithm: &str,
        n: u32,
        result: &HostValue,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of several runs.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Exposed function name.
    pub algorithm: String,
    /// The returned host value or the host error.
    pub outcome: Result<HostValue, HostError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The value, if the call succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&HostValue> {
        self.outcome.as_ref().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibalgo_core::FibError;

    #[test]
    fn calculation_result_ok() {
        let result = CalculationResult {
            algorithm: "fibonacci_iterative".into(),
            outcome: Ok(HostValue::UInt(55)),
            duration: Duration::from_millis(1),
        };
        assert_eq!(result.value(), Some(&HostValue::UInt(55)));
    }

    #[test]
    fn calculation_result_err() {
        let result = CalculationResult {
            algorithm: "fibonacci_table".into(),
            outcome: Err(HostError::Call(FibError::OutOfRange { n: 94, max: 93 })),
            duration: Duration::ZERO,
        };
        assert!(result.value().is_none());
    }
}
