//! Generic adapter between host calls and native calculators.
//!
//! One `HostFunction` wraps any `Calculator`: it unpacks a single unsigned
//! argument, calls the algorithm, and boxes the `u64` result back up.

use std::sync::Arc;

use fibalgo_core::Calculator;

use crate::error::HostError;
use crate::value::HostValue;

const TOO_LARGE: &str = "does not fit in an unsigned 32-bit integer";

/// Extract the single `u32` argument of a call to `function`.
///
/// Only integers are accepted; floats, bools, strings and `None` are type
/// errors, and negative or too-large integers are argument errors. Nothing
/// is coerced.
pub fn unsigned_arg(function: &str, args: &[HostValue]) -> Result<u32, HostError> {
    let [arg] = args else {
        return Err(HostError::Arity {
            function: function.to_string(),
            expected: 1,
            given: args.len(),
        });
    };

    let out_of_range = |reason| HostError::Argument {
        function: function.to_string(),
        value: arg.to_string(),
        reason,
    };

    match arg {
        HostValue::Int(_) | HostValue::UInt(_) => {
            let v = arg.as_i128().unwrap_or_default();
            if v < 0 {
                Err(out_of_range("is negative"))
            } else {
                u32::try_from(v).map_err(|_| out_of_range(TOO_LARGE))
            }
        }
        HostValue::Big(s) if s.starts_with('-') => Err(out_of_range("is negative")),
        HostValue::Big(_) => Err(out_of_range(TOO_LARGE)),
        other => Err(HostError::Type {
            function: function.to_string(),
            found: other.type_name(),
        }),
    }
}

/// A calculator exposed to the host under its exposed name.
#[derive(Clone)]
pub struct HostFunction {
    calculator: Arc<dyn Calculator>,
}

impl HostFunction {
    #[must_use]
    pub fn new(calculator: Arc<dyn Calculator>) -> Self {
        Self { calculator }
    }

    /// Name the host sees.
    #[must_use]
    pub fn name(&self) -> &str {
        self.calculator.name()
    }

    /// Docstring the host sees.
    #[must_use]
    pub fn doc(&self) -> &str {
        self.calculator.description()
    }

    /// Invoke with host arguments.
    pub fn call(&self, args: &[HostValue]) -> Result<HostValue, HostError> {
        let n = unsigned_arg(self.name(), args)?;
        tracing::debug!(function = self.name(), n, "host call");
        let value = self.calculator.calculate(n)?;
        Ok(HostValue::UInt(value))
    }
}

impl std::fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostFunction")
            .field("name", &self.name())
            .finish()
    }
}
