//! Errors raised at the host boundary.

use fibalgo_core::FibError;

/// Error returned to the host for a rejected or failed call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Wrong number of positional arguments.
    #[error("{function}() takes exactly {expected} argument ({given} given)")]
    Arity {
        function: String,
        expected: usize,
        given: usize,
    },

    /// Argument is not an integer at all.
    #[error("{function}() argument must be a non-negative integer, not {found}")]
    Type {
        function: String,
        found: &'static str,
    },

    /// Argument is an integer but not representable as `u32`.
    #[error("{function}() argument {value} {reason}")]
    Argument {
        function: String,
        value: String,
        reason: &'static str,
    },

    /// No function with that name in the module.
    #[error("module '{module}' has no function '{name}'")]
    UnknownFunction { module: String, name: String },

    /// The algorithm itself rejected the input.
    #[error(transparent)]
    Call(#[from] FibError),
}

impl HostError {
    /// Whether the error is a rejection of the caller's input, as opposed
    /// to a lookup failure.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Arity { .. }
                | Self::Type { .. }
                | Self::Argument { .. }
                | Self::Call(FibError::OutOfRange { .. })
        )
    }
}
