//! Error handling and exit codes.

use fibalgo_core::calculator::FibError;
use fibalgo_core::constants::exit_codes;
use fibalgo_host::HostError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The recursive algorithm was requested for n above the configured limit.
    #[error("n = {n} exceeds the recursion limit {limit}; raise --recursive-limit to run it anyway")]
    RecursionLimit { n: u32, limit: u32 },

    /// The result file could not be written.
    #[error("failed to write {path}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::OutOfRange { .. } => exit_codes::ERROR_INVALID_INPUT,
        FibError::UnknownAlgorithm(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch | FibError::NoResults => exit_codes::ERROR_GENERIC,
    }
}

/// Map any application error to its exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<HostError>() {
        return match e {
            e if e.is_invalid_input() => exit_codes::ERROR_INVALID_INPUT,
            HostError::Call(inner) => handle_error(inner),
            _ => exit_codes::ERROR_CONFIG,
        };
    }
    if let Some(e) = err.downcast_ref::<FibError>() {
        return handle_error(e);
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::RecursionLimit { .. }) => exit_codes::ERROR_CONFIG,
        Some(AppError::Output { .. }) | None => exit_codes::ERROR_GENERIC,
    }
}
