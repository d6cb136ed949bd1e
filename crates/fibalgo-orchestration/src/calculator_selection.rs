//! Function selection logic.

use fibalgo_core::{Algorithm, FibError};
use fibalgo_host::{HostFunction, HostModule};

/// Get the host functions to run for an `--algo` selection.
///
/// `all` selects every function in module order; anything else is parsed
/// as a single algorithm name (short or exposed form).
pub fn get_functions_to_run<'m>(
    algo: &str,
    module: &'m HostModule,
) -> Result<Vec<&'m HostFunction>, FibError> {
    match algo {
        "all" => Ok(module.functions().iter().collect()),
        name => {
            let algorithm: Algorithm = name.parse()?;
            let func = module
                .function(algorithm.exposed_name())
                .map_err(|_| FibError::UnknownAlgorithm(name.to_string()))?;
            Ok(vec![func])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let module = HostModule::default();
        let funcs = get_functions_to_run("all", &module).unwrap();
        assert_eq!(funcs.len(), 5);
    }

    #[test]
    fn select_single_short_name() {
        let module = HostModule::default();
        let funcs = get_functions_to_run("power_law_naive", &module).unwrap();
        assert_eq!(funcs.len(), 1);
        assert_eq!(funcs[0].name(), "fibonacci_power_law_naive");
    }

    #[test]
    fn select_single_exposed_name() {
        let module = HostModule::default();
        let funcs = get_functions_to_run("fibonacci_table", &module).unwrap();
        assert_eq!(funcs[0].name(), "fibonacci_table");
    }

    #[test]
    fn select_unknown() {
        let module = HostModule::default();
        let result = get_functions_to_run("unknown", &module);
        assert!(matches!(result, Err(FibError::UnknownAlgorithm(_))));
    }
}
