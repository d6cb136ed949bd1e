//! Application entry point and dispatch.
//!
//! The binary acts as the host interpreter: `-n` arrives as text, is read
//! as a host literal, and goes through the same adapter any host would use.

use anyhow::Result;

use fibalgo_cli::output::write_to_file;
use fibalgo_cli::presenter::CLIResultPresenter;
use fibalgo_cli::ui;
use fibalgo_core::{Options, Registry};
use fibalgo_host::{unsigned_arg, HostError, HostFunction, HostModule, HostValue};
use fibalgo_orchestration::calculator_selection::get_functions_to_run;
use fibalgo_orchestration::interfaces::ResultPresenter;
use fibalgo_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibalgo_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let registry = Registry::new();
    let module = HostModule::from_registry(&registry);
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.format);

    if config.list {
        presenter.present_module(&module);
        return Ok(());
    }

    run_cli(config, &module, &presenter)
}

/// Read `-n` as a host literal and check it as the single unsigned argument.
pub fn resolve_argument(
    config: &AppConfig,
    module: &HostModule,
) -> Result<(HostValue, u32), HostError> {
    let arg = HostValue::parse_literal(&config.n);
    let n = unsigned_arg(module.name(), std::slice::from_ref(&arg))?;
    Ok((arg, n))
}

/// Drop or refuse the recursive algorithm when n is above the limit.
fn apply_recursive_limit(
    functions: &mut Vec<&HostFunction>,
    n: u32,
    opts: &Options,
    runs_all: bool,
) -> Result<(), AppError> {
    if opts.allows_recursive(n) {
        return Ok(());
    }
    let recursive = fibalgo_core::Algorithm::Recursive.exposed_name();
    if !functions.iter().any(|f| f.name() == recursive) {
        return Ok(());
    }
    if !runs_all {
        return Err(AppError::RecursionLimit {
            n,
            limit: opts.recursive_limit,
        });
    }

    tracing::debug!(n, limit = opts.recursive_limit, "skipping recursive algorithm");
    ui::print_warning(&format!(
        "skipping {recursive}: n = {n} exceeds the recursion limit {}",
        opts.recursive_limit
    ));
    functions.retain(|f| f.name() != recursive);
    Ok(())
}

fn run_cli(config: &AppConfig, module: &HostModule, presenter: &CLIResultPresenter) -> Result<()> {
    let opts = config.options();

    // Reject bad input before anything is computed
    let (arg, n) = resolve_argument(config, module)?;

    let mut functions = get_functions_to_run(&config.algo, module)?;
    apply_recursive_limit(&mut functions, n, &opts, config.runs_all())?;

    let results = execute_calculations(&functions, std::slice::from_ref(&arg));

    // A single requested function fails the whole run
    if let [only] = results.as_slice() {
        if let Err(e) = &only.outcome {
            return Err(e.clone().into());
        }
    }

    // Analyze results
    if results.len() > 1 {
        if let Err(e) = analyze_comparison_results(&results) {
            tracing::debug!(n, error = %e, "algorithms disagree");
            ui::print_warning(&format!("{e} for n = {n}"));
        }
    }

    // Present results
    for result in &results {
        match &result.outcome {
            Ok(value) => presenter.present_result(
                &result.algorithm,
                n,
                value,
                result.duration,
                opts.details,
            ),
            Err(error) => presenter.present_error(&format!("{}: {error}", result.algorithm)),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(value) = results.iter().find_map(|r| r.value()) {
            write_to_file(path, value).map_err(|source| AppError::Output {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path, "result written");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["fibalgo"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn resolve_valid_literal() {
        let module = HostModule::default();
        let (arg, n) = resolve_argument(&config(&["-n", "42"]), &module).unwrap();
        assert_eq!(arg, HostValue::Int(42));
        assert_eq!(n, 42);
    }

    #[test]
    fn resolve_rejects_negative_and_float() {
        let module = HostModule::default();
        assert!(matches!(
            resolve_argument(&config(&["-n", "-5"]), &module),
            Err(HostError::Argument { .. })
        ));
        assert!(matches!(
            resolve_argument(&config(&["-n", "3.0"]), &module),
            Err(HostError::Type { found: "float", .. })
        ));
    }

    #[test]
    fn recursive_limit_skips_when_running_all() {
        let module = HostModule::default();
        let mut funcs: Vec<&HostFunction> = module.functions().iter().collect();
        let opts = Options {
            recursive_limit: 20,
            ..Options::default()
        };
        apply_recursive_limit(&mut funcs, 21, &opts, true).unwrap();
        assert_eq!(funcs.len(), 4);
        assert!(funcs.iter().all(|f| f.name() != "fibonacci_recursive"));
    }

    #[test]
    fn recursive_limit_refuses_single_request() {
        let module = HostModule::default();
        let mut funcs = vec![module.function("fibonacci_recursive").unwrap()];
        let opts = Options {
            recursive_limit: 20,
            ..Options::default()
        };
        assert!(matches!(
            apply_recursive_limit(&mut funcs, 21, &opts, false),
            Err(AppError::RecursionLimit { n: 21, limit: 20 })
        ));
        assert!(apply_recursive_limit(&mut funcs, 20, &opts, false).is_ok());
    }

    #[test]
    fn run_list_and_small_n() {
        assert!(run(&config(&["--list"])).is_ok());
        assert!(run(&config(&["-n", "10", "-q"])).is_ok());
    }

    #[test]
    fn run_table_out_of_range_fails() {
        let err = run(&config(&["-n", "94", "--algo", "table"])).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 2);
    }
}
