//! CLI result presenter.

use std::time::Duration;

use serde::Serialize;

use fibalgo_host::{HostModule, HostValue};
use fibalgo_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{bit_length, format_duration, format_number, OutputFormat};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    format: OutputFormat,
}

/// JSON line for one successful call.
#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    algorithm: &'a str,
    n: u32,
    value: &'a HostValue,
    duration_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digits: Option<usize>,
}

/// JSON entry in a comparison summary.
#[derive(Debug, Serialize)]
struct ComparisonEntry<'a> {
    algorithm: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a HostValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    duration_us: u64,
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// Bits and decimal digits of an unsigned result.
fn size_of_value(value: &HostValue) -> Option<(u32, usize)> {
    match *value {
        HostValue::UInt(v) => Some((bit_length(v), v.to_string().len())),
        _ => None,
    }
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, format: OutputFormat) -> Self {
        Self {
            verbose,
            quiet,
            format,
        }
    }

    /// Print the module's functions and their docstrings.
    pub fn present_module(&self, module: &HostModule) {
        if self.format == OutputFormat::Json {
            let functions: Vec<serde_json::Value> = module
                .functions()
                .iter()
                .map(|f| serde_json::json!({ "name": f.name(), "doc": f.doc() }))
                .collect();
            let doc = serde_json::json!({ "module": module.name(), "functions": functions });
            println!("{doc}");
            return;
        }

        if !self.quiet {
            ui::print_header(&format!("module {}", module.name()));
        }
        for func in module.functions() {
            if self.quiet {
                println!("{}", func.name());
            } else {
                println!("  {:<28} {}", func.name(), func.doc());
            }
        }
    }

    fn print_json<T: Serialize>(value: &T) {
        match serde_json::to_string(value) {
            Ok(line) => println!("{line}"),
            Err(e) => ui::print_error(&format!("failed to encode JSON: {e}")),
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        n: u32,
        result: &HostValue,
        duration: Duration,
        details: bool,
    ) {
        let size = if details { size_of_value(result) } else { None };

        if self.format == OutputFormat::Json {
            Self::print_json(&ResultRecord {
                algorithm,
                n,
                value: result,
                duration_us: micros(duration),
                bits: size.map(|(bits, _)| bits),
                digits: size.map(|(_, digits)| digits),
            });
            return;
        }

        if self.quiet {
            println!("{result}");
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("N: {}", format_number(u64::from(n)));
        println!("Duration: {}", format_duration(duration));

        if let Some((bits, digits)) = size {
            println!("Result bits: {bits}");
            println!("Result digits: {digits}");
        }

        if self.verbose {
            if let HostValue::UInt(v) = result {
                println!("F({n}) = {} ({v})", format_number(*v));
                return;
            }
        }
        println!("F({n}) = {result}");
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.format == OutputFormat::Json {
            let entries: Vec<ComparisonEntry<'_>> = results
                .iter()
                .map(|r| ComparisonEntry {
                    algorithm: &r.algorithm,
                    value: r.value(),
                    error: r.outcome.as_ref().err().map(ToString::to_string),
                    duration_us: micros(r.duration),
                })
                .collect();
            Self::print_json(&serde_json::json!({ "comparison": entries }));
            return;
        }

        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = match &result.outcome {
                Ok(value) => value.to_string(),
                Err(_) => "ERROR".to_string(),
            };
            println!(
                "  {:<28} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibalgo_core::FibError;
    use fibalgo_host::HostError;

    fn sample_results() -> Vec<CalculationResult> {
        vec![
            CalculationResult {
                algorithm: "fibonacci_iterative".into(),
                outcome: Ok(HostValue::UInt(55)),
                duration: Duration::from_micros(3),
            },
            CalculationResult {
                algorithm: "fibonacci_table".into(),
                outcome: Err(HostError::Call(FibError::OutOfRange { n: 94, max: 93 })),
                duration: Duration::ZERO,
            },
        ]
    }

    #[test]
    fn presenter_flags() {
        let presenter = CLIResultPresenter::new(true, false, OutputFormat::Text);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);
    }

    #[test]
    fn size_of_unsigned_value() {
        assert_eq!(size_of_value(&HostValue::UInt(6765)), Some((13, 4)));
        assert_eq!(size_of_value(&HostValue::None), None);
    }

    #[test]
    fn result_record_json_shape() {
        let value = HostValue::UInt(55);
        let record = ResultRecord {
            algorithm: "fibonacci_table",
            n: 10,
            value: &value,
            duration_us: 7,
            bits: None,
            digits: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"algorithm":"fibonacci_table","n":10,"value":55,"duration_us":7}"#
        );
    }

    #[test]
    fn present_result_text_and_json() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let presenter = CLIResultPresenter::new(false, false, format);
            presenter.present_result(
                "fibonacci_iterative",
                10,
                &HostValue::UInt(55),
                Duration::from_millis(5),
                true,
            );
        }
    }

    #[test]
    fn present_result_quiet_verbose() {
        let presenter = CLIResultPresenter::new(true, true, OutputFormat::Text);
        presenter.present_result(
            "fibonacci_power_law",
            20,
            &HostValue::UInt(6765),
            Duration::from_millis(1),
            false,
        );
    }

    #[test]
    fn present_comparison_with_error() {
        let results = sample_results();
        for format in [OutputFormat::Text, OutputFormat::Json] {
            CLIResultPresenter::new(false, false, format).present_comparison(&results);
        }
    }

    #[test]
    fn present_comparison_empty() {
        CLIResultPresenter::new(false, false, OutputFormat::Text).present_comparison(&[]);
    }

    #[test]
    fn present_module_listing() {
        let module = HostModule::default();
        for format in [OutputFormat::Text, OutputFormat::Json] {
            CLIResultPresenter::new(false, false, format).present_module(&module);
        }
        CLIResultPresenter::new(false, true, OutputFormat::Text).present_module(&module);
    }

    #[test]
    fn present_error_does_not_panic() {
        CLIResultPresenter::new(false, false, OutputFormat::Text).present_error("boom");
    }
}
