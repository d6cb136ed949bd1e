//! FibAlgo — five ways to compute the nth Fibonacci number.

use std::process::ExitCode;

use fibalgo_cli::ui;
use fibalgo_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr so stdout stays machine-readable
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::print_error(&format!("{e:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&e)).unwrap_or(1))
        }
    }
}
