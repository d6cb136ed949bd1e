//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibalgo_cli::OutputFormat;
use fibalgo_core::{Options, DEFAULT_RECURSIVE_LIMIT};

/// FibAlgo — five ways to compute the nth Fibonacci number.
#[derive(Parser, Debug)]
#[command(name = "fibalgo", version, about)]
pub struct AppConfig {
    /// Fibonacci index, read as a host literal (must be a non-negative integer).
    #[arg(
        short,
        long,
        default_value = "10",
        env = "FIBALGO_N",
        allow_hyphen_values = true
    )]
    pub n: String,

    /// Algorithm to use: iterative, recursive, table, power_law, power_law_naive, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Largest n handed to the recursive algorithm (at least 1).
    #[arg(
        long,
        default_value_t = DEFAULT_RECURSIVE_LIMIT,
        env = "FIBALGO_RECURSIVE_LIMIT",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub recursive_limit: u32,

    /// List the functions exposed by the `fibonacci` module.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether every algorithm was requested.
    #[must_use]
    pub fn runs_all(&self) -> bool {
        self.algo == "all"
    }

    /// Run options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            recursive_limit: self.recursive_limit,
            verbose: self.verbose,
            details: self.details,
        }
    }
}
