//! Algorithm identifiers and name parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::calculator::{Calculator, FibError};
use crate::iterative::Iterative;
use crate::power_law::{PowerLaw, PowerLawNaive};
use crate::recursive::Recursive;
use crate::table::TableLookup;

/// The five Fibonacci algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Iterative,
    PowerLaw,
    PowerLawNaive,
    Recursive,
    Table,
}

impl Algorithm {
    /// All algorithms, in registration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Iterative,
        Algorithm::PowerLaw,
        Algorithm::PowerLawNaive,
        Algorithm::Recursive,
        Algorithm::Table,
    ];

    /// Name exposed to hosts, e.g. `fibonacci_power_law`.
    #[must_use]
    pub fn exposed_name(self) -> &'static str {
        match self {
            Self::Iterative => "fibonacci_iterative",
            Self::PowerLaw => "fibonacci_power_law",
            Self::PowerLawNaive => "fibonacci_power_law_naive",
            Self::Recursive => "fibonacci_recursive",
            Self::Table => "fibonacci_table",
        }
    }

    /// Short alias used on the command line, e.g. `power_law`.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        self.exposed_name()
            .strip_prefix("fibonacci_")
            .unwrap_or(self.exposed_name())
    }

    /// Build the calculator for this algorithm.
    #[must_use]
    pub fn calculator(self) -> Arc<dyn Calculator> {
        match self {
            Self::Iterative => Arc::new(Iterative::new()),
            Self::PowerLaw => Arc::new(PowerLaw::new()),
            Self::PowerLawNaive => Arc::new(PowerLawNaive::new()),
            Self::Recursive => Arc::new(Recursive::new()),
            Self::Table => Arc::new(TableLookup::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Algorithm {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.exposed_name() == name || a.short_name() == name)
            .ok_or_else(|| FibError::UnknownAlgorithm(name.to_string()))
    }
}
