//! Calculator factory and registry.
//!
//! The registry is built once, holds every algorithm, and is never mutated.
//! Hosts receive it by reference instead of reaching for global state.

use std::sync::Arc;

use crate::algorithm::Algorithm;
use crate::calculator::{Calculator, FibError};

/// Factory trait for looking up calculators by name.
pub trait CalculatorFactory: Send + Sync {
    /// Get a calculator by exposed name or short alias.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available short names.
    fn available(&self) -> Vec<&str>;
}

/// Immutable registry of all five calculators.
pub struct Registry {
    entries: Vec<(Algorithm, Arc<dyn Calculator>)>,
}

impl Registry {
    /// Create a registry holding every algorithm.
    #[must_use]
    pub fn new() -> Self {
        let entries = Algorithm::ALL
            .into_iter()
            .map(|algo| (algo, algo.calculator()))
            .collect();
        Self { entries }
    }

    /// Calculator registered for `algo`.
    #[must_use]
    pub fn calculator(&self, algo: Algorithm) -> Arc<dyn Calculator> {
        self.entries
            .iter()
            .find(|(a, _)| *a == algo)
            .map_or_else(|| algo.calculator(), |(_, calc)| Arc::clone(calc))
    }

}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for Registry {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let algo: Algorithm = name.parse()?;
        tracing::debug!(%algo, "resolved calculator");
        Ok(self.calculator(algo))
    }

    fn available(&self) -> Vec<&str> {
        self.entries.iter().map(|(algo, _)| algo.short_name()).collect()
    }
}
