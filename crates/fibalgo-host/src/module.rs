//! The `fibonacci` host module: an immutable name → function table.

use fibalgo_core::{CalculatorFactory, Registry};

use crate::adapter::HostFunction;
use crate::error::HostError;
use crate::value::HostValue;

/// Name under which hosts import the module.
pub const MODULE_NAME: &str = "fibonacci";

/// Immutable set of host functions, built once and passed to hosts.
#[derive(Debug, Clone)]
pub struct HostModule {
    name: &'static str,
    functions: Vec<HostFunction>,
}

impl HostModule {
    /// Wrap every calculator the factory offers, in its listing order.
    #[must_use]
    pub fn from_registry(factory: &dyn CalculatorFactory) -> Self {
        let functions: Vec<HostFunction> = factory
            .available()
            .into_iter()
            .filter_map(|name| match factory.get(name) {
                Ok(calc) => Some(HostFunction::new(calc)),
                Err(e) => {
                    tracing::warn!(name, error = %e, "calculator listed but not resolvable");
                    None
                }
            })
            .collect();
        tracing::debug!(module = MODULE_NAME, count = functions.len(), "module built");
        Self {
            name: MODULE_NAME,
            functions,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }

    /// All functions, in registration order.
    #[must_use]
    pub fn functions(&self) -> &[HostFunction] {
        &self.functions
    }

    /// Look up a function by its exposed name.
    pub fn function(&self, name: &str) -> Result<&HostFunction, HostError> {
        self.functions
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| HostError::UnknownFunction {
                module: self.name.to_string(),
                name: name.to_string(),
            })
    }

    /// Call `name` with host arguments.
    pub fn call(&self, name: &str, args: &[HostValue]) -> Result<HostValue, HostError> {
        self.function(name)?.call(args)
    }
}

impl Default for HostModule {
    fn default() -> Self {
        Self::from_registry(&Registry::new())
    }
}
