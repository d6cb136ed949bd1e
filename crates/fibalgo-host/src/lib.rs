//! # fibalgo-host
//!
//! The host-facing side of FibAlgo. A host interpreter hands over
//! dynamically-typed [`HostValue`]s; [`HostModule`] maps exposed names to
//! [`HostFunction`] adapters that check the single unsigned argument, call
//! the native algorithm, and return the result as a host value.

pub mod adapter;
pub mod error;
pub mod module;
pub mod value;

pub use adapter::{unsigned_arg, HostFunction};
pub use error::HostError;
pub use module::{HostModule, MODULE_NAME};
pub use value::HostValue;
