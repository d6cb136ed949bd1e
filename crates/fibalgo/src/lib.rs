//! FibAlgo library — application logic for the command-line host.

pub mod app;
pub mod config;
pub mod errors;
