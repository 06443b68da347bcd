//! Greeter - a tiny greeting library and CLI
//!
//! The crate is small on purpose; what it shows is how a library can stay
//! silent and testable while still logging and querying the host:
//!
//! # Features
//! - **cli**: the `greeter` binary and its argument parser (default)
//!
//! # Architecture
//! - `greeting`: the greeting function
//! - `logger`: global, swappable log handler slot and ready-made sinks
//! - `platform`: init/deinit plus a swappable CPU-count accessor
//! - `config`: TOML + environment configuration
//! - `errors`: project-wide error enum with status codes
//! - `system`: diagnostics logging setup
//! - `utils`: `defer!` and `check!`
//! - `runtime`: binary startup sequence

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod greeting;
pub mod logger;
pub mod platform;
#[cfg(feature = "cli")]
pub mod runtime;
pub mod system;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod utils;
