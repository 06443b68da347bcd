//! System-level modules
//!
//! - Diagnostics logging setup (`tracing`)

pub mod logging;
