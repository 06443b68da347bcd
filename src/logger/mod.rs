//! Log callback slot
//!
//! The library never decides where its log output goes. It holds a single
//! process-wide handler slot that starts out empty, so nothing is written
//! until the application installs a handler.
//!
//! # Usage
//! ```
//! use greeter::{greeter_log, logger};
//!
//! logger::set_handler(logger::log_to_stdout);
//! greeter_log!("answer is {}", 42);
//! logger::clear_handler();
//! ```
//!
//! Handlers receive the formatted message together with the source file and
//! line of the call site. [`sinks`] provides ready-made handlers behind the
//! [`sinks::LogSink`] trait.

pub mod sinks;

use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Shape of a log handler: `(message, file, line)`.
pub type LogHandler = dyn Fn(&str, &str, u32) + Send + Sync;

// arc-swap needs a sized pointee, so the trait object is boxed once more.
struct Slot(Box<LogHandler>);

static ON_LOG: Lazy<ArcSwapOption<Slot>> = Lazy::new(|| ArcSwapOption::from(None));

/// Install `handler`, replacing whatever was installed before.
pub fn set_handler<F>(handler: F)
where
    F: Fn(&str, &str, u32) + Send + Sync + 'static,
{
    ON_LOG.store(Some(Arc::new(Slot(Box::new(handler)))));
}

/// Remove the current handler. Later log calls are dropped.
pub fn clear_handler() {
    ON_LOG.store(None);
}

/// Whether a handler is currently installed.
pub fn is_installed() -> bool {
    ON_LOG.load().is_some()
}

/// Hand a message to the installed handler, if any.
///
/// Prefer [`greeter_log!`](crate::greeter_log), which skips formatting when
/// no handler is present and fills in the call site.
pub fn dispatch(message: &str, file: &str, line: u32) {
    if let Some(slot) = ON_LOG.load_full() {
        (slot.0)(message, file, line);
    }
}

/// The line format shared by all text sinks: `[file:line] message`.
pub fn format_line(message: &str, file: &str, line: u32) -> String {
    format!("[{}:{}] {}", file, line, message)
}

/// Convenience handler printing each message on standard output.
pub fn log_to_stdout(message: &str, file: &str, line: u32) {
    println!("{}", format_line(message, file, line));
}

/// Log through the installed handler.
///
/// The message is only formatted when a handler is installed.
#[macro_export]
macro_rules! greeter_log {
    ($($arg:tt)*) => {
        if $crate::logger::is_installed() {
            $crate::logger::dispatch(
                &::std::format!($($arg)*),
                ::std::file!(),
                ::std::line!(),
            );
        }
    };
}
