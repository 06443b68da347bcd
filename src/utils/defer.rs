//! Scope-exit guard
//!
//! ```
//! use greeter::defer;
//!
//! let mut log = Vec::new();
//! {
//!     defer! { println!("leaving scope"); }
//!     log.push("body");
//! }
//! assert_eq!(log, ["body"]);
//! ```

/// Runs the wrapped closure when dropped, unless cancelled.
#[must_use = "the closure runs immediately if the guard is not bound"]
pub struct Defer<F: FnOnce()> {
    f: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    pub fn new(f: F) -> Self {
        Self { f: Some(f) }
    }

    /// Disarm the guard.
    pub fn cancel(mut self) {
        self.f = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(f) = self.f.take() {
            f();
        }
    }
}

/// Run the block when the enclosing scope exits, on every path.
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _defer_guard = $crate::utils::defer::Defer::new(|| { $($body)* });
    };
}
