//! Platform abstraction layer
//!
//! All functions in this module are stateful. Setup and tear-down go through
//! [`init`] and [`deinit`]; every other platform query is an accessor stored
//! in a global slot so tests can swap in a fixed value.
//!
//! # Key Features
//! - Logical CPU count (`num_cpus`), overridable
//! - Mock accessor for tests ([`init_mock`], [`MockPlatform`])

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// CPU count reported by the mock accessor.
pub const MOCK_CPU_COUNT: usize = 512;

type CpuCountFn = dyn Fn() -> usize + Send + Sync;

struct Accessor(Box<CpuCountFn>);

static CPU_COUNT: Lazy<ArcSwap<Accessor>> =
    Lazy::new(|| ArcSwap::from_pointee(Accessor(Box::new(native_cpu_count))));

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Get the platform name for logging/debugging
pub fn platform_name() -> &'static str {
    #[cfg(unix)]
    return "Unix/Linux";
    #[cfg(windows)]
    return "Windows";
    #[cfg(not(any(unix, windows)))]
    return "Unknown";
}

/// Platform setup. Calling it twice is harmless.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        debug!("Platform already initialized");
        return;
    }
    info!("Initializing platform for {}", platform_name());
}

/// Platform tear-down. No-op when not initialized.
pub fn deinit() {
    if !INITIALIZED.swap(false, Ordering::SeqCst) {
        return;
    }
    info!("Finalizing platform for {}", platform_name());
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Number of logical CPUs, as reported by the installed accessor.
pub fn cpu_count() -> usize {
    (CPU_COUNT.load().0)()
}

/// Logical CPU count detected from the host.
pub fn native_cpu_count() -> usize {
    num_cpus::get()
}

/// Swap the CPU-count accessor.
pub fn set_cpu_count_fn<F>(f: F)
where
    F: Fn() -> usize + Send + Sync + 'static,
{
    CPU_COUNT.store(Arc::new(Accessor(Box::new(f))));
}

/// Install an accessor that always reports `count`.
pub fn set_fixed_cpu_count(count: usize) {
    debug!("CPU count pinned to {}", count);
    set_cpu_count_fn(move || count);
}

/// Restore host detection.
pub fn reset_cpu_count_fn() {
    set_cpu_count_fn(native_cpu_count);
}

/// Re-initialize platform accessors with mock implementations.
pub fn init_mock() {
    set_fixed_cpu_count(MOCK_CPU_COUNT);
}

/// Scoped mock: installs a fixed CPU count and puts the previous accessor
/// back when dropped.
#[must_use = "the mock is removed as soon as the guard is dropped"]
pub struct MockPlatform {
    previous: Arc<Accessor>,
}

impl MockPlatform {
    pub fn install(cpu_count: usize) -> Self {
        let previous = CPU_COUNT.swap(Arc::new(Accessor(Box::new(move || cpu_count))));
        Self { previous }
    }
}

impl Drop for MockPlatform {
    fn drop(&mut self) {
        CPU_COUNT.store(self.previous.clone());
    }
}
