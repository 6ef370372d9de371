//! Timing instrumentation for the pointer hot paths.
//!
//! Zero-cost when the `profiling` feature is disabled: the macros expand to
//! nothing but a use of their arguments. With the feature enabled, every
//! instrumented scope emits a `trace` span-style log line with its elapsed
//! time on drop.

#[cfg(feature = "profiling")]
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;

/// RAII timer that logs its scope's elapsed time on drop.
#[cfg(feature = "profiling")]
pub struct ScopedTimer {
    name: &'static str,
    started: Instant,
}

#[cfg(feature = "profiling")]
impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self { name, started: Instant::now() }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        trace!(scope = self.name, elapsed_us = elapsed.as_micros() as u64, "scope timing");
    }
}

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}
