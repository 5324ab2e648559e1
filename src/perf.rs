//! Hot-path timing instrumentation.
//!
//! Pointer updates arrive 60+ times per second during a drag, so the drag
//! path carries opt-in scope timers. Enable with the `profiling` feature:
//!
//! ```toml
//! [dependencies]
//! cartboard = { features = ["profiling"] }
//! ```
//!
//! The `profile_scope!` macro is zero-cost when the feature is disabled.

use std::time::Instant;
use tracing::{trace, warn};

/// Default per-scope warning threshold. A single pointer update taking a
/// meaningful slice of a 60fps frame budget is worth flagging.
pub const DEFAULT_WARN_MS: f64 = 4.0;

/// Time a scope with the given name. Zero-cost when profiling is disabled.
///
/// ```ignore
/// fn pointer_update(...) {
///     profile_scope!("pointer_update");
///     // ... per-frame work ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_WARN_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII scope timer: logs a trace line on drop, upgraded to a warning when
/// the scope overruns its threshold.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > self.threshold_ms {
            warn!(scope = self.name, elapsed_ms, "slow scope");
        } else {
            trace!(scope = self.name, elapsed_ms, "scope timing");
        }
    }
}
