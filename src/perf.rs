//! Performance monitoring utilities.
//!
//! Pointer moves arrive at display rate (60+ per second) and each one runs an
//! engine pass, so the hot paths carry lightweight instrumentation.
//!
//! ## Features
//!
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Per-operation statistics**: rolling average, p95 and max per operation
//! - **Conditional compilation**: `profile_scope!` is zero-cost when the
//!   `profiling` feature is disabled
//!
//! ## Usage
//!
//! ```ignore
//! use drag_resize::profile_scope;
//!
//! fn pointer_move() {
//!     profile_scope!("pointer_move");
//!     // ... engine call ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::{debug, warn};

// ============================================================================
// Constants
// ============================================================================

/// Number of samples to keep for operation statistics
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Operation Statistics
// ============================================================================

/// Statistics for a specific operation type.
#[derive(Debug, Clone)]
pub struct OperationStats {
    /// Recent timing samples in milliseconds
    samples: VecDeque<f64>,
    /// Total invocation count
    count: u64,
    /// Maximum observed time
    max_ms: f64,
    /// Running sum of the retained samples
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Get the average time over recent samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// Get the p95 (95th percentile) time.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    /// Largest sample ever recorded
    pub fn max(&self) -> f64 {
        self.max_ms
    }

    /// Total number of recorded invocations
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Per-element timing of pointer handling, keyed by operation name.
#[derive(Debug, Default, Clone)]
pub struct InteractionStats {
    operations: HashMap<&'static str, OperationStats>,
}

impl InteractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an operation timing, warning when it blows `budget_ms`.
    pub fn record(&mut self, name: &'static str, elapsed_ms: f64, budget_ms: f64) {
        self.operations.entry(name).or_default().record(elapsed_ms);
        if elapsed_ms > budget_ms {
            warn!(
                operation = name,
                elapsed_ms = format!("{:.3}", elapsed_ms),
                budget_ms = format!("{:.3}", budget_ms),
                "Pointer handling over budget"
            );
        }
    }

    /// Get statistics for a specific operation.
    pub fn get(&self, name: &str) -> Option<&OperationStats> {
        self.operations.get(name)
    }

    /// Log a one-line summary per operation.
    pub fn log_summary(&self) {
        for (name, stats) in &self.operations {
            debug!(
                "{}: avg={:.3}ms, p95={:.3}ms, max={:.3}ms, count={}",
                name,
                stats.average(),
                stats.p95(),
                stats.max_ms,
                stats.count
            );
        }
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        self.operations.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs its duration on drop when over threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (lower threshold, 0.1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.1)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.3}", elapsed_ms),
            threshold_ms = format!("{:.3}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
