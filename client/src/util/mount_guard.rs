//! Liveness flag shared between a component and the timers it spawns.
//!
//! The component's `on_cleanup` disarms the guard; a timer that wakes up
//! afterwards sees `is_mounted() == false` and drops its action instead of
//! writing to disposed signals.

#[cfg(test)]
#[path = "mount_guard_test.rs"]
mod mount_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Clones share one flag. Starts armed.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the owning component as torn down. Idempotent.
    pub fn disarm(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
