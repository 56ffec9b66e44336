//! Count-up animation math for headline numbers.
//!
//! The component re-samples every [`COUNTER_TICK_MS`] and shows
//! `floor(progress * target)` until progress reaches 1.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::util::mount_guard::MountGuard;

pub const COUNTER_TICK_MS: u32 = 16;
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 2000.0;

/// Fraction of the animation elapsed, clamped to `[0, 1]`.
///
/// A non-positive or non-finite duration completes immediately.
pub fn counter_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms.is_finite() && duration_ms > 0.0) {
        return 1.0;
    }
    if !elapsed_ms.is_finite() {
        return if elapsed_ms > 0.0 { 1.0 } else { 0.0 };
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Displayed integer at `elapsed_ms`. Never exceeds `target`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn counter_value(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    let progress = counter_progress(elapsed_ms, duration_ms);
    if progress >= 1.0 {
        return target;
    }
    ((progress * target as f64).floor() as u64).min(target)
}

pub fn is_complete(elapsed_ms: f64, duration_ms: f64) -> bool {
    counter_progress(elapsed_ms, duration_ms) >= 1.0
}

/// What the tick loop does after one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTick {
    /// Show the value and sleep another tick.
    Continue(u64),
    /// Show the final value and stop.
    Finished(u64),
    /// Owner unmounted; stop without touching the display.
    Cancelled,
}

/// One iteration of the count-up loop.
pub fn counter_tick(guard: &MountGuard, target: u64, elapsed_ms: f64, duration_ms: f64) -> CounterTick {
    if !guard.is_mounted() {
        return CounterTick::Cancelled;
    }
    let value = counter_value(target, elapsed_ms, duration_ms);
    if is_complete(elapsed_ms, duration_ms) { CounterTick::Finished(value) } else { CounterTick::Continue(value) }
}

/// en-US digit grouping: `1225` -> `"1,225"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
