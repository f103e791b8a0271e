//! Wall-clock countdown behind the redirect toast.
//!
//! The readout is recomputed from a fixed deadline on every tick rather than
//! decremented, so a stalled or throttled interval can never drift the
//! display away from the moment the navigation actually fires.

use std::cell::Cell;
use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::{set_interval_with_handle, set_timeout_with_handle};
use wasm_bindgen::JsValue;

/// Deadline `delay_ms` after `now_ms`, both in epoch milliseconds.
pub fn deadline_after(now_ms: f64, delay_ms: u32) -> f64 {
    now_ms + f64::from(delay_ms)
}

/// Whole seconds left until `deadline_ms`, rounded up, never negative.
/// 2001 ms out reads as 3 seconds; a passed deadline reads as 0.
pub fn remaining_whole_seconds(deadline_ms: f64, now_ms: f64) -> u32 {
    ((deadline_ms - now_ms) / 1000.0).ceil().max(0.0) as u32
}

/// Fraction of the countdown already elapsed, in `0.0..=1.0`.
pub fn progress_ratio(total_seconds: u32, remaining_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 1.0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    (f64::from(elapsed) / f64::from(total_seconds)).clamp(0.0, 1.0)
}

/// A running countdown: a polling interval feeding the readout and a
/// one-shot timeout firing the expiry action.
///
/// Dropping the countdown cancels it, so the arming side only has to stop
/// holding it. Once cancelled nothing fires; the expiry action runs at most
/// once per arm.
pub struct Countdown {
    interval: Option<IntervalHandle>,
    timeout: Option<TimeoutHandle>,
}

impl Countdown {
    /// Start a countdown of `delay_ms`, polling the clock every `tick_ms`.
    ///
    /// `on_tick` receives the whole seconds remaining: once immediately with
    /// the full count, then again whenever the value changes. `on_expire`
    /// runs once when the deadline passes.
    pub fn arm(
        delay_ms: u32,
        tick_ms: u32,
        on_tick: impl Fn(u32) + 'static,
        on_expire: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let now = js_sys::Date::now();
        let deadline = deadline_after(now, delay_ms);
        let initial = remaining_whole_seconds(deadline, now);
        on_tick(initial);

        let last_shown = Cell::new(initial);
        let interval = set_interval_with_handle(
            move || {
                let remaining = remaining_whole_seconds(deadline, js_sys::Date::now());
                // Only re-announce on whole-second changes
                if last_shown.replace(remaining) != remaining {
                    on_tick(remaining);
                }
            },
            Duration::from_millis(u64::from(tick_ms)),
        )?;

        let timeout =
            match set_timeout_with_handle(on_expire, Duration::from_millis(u64::from(delay_ms))) {
                Ok(handle) => handle,
                Err(e) => {
                    interval.clear();
                    return Err(e);
                }
            };

        Ok(Self {
            interval: Some(interval),
            timeout: Some(timeout),
        })
    }

    /// Stop both timers. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.clear();
        }
        if let Some(timeout) = self.timeout.take() {
            timeout.clear();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- remaining seconds ---

    #[test]
    fn test_full_delay_reads_as_whole_seconds() {
        let deadline = deadline_after(10_000.0, 3000);
        assert_eq!(remaining_whole_seconds(deadline, 10_000.0), 3);
    }

    #[test]
    fn test_remaining_rounds_up() {
        assert_eq!(remaining_whole_seconds(3000.0, 999.0), 3);
        assert_eq!(remaining_whole_seconds(3000.0, 1000.0), 2);
        assert_eq!(remaining_whole_seconds(3000.0, 2999.0), 1);
        assert_eq!(remaining_whole_seconds(3000.0, 3000.0), 0);
    }

    #[test]
    fn test_passed_deadline_reads_zero() {
        assert_eq!(remaining_whole_seconds(3000.0, 5000.0), 0);
    }

    #[test]
    fn test_remaining_never_increases_as_time_passes() {
        let deadline = deadline_after(0.0, 3000);
        let mut last = u32::MAX;
        let mut now = 0.0;
        while now < 4000.0 {
            let remaining = remaining_whole_seconds(deadline, now);
            assert!(remaining <= last);
            last = remaining;
            now += 200.0;
        }
        assert_eq!(last, 0);
    }

    // --- progress ---

    #[test]
    fn test_progress_spans_zero_to_one() {
        assert_eq!(progress_ratio(3, 3), 0.0);
        assert_eq!(progress_ratio(3, 0), 1.0);
        assert!((progress_ratio(3, 2) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_progress_clamps_odd_inputs() {
        // More remaining than the total still reads as not started
        assert_eq!(progress_ratio(3, 7), 0.0);
        assert_eq!(progress_ratio(0, 0), 1.0);
    }
}
