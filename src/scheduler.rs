//! Poll-driven tick scheduling.
//!
//! The sky is re-evaluated on a fixed polling interval, not an animation
//! clock. The scheduler refreshes the day instant every tick, refreshes the
//! sunrise/sunset windows once per detected midnight crossing, runs the
//! renderer, and hands the frame to the output driver. The caller is
//! responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::renderer::SkyRenderer;
use crate::time::{DayInstant, EventWindow};
use crate::{StripOutput, TimeSource};

/// Default polling interval (5 seconds).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Poll scheduler that manages tick timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = SkyScheduler::new(renderer, time_source, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct SkyScheduler<T: TimeSource, O: StripOutput, const MAX_LEDS: usize> {
    time: T,
    output: O,
    renderer: SkyRenderer<MAX_LEDS>,

    // Daily snapshot, refreshed at the midnight crossing
    sunrise: EventWindow,
    sunset: EventWindow,
    last_instant: DayInstant,

    next_tick: Instant,
    poll_interval: Duration,
}

impl<T: TimeSource, O: StripOutput, const MAX_LEDS: usize> SkyScheduler<T, O, MAX_LEDS> {
    /// Create a new scheduler polling at [`DEFAULT_POLL_INTERVAL`].
    ///
    /// Queries the time source once for the initial sunrise/sunset windows.
    pub fn new(renderer: SkyRenderer<MAX_LEDS>, time: T, output: O) -> Self {
        Self::with_poll_interval(renderer, time, output, DEFAULT_POLL_INTERVAL)
    }

    /// Create a new scheduler with a custom polling interval.
    pub fn with_poll_interval(
        renderer: SkyRenderer<MAX_LEDS>,
        mut time: T,
        output: O,
        poll_interval: Duration,
    ) -> Self {
        let sunrise = time.sunrise_window();
        let sunset = time.sunset_window();
        Self {
            time,
            output,
            renderer,
            sunrise,
            sunset,
            last_instant: DayInstant::default(),
            next_tick: Instant::from_millis(0),
            poll_interval,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// Snapshots the day instant and event windows up front, so the
    /// classifier and the disc renderer always see the same values within
    /// a tick. The caller waits until `next_deadline` before calling
    /// `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.poll_interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        let day_now = self.time.current_instant();
        self.refresh_windows(day_now);

        #[cfg(feature = "esp32-log")]
        let previous_phase = self.renderer.phase();

        let (left, right) = self.renderer.render_tick(day_now, &self.sunrise, &self.sunset);
        self.output.present(left, right);

        #[cfg(feature = "esp32-log")]
        if self.renderer.phase() != previous_phase {
            println!("sky phase: {}", self.renderer.phase().as_str());
        }

        self.last_instant = day_now;

        // Calculate next tick deadline
        self.next_tick += self.poll_interval;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Re-query sunrise/sunset when the day instant rolls backwards across
    /// midnight, or while the cached windows are still the unsynced zeros.
    fn refresh_windows(&mut self, day_now: DayInstant) {
        let crossed_midnight = day_now.seconds < self.last_instant.seconds;
        if crossed_midnight || self.sunrise.is_unset() || self.sunset.is_unset() {
            self.sunrise = self.time.sunrise_window();
            self.sunset = self.time.sunset_window();
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &SkyRenderer<MAX_LEDS> {
        &self.renderer
    }

    /// Sunrise window in effect for the current day.
    pub const fn sunrise(&self) -> EventWindow {
        self.sunrise
    }

    /// Sunset window in effect for the current day.
    pub const fn sunset(&self) -> EventWindow {
        self.sunset
    }
}
