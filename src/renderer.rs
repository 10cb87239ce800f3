use crate::color::palette::{MOON_SILVER, SUN_GOLD};
use crate::color::Rgb;
use crate::disc::{MOON_DIAMETER, SUN_DIAMETER, paint_disc};
use crate::phase::{Phase, classify};
use crate::strip::map_to_physical;
use crate::time::{DAY_END, DayInstant, EventWindow};

/// Configuration for the sky renderer
#[derive(Debug, Clone, Copy)]
pub struct SkyRendererConfig {
    /// Number of logical pixels in use (at most `MAX_LEDS`)
    pub length: usize,
    /// Seam index where the left strip folds into the right
    pub split: usize,
}

/// Sky renderer - the main orchestrator
///
/// Owns the logical frame and both physical buffers. One call to
/// [`SkyRenderer::render_tick`] rebuilds the whole frame from its time
/// inputs: background fill, celestial disc overlay, physical remap. The
/// output is fully determined by the inputs; no pixel state crosses ticks.
pub struct SkyRenderer<const MAX_LEDS: usize> {
    length: usize,
    split: usize,

    // Internal state
    phase: Phase,
    frame: [Rgb; MAX_LEDS],
    // Both physical strips packed end to end: left in [..split],
    // right in [split..length]
    physical: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> SkyRenderer<MAX_LEDS> {
    /// Create a new renderer for a logical strand split at `config.split`.
    pub fn new(config: &SkyRendererConfig) -> Self {
        let length = config.length.min(MAX_LEDS);
        Self {
            length,
            split: config.split.min(length),
            phase: Phase::LightsOff,
            frame: [Rgb::new(0, 0, 0); MAX_LEDS],
            physical: [Rgb::new(0, 0, 0); MAX_LEDS],
        }
    }

    /// Render one frame.
    ///
    /// Returns the left and right physical buffers, ready for the output
    /// driver. The left buffer is already seam-reversed.
    pub fn render_tick(
        &mut self,
        now: DayInstant,
        sunrise: &EventWindow,
        sunset: &EventWindow,
    ) -> (&[Rgb], &[Rgb]) {
        let frame = &mut self.frame[..self.length];

        let (phase, background) = classify(now, sunrise, sunset);
        self.phase = phase;
        frame.fill(background);

        // Sun sweeps the full daylight arc, the moon takes over for the
        // rest of the evening. An unsynced time source produces zeroed
        // windows; stay dark until it recovers.
        if !sunrise.is_unset() && !sunset.is_unset() {
            if now.minutes >= sunrise.start.minutes && now.minutes < sunset.end.minutes {
                paint_disc(frame, sunrise.start, sunset.end, now, SUN_GOLD, SUN_DIAMETER);
            } else if now.minutes >= sunset.end.minutes && now.minutes < DAY_END.minutes {
                paint_disc(frame, sunset.end, DAY_END, now, MOON_SILVER, MOON_DIAMETER);
            }
        }

        let (left, right) = self.physical[..self.length].split_at_mut(self.split);
        map_to_physical(&self.frame[..self.length], left, right);

        (
            &self.physical[..self.split],
            &self.physical[self.split..self.length],
        )
    }

    /// Phase selected by the most recent tick, for observation and logging.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of logical pixels in use.
    pub const fn length(&self) -> usize {
        self.length
    }
}
