//! Day-phase classification.
//!
//! The day is cut into an ordered table of half-open minute intervals, each
//! carrying a pair of blend endpoints. Classification walks the table in
//! priority order and takes the first interval containing the current
//! minute, so overlapping intervals on degenerate short days resolve by
//! table position rather than special cases.

use heapless::Vec;

use crate::color::palette::{DAWN_PINK, DAY_BLUE, DUSK_PURPLE, NIGHT_BLACK, SUN_ORANGE};
use crate::color::{Rgb, blend_over};
use crate::time::{DAY_END, DayInstant, EventWindow};

/// Minutes of color transition appended after each event window.
const TRANSITION_MINUTES: u32 = 5;

/// Maximum number of rows in the segment table.
pub const MAX_SEGMENTS: usize = 10;

/// Discrete named segment of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LightsOff,
    Sunrise,
    Daylight,
    Sunset,
    Twilight,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LightsOff => "lights_off",
            Self::Sunrise => "sunrise",
            Self::Daylight => "daylight",
            Self::Sunset => "sunset",
            Self::Twilight => "twilight",
        }
    }
}

/// One row of the phase table: a half-open minute interval and the colors
/// blended across it. `from == to` encodes a solid fill.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub phase: Phase,
    pub start: DayInstant,
    pub end: DayInstant,
    pub from: Rgb,
    pub to: Rgb,
}

impl Segment {
    const fn solid(phase: Phase, start: DayInstant, end: DayInstant, color: Rgb) -> Self {
        Self {
            phase,
            start,
            end,
            from: color,
            to: color,
        }
    }

    const fn blend(phase: Phase, start: DayInstant, end: DayInstant, from: Rgb, to: Rgb) -> Self {
        Self {
            phase,
            start,
            end,
            from,
            to,
        }
    }

    /// Minute-granular membership; sub-minute time never affects selection.
    pub const fn contains(&self, now: DayInstant) -> bool {
        now.minutes >= self.start.minutes && now.minutes < self.end.minutes
    }

    /// Background color for an instant inside this segment.
    pub fn background(&self, now: DayInstant) -> Rgb {
        if self.from == self.to {
            return self.from;
        }
        blend_over(self.start, self.end, self.from, self.to, now)
    }
}

/// Build the ordered phase table for one day.
///
/// Row order is the match priority. The purple-to-black fade before
/// midnight is listed ahead of the solid twilight fill so it wins when a
/// short day folds the two together.
pub fn segment_table(sunrise: &EventWindow, sunset: &EventWindow) -> Vec<Segment, MAX_SEGMENTS> {
    let midnight = DayInstant::from_seconds(0);
    let after_sunrise = sunrise.end.saturating_add_minutes(TRANSITION_MINUTES);
    let after_sunset = sunset.end.saturating_add_minutes(TRANSITION_MINUTES);
    let before_midnight = DAY_END.saturating_sub_minutes(TRANSITION_MINUTES);

    let rows = [
        Segment::solid(Phase::LightsOff, midnight, sunrise.start, NIGHT_BLACK),
        Segment::blend(Phase::Sunrise, sunrise.start, sunrise.actual, NIGHT_BLACK, DAWN_PINK),
        Segment::blend(Phase::Sunrise, sunrise.actual, sunrise.end, DAWN_PINK, SUN_ORANGE),
        Segment::blend(Phase::Daylight, sunrise.end, after_sunrise, SUN_ORANGE, DAY_BLUE),
        Segment::solid(Phase::Daylight, after_sunrise, sunset.start, DAY_BLUE),
        Segment::blend(Phase::Sunset, sunset.start, sunset.actual, DAY_BLUE, SUN_ORANGE),
        Segment::blend(Phase::Sunset, sunset.actual, sunset.end, SUN_ORANGE, DAWN_PINK),
        Segment::blend(Phase::Twilight, sunset.end, after_sunset, DAWN_PINK, DUSK_PURPLE),
        Segment::blend(Phase::Twilight, before_midnight, DAY_END, DUSK_PURPLE, NIGHT_BLACK),
        Segment::solid(Phase::Twilight, after_sunset, before_midnight, DUSK_PURPLE),
    ];

    Vec::from_slice(&rows).unwrap_or_default()
}

/// Classify an instant and compute its background color.
///
/// Unsynced (all-zero) event windows short-circuit to lights-off, as does
/// any instant no table row claims.
pub fn classify(now: DayInstant, sunrise: &EventWindow, sunset: &EventWindow) -> (Phase, Rgb) {
    if sunrise.is_unset() || sunset.is_unset() {
        return (Phase::LightsOff, NIGHT_BLACK);
    }

    let table = segment_table(sunrise, sunset);

    for segment in &table {
        if segment.contains(now) {
            return (segment.phase, segment.background(now));
        }
    }

    (Phase::LightsOff, NIGHT_BLACK)
}
