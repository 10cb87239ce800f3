//! Celestial disc rendering.
//!
//! Sweeps a solid disc with feathered edges across the logical strip as the
//! current instant progresses through an arc window. The disc enters at the
//! high end of the strip and sets toward index 0.

use crate::color::{Rgb, blend_colors};
use crate::time::DayInstant;

/// Default disc diameter in pixels.
pub const SUN_DIAMETER: i32 = 19;
/// Moon uses the same footprint as the sun.
pub const MOON_DIAMETER: i32 = 19;

/// Width of the feathered band inside the disc radius.
const FEATHER_WIDTH: i32 = 3;

/// Progress through the arc, clamped so instants outside the window pin the
/// disc to the nearest arc end instead of running it off into wrapped
/// indices.
fn arc_fraction(start: DayInstant, end: DayInstant, now: DayInstant) -> f32 {
    let duration = end.seconds.saturating_sub(start.seconds);
    if duration == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let elapsed = now.seconds.saturating_sub(start.seconds) as f32;

    #[allow(clippy::cast_precision_loss)]
    let fraction = elapsed / duration as f32;

    fraction.clamp(0.0, 1.0)
}

/// Disc center for a given arc progress.
///
/// The sweep range is extended by one diameter so the disc fully clears
/// both strip ends. Computed in floats and narrowed once; the result may
/// legitimately sit outside the strip near the arc edges.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn disc_center(strip_len: usize, diameter: i32, fraction: f32) -> i32 {
    let sweep = strip_len as f32 + diameter as f32;
    libm::roundf((1.0 - fraction) * sweep) as i32 - diameter / 2
}

/// Paint a disc onto the logical strip over the already-filled background.
///
/// Pixels under the solid core take `color` outright; the three pixels
/// bordering the core on each side ramp down toward the background. Index
/// math is done in `i32` and bounds-checked, so a disc hanging off either
/// strip end paints only its visible part.
pub fn paint_disc(
    leds: &mut [Rgb],
    arc_start: DayInstant,
    arc_end: DayInstant,
    now: DayInstant,
    color: Rgb,
    diameter: i32,
) {
    let fraction = arc_fraction(arc_start, arc_end, now);
    let center = disc_center(leds.len(), diameter, fraction);
    let half = diameter / 2;

    for offset in -half..=half + 1 {
        let Ok(index) = usize::try_from(center + offset) else {
            continue;
        };
        if index >= leds.len() {
            continue;
        }

        if offset.abs() <= half - FEATHER_WIDTH {
            leds[index] = color;
            continue;
        }

        // Linear falloff from the core edge to the outer radius
        let ramp = (half - offset.abs() + 1).max(0);
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let amount = ((ramp * 255) / (FEATHER_WIDTH + 1)).clamp(0, 255) as u8;
        leds[index] = blend_colors(leds[index], color, amount);
    }
}
