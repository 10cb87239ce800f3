//! Color blending, plain and time-driven.

use crate::color::Rgb;
use crate::math8::blend8;
use crate::time::DayInstant;

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Interpolate between two colors over a time range.
///
/// The fraction is second-granular and clamped to `[0, 1]`, so a `now`
/// outside the range pins to the nearest endpoint instead of wrapping.
/// A zero-length range returns `from`; range endpoints coinciding is a
/// caller contract violation handled without dividing by zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn blend_over(
    start: DayInstant,
    end: DayInstant,
    from: Rgb,
    to: Rgb,
    now: DayInstant,
) -> Rgb {
    let duration = end.seconds.saturating_sub(start.seconds);
    if duration == 0 {
        return from;
    }

    let elapsed = now.seconds.saturating_sub(start.seconds) as f32;
    let fraction = (elapsed / duration as f32).clamp(0.0, 1.0);
    let amount = libm::roundf(fraction * 255.0) as u8;

    blend_colors(from, to, amount)
}
