//! The fixed sky palette.
//!
//! Background colors come in pairs of phase-boundary endpoints; the
//! classifier interpolates between them over each segment.

use crate::color::Rgb;

/// Night background, also the lights-off state
pub const NIGHT_BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Horizon pink at the sunrise/sunset moment
pub const DAWN_PINK: Rgb = Rgb {
    r: 253,
    g: 77,
    b: 58,
};

/// Low-sun orange at the outer edge of each event window
pub const SUN_ORANGE: Rgb = Rgb {
    r: 254,
    g: 107,
    b: 2,
};

/// Daylight sky blue
pub const DAY_BLUE: Rgb = Rgb {
    r: 37,
    g: 47,
    b: 108,
};

/// Post-sunset purple
pub const DUSK_PURPLE: Rgb = Rgb {
    r: 34,
    g: 30,
    b: 62,
};

/// Sun disc color. Red channel is fully saturated so the feather ramp is
/// directly visible on it.
pub const SUN_GOLD: Rgb = Rgb {
    r: 255,
    g: 200,
    b: 64,
};

/// Moon disc color
pub const MOON_SILVER: Rgb = Rgb {
    r: 220,
    g: 224,
    b: 232,
};
