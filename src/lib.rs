#![no_std]

pub mod color;
pub mod disc;
pub mod math8;
pub mod phase;
pub mod renderer;
pub mod scheduler;
pub mod strip;
pub mod time;

pub use color::{Rgb, blend_colors, blend_over};
pub use disc::{MOON_DIAMETER, SUN_DIAMETER, paint_disc};
pub use phase::{Phase, Segment, classify, segment_table};
pub use renderer::{SkyRenderer, SkyRendererConfig};
pub use scheduler::{DEFAULT_POLL_INTERVAL, SkyScheduler, TickResult};
pub use strip::{LEFT_PIXEL_LENGTH, LOGICAL_LENGTH, RIGHT_PIXEL_LENGTH, map_to_physical};
pub use time::{DAY_END, DayInstant, EVENT_BUFFER_MINUTES, EventWindow};

pub use embassy_time::{Duration, Instant};

/// Abstract wall-clock source
///
/// Implement this trait to supply real time. The scheduler queries the
/// current instant every tick and the sunrise/sunset windows once per day;
/// return zeroed values while unsynced and the sky stays dark.
pub trait TimeSource {
    /// Current time within the day
    fn current_instant(&mut self) -> DayInstant;

    /// Today's sunrise window
    fn sunrise_window(&mut self) -> EventWindow;

    /// Today's sunset window
    fn sunset_window(&mut self) -> EventWindow;
}

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// Receives both physical buffers, already seam-folded; fire-and-forget.
pub trait StripOutput {
    /// Push a frame to the two physical strips
    fn present(&mut self, left: &[Rgb], right: &[Rgb]);
}
