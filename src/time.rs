//! Day-local time model.
//!
//! All rendering decisions are made against a [`DayInstant`], a point in the
//! current day expressed both in seconds and in whole minutes since midnight.
//! Phase selection works on minutes; blend fractions work on seconds.

/// Minutes of ramp-up/ramp-down bracketing a sunrise or sunset.
pub const EVENT_BUFFER_MINUTES: u32 = 15;

/// End-of-day boundary, the right edge of the last phase.
pub const DAY_END: DayInstant = DayInstant {
    seconds: 86_400,
    minutes: 1_440,
};

/// A point in the current day.
///
/// Invariant: `minutes == seconds / 60`. Constructed fresh every tick from
/// the time source; an all-zero value is the legal "not yet synced" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayInstant {
    /// Seconds since local midnight
    pub seconds: u32,
    /// Whole minutes since local midnight
    pub minutes: u32,
}

impl DayInstant {
    /// Create an instant from a wall-clock reading.
    pub const fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        let minutes = hour * 60 + minute;
        Self {
            seconds: minutes * 60 + second,
            minutes,
        }
    }

    /// Create an instant on an exact minute boundary.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self {
            seconds: minutes * 60,
            minutes,
        }
    }

    /// Create an instant from seconds since midnight.
    pub const fn from_seconds(seconds: u32) -> Self {
        Self {
            seconds,
            minutes: seconds / 60,
        }
    }

    /// Shift forward by whole minutes, capped at [`DAY_END`].
    pub const fn saturating_add_minutes(self, minutes: u32) -> Self {
        let shifted = self.minutes.saturating_add(minutes);
        if shifted > DAY_END.minutes {
            return DAY_END;
        }
        Self::from_minutes(shifted)
    }

    /// Shift backward by whole minutes, capped at midnight.
    pub const fn saturating_sub_minutes(self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes.saturating_sub(minutes))
    }
}

/// Three-point window bracketing a sunrise or sunset.
///
/// Built once per day from the time source and treated as read-only for the
/// rest of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventWindow {
    /// Start of the ramp, `actual` minus the event buffer
    pub start: DayInstant,
    /// The astronomical event itself
    pub actual: DayInstant,
    /// End of the ramp, `actual` plus the event buffer
    pub end: DayInstant,
}

impl EventWindow {
    /// Bracket an event instant with [`EVENT_BUFFER_MINUTES`] on each side.
    pub const fn around(actual: DayInstant) -> Self {
        Self {
            start: actual.saturating_sub_minutes(EVENT_BUFFER_MINUTES),
            actual,
            end: actual.saturating_add_minutes(EVENT_BUFFER_MINUTES),
        }
    }

    /// Bracket an event given as a wall-clock hour and minute.
    pub const fn from_hm(hour: u32, minute: u32) -> Self {
        Self::around(DayInstant::from_hms(hour, minute, 0))
    }

    /// True for the degenerate all-zero window produced before the time
    /// source has synced.
    ///
    /// The sentinel is `actual == 00:00:00`, so an event landing exactly on
    /// midnight reads as unsynced and keeps the strip dark. Sunrises and
    /// sunsets never fall there at the latitudes this targets; a time source
    /// that could produce one should nudge it to 00:00:01.
    pub const fn is_unset(&self) -> bool {
        self.actual.seconds == 0
    }
}
