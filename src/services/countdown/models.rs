use std::fmt;

/// Seconds in one countdown day.
pub const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;

/// Lifecycle phase of the countdown state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    /// No countdown has been seeded yet.
    Stopped,
    /// Counting down one second per tick.
    Running,
    /// Reached zero; terminal until the next seed.
    Expired,
}

impl Default for CountdownPhase {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeBreakdown {
    /// Split a second count into whole days, then hours, minutes and
    /// seconds of the remainder. Negative input clamps to zero.
    pub fn from_seconds(total_seconds: i64) -> Self {
        let total = total_seconds.max(0);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// The second count this breakdown was split from.
    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// What a presentation layer should show after a seed or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownRender {
    /// Nothing seeded yet; show an empty clock.
    Idle,
    /// Time still on the clock.
    Remaining(TimeBreakdown),
    /// The countdown has run out.
    Expired,
}

impl fmt::Display for CountdownRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownRender::Idle => Ok(()),
            CountdownRender::Remaining(breakdown) => write!(f, "{}", breakdown),
            CountdownRender::Expired => write!(f, "Expired"),
        }
    }
}
