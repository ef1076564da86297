use super::models::{CountdownPhase, CountdownRender, TimeBreakdown, SECONDS_PER_DAY};

/// One-second countdown state machine over the remaining days of a
/// calculation.
///
/// The engine holds no timer of its own; the embedder owns the cadence
/// and calls `tick` once per second. Ticks never run below zero, and the
/// tick that reaches zero is the one that expires the countdown.
#[derive(Debug, Default)]
pub struct CountdownEngine {
    remaining_seconds: i64,
    phase: CountdownPhase,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any prior countdown with a fresh one of `days_remaining`
    /// whole days and return the starting render. Seeding with no time
    /// left expires immediately without ever entering the running phase.
    pub fn seed(&mut self, days_remaining: i64) -> CountdownRender {
        if days_remaining <= 0 {
            log::debug!(
                "Seeded countdown with {} days; expiring immediately",
                days_remaining
            );
            self.remaining_seconds = 0;
            self.phase = CountdownPhase::Expired;
            return CountdownRender::Expired;
        }

        self.remaining_seconds = days_remaining * SECONDS_PER_DAY;
        self.phase = CountdownPhase::Running;
        log::debug!(
            "Seeded countdown with {} days ({} seconds)",
            days_remaining,
            self.remaining_seconds
        );
        CountdownRender::Remaining(TimeBreakdown::from_seconds(self.remaining_seconds))
    }

    /// Advance the clock by one second. Outside the running phase this is
    /// a no-op that returns the current render unchanged.
    pub fn tick(&mut self) -> CountdownRender {
        if self.phase != CountdownPhase::Running {
            return self.render();
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds == 0 {
            self.phase = CountdownPhase::Expired;
            log::info!("Countdown expired");
            return CountdownRender::Expired;
        }

        CountdownRender::Remaining(TimeBreakdown::from_seconds(self.remaining_seconds))
    }

    /// The current render without advancing the clock.
    pub fn render(&self) -> CountdownRender {
        match self.phase {
            CountdownPhase::Stopped => CountdownRender::Idle,
            CountdownPhase::Running => {
                CountdownRender::Remaining(TimeBreakdown::from_seconds(self.remaining_seconds))
            }
            CountdownPhase::Expired => CountdownRender::Expired,
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    /// Whole days left on the clock.
    pub fn remaining_days(&self) -> i64 {
        self.remaining_seconds / SECONDS_PER_DAY
    }
}
