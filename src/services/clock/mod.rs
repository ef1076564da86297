//! Clock orchestration.
//!
//! `LifeClockService` runs the full pipeline: resolve the age source,
//! compute against the expectancy table, then re-seed the countdown from
//! the result's remaining days. A failed run commits nothing; the
//! previous result and countdown stay in place.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::models::age::{AgeError, AgeInput};
use crate::models::calculation::CalculationResult;
use crate::models::expectancy::{Gender, Region};
use crate::services::calculator::{self, CalcError, DAYS_PER_YEAR};
use crate::services::countdown::{CountdownEngine, CountdownRender};

/// Anything the calculation pipeline can reject.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error(transparent)]
    Age(#[from] AgeError),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// How the remaining span should be presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemainingDisplay {
    /// Whole days left on the countdown.
    Days(i64),
    /// Remaining life as a share of the expected total, in percent.
    Percentage(f64),
}

pub struct LifeClockService {
    engine: CountdownEngine,
    last_result: Option<CalculationResult>,
}

impl Default for LifeClockService {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeClockService {
    pub fn new() -> Self {
        Self {
            engine: CountdownEngine::new(),
            last_result: None,
        }
    }

    /// Run the pipeline for `input` as of `today`. On success the result
    /// replaces the previous one and the countdown restarts from its
    /// remaining days.
    pub fn recalculate(
        &mut self,
        input: &AgeInput,
        region: Region,
        gender: Gender,
        today: NaiveDate,
    ) -> Result<CalculationResult, ClockError> {
        let age = input.resolve(today)?;
        let result = calculator::compute(age, region, gender)?;

        log::info!(
            "Calculated {:.2}% of life used for {} / {}: {} days lived, {} remaining",
            result.percentage_used,
            region,
            gender,
            result.days_lived,
            result.days_remaining
        );

        self.engine.seed(result.days_remaining);
        self.last_result = Some(result);
        Ok(result)
    }

    /// `recalculate` against the local calendar date.
    pub fn recalculate_now(
        &mut self,
        input: &AgeInput,
        region: Region,
        gender: Gender,
    ) -> Result<CalculationResult, ClockError> {
        self.recalculate(input, region, gender, Local::now().date_naive())
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> CountdownRender {
        self.engine.tick()
    }

    /// The countdown's current render, without advancing it.
    pub fn render(&self) -> CountdownRender {
        self.engine.render()
    }

    /// The most recent committed result, if any calculation has succeeded.
    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }

    pub fn engine(&self) -> &CountdownEngine {
        &self.engine
    }

    /// The remaining span for display, either as whole days or as the
    /// share of the expected lifespan still ahead. `None` until a
    /// calculation has committed.
    pub fn remaining_display(&self, show_percentage: bool) -> Option<RemainingDisplay> {
        let result = self.last_result.as_ref()?;
        let remaining_days = self.engine.remaining_days();
        if show_percentage {
            let total_days = i64::from(result.expectancy_years) * DAYS_PER_YEAR;
            let percentage = remaining_days as f64 / total_days as f64 * 100.0;
            Some(RemainingDisplay::Percentage(percentage))
        } else {
            Some(RemainingDisplay::Days(remaining_days))
        }
    }
}
