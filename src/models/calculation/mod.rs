// Calculation result model
// Immutable snapshot of one life-percentage calculation

/// Outcome of a life-percentage calculation. Produced whole and replaced
/// wholesale by the next calculation, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Share of the expected lifespan already lived, in percent. Stored
    /// unrounded; `display_percentage` rounds for presentation.
    pub percentage_used: f64,
    /// Days lived so far, on a flat 365-day year.
    pub days_lived: i64,
    /// Days left until the expectancy runs out, same 365-day year.
    pub days_remaining: i64,
    /// The expectancy the calculation ran against.
    pub expectancy_years: u32,
}

impl CalculationResult {
    /// Percentage rounded to two decimals, for labels and exports.
    pub fn display_percentage(&self) -> f64 {
        (self.percentage_used * 100.0).round() / 100.0
    }

    /// Progress-bar value: the percentage truncated to a whole number and
    /// clamped to 0..=100. Only this view clamps; the stored percentage
    /// keeps its exact value.
    pub fn progress_percent(&self) -> u8 {
        (self.percentage_used as i64).clamp(0, 100) as u8
    }
}
