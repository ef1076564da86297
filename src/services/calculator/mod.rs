// Life calculator service
// Combines a resolved age with the expectancy table

use thiserror::Error;

use crate::models::age::ResolvedAge;
use crate::models::calculation::CalculationResult;
use crate::models::expectancy::{lookup, Gender, LookupError, Region};

/// Days per year for the lived/remaining day counts. A deliberate flat
/// approximation; calendar awareness lives in age resolution, not here.
pub const DAYS_PER_YEAR: i64 = 365;

/// Failures while running a calculation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    UnknownKey(#[from] LookupError),
    /// The age lies beyond the table's expectancy. Recoverable: callers
    /// keep whatever result they already had.
    #[error("age {age} exceeds the life expectancy of {expectancy} years")]
    AgeExceedsExpectancy { age: u32, expectancy: u32 },
}

/// Run the life calculation for `age` against the (region, gender) entry
/// of the expectancy table.
///
/// The percentage is stored unrounded. Day counts use the flat
/// `DAYS_PER_YEAR`, so an age equal to the expectancy yields exactly
/// zero remaining days.
pub fn compute(
    age: ResolvedAge,
    region: Region,
    gender: Gender,
) -> Result<CalculationResult, CalcError> {
    let expectancy = lookup(region, gender)?;
    let years = age.years();
    if years > expectancy {
        log::warn!(
            "Rejecting calculation: age {} exceeds expectancy {} for {} / {}",
            years,
            expectancy,
            region,
            gender
        );
        return Err(CalcError::AgeExceedsExpectancy {
            age: years,
            expectancy,
        });
    }

    let percentage_used = f64::from(years) / f64::from(expectancy) * 100.0;
    let days_lived = i64::from(years) * DAYS_PER_YEAR;
    let days_remaining = i64::from(expectancy) * DAYS_PER_YEAR - days_lived;

    Ok(CalculationResult {
        percentage_used,
        days_lived,
        days_remaining,
        expectancy_years: expectancy,
    })
}
