// Date utility functions

use chrono::{Datelike, NaiveDate};

/// Whole calendar years elapsed from `start` to `end`.
///
/// A year counts only once its anniversary has been reached: when `end`'s
/// (month, day) sits before `start`'s, the raw year difference is reduced
/// by one. A Feb 29 anniversary therefore completes on Mar 1 in common
/// years.
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}
