// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jun 1, 2024 (an ordinary day)
    pub fn jun_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Returns Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Mar 1, 2024 (the day after leap day)
    pub fn mar_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Returns Mar 1, 2000 (birthdate for the leap-boundary cases)
    pub fn mar_1_2000() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 3, 1).unwrap()
    }
}

/// Sample age inputs for testing
pub mod inputs {
    use super::dates;
    use shortlife_clock::models::age::AgeInput;

    /// A valid manual entry of 23 years
    pub fn manual_23() -> AgeInput {
        AgeInput::Manual("23".to_string())
    }

    /// A manual entry that fails whole-number validation
    pub fn manual_fractional() -> AgeInput {
        AgeInput::Manual("42.5".to_string())
    }

    /// A birthdate right on the leap boundary
    pub fn leap_boundary_birthdate() -> AgeInput {
        AgeInput::Birthdate(dates::mar_1_2000())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::jun_1_2024().year(), 2024);
        assert_eq!(dates::leap_day_2024().day(), 29);
        assert_eq!(dates::mar_1_2024().month(), 3);
        assert_eq!(dates::mar_1_2000().year(), 2000);
    }

    #[test]
    fn test_fixture_inputs_are_valid() {
        assert!(inputs::manual_23().resolve(dates::jun_1_2024()).is_ok());
        assert!(inputs::manual_fractional()
            .resolve(dates::jun_1_2024())
            .is_err());
        assert!(inputs::leap_boundary_birthdate()
            .resolve(dates::jun_1_2024())
            .is_ok());
    }
}
