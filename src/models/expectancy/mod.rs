// Life expectancy reference table
// Fixed (region, gender) pairs in whole years; not user-editable

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Regions covered by the expectancy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    World,
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Australia,
}

/// Genders covered by the expectancy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Region {
    /// All regions, in the order pickers should list them.
    pub const ALL: [Region; 7] = [
        Region::World,
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Australia,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::World => "World",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Australia => "Australia",
        }
    }
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized region: {0}")]
pub struct ParseRegionError(pub String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized gender: {0}")]
pub struct ParseGenderError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept hyphen/underscore spellings so "north-america" works on a
        // command line.
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "world" => Ok(Region::World),
            "africa" => Ok(Region::Africa),
            "asia" => Ok(Region::Asia),
            "europe" => Ok(Region::Europe),
            "north america" => Ok(Region::NorthAmerica),
            "south america" => Ok(Region::SouthAmerica),
            "australia" => Ok(Region::Australia),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// Lookup failure for a (region, gender) pair missing from the table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no life expectancy entry for {region} / {gender}")]
    UnknownKey { region: Region, gender: Gender },
}

/// The full expectancy table. Every `Region::ALL` x `Gender::ALL` pair has
/// an entry.
pub const LIFE_EXPECTANCY_TABLE: &[(Region, Gender, u32)] = &[
    (Region::World, Gender::Male, 70),
    (Region::World, Gender::Female, 75),
    (Region::Africa, Gender::Male, 64),
    (Region::Africa, Gender::Female, 67),
    (Region::Asia, Gender::Male, 72),
    (Region::Asia, Gender::Female, 75),
    (Region::Europe, Gender::Male, 78),
    (Region::Europe, Gender::Female, 83),
    (Region::NorthAmerica, Gender::Male, 76),
    (Region::NorthAmerica, Gender::Female, 81),
    (Region::SouthAmerica, Gender::Male, 72),
    (Region::SouthAmerica, Gender::Female, 79),
    (Region::Australia, Gender::Male, 81),
    (Region::Australia, Gender::Female, 85),
];

/// Expected lifespan in whole years for a (region, gender) pair.
pub fn lookup(region: Region, gender: Gender) -> Result<u32, LookupError> {
    LIFE_EXPECTANCY_TABLE
        .iter()
        .find(|(r, g, _)| *r == region && *g == gender)
        .map(|(_, _, years)| *years)
        .ok_or(LookupError::UnknownKey { region, gender })
}
