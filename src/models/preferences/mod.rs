// Preference models
// Editable tip/quote lists plus the dark-mode flag, with shipped defaults

use rand::seq::SliceRandom;
use thiserror::Error;

/// Health tips shown until the user edits the list.
pub const DEFAULT_HEALTH_TIPS: [&str; 5] = [
    "Drink plenty of water every day.",
    "Exercise regularly to maintain a healthy body.",
    "Eat a balanced diet rich in fruits and vegetables.",
    "Get enough sleep to allow your body to recover.",
    "Avoid smoking and excessive alcohol consumption.",
];

/// Motivational quotes shown until the user edits the list.
pub const DEFAULT_MOTIVATIONAL_QUOTES: [&str; 4] = [
    "The best time to plant a tree was 20 years ago. The second best time is now.",
    "Your time is limited, don't waste it living someone else's life.",
    "The purpose of life is not to be happy. It is to be useful, to be honorable, to be compassionate, to have it make some difference that you have lived and lived well.",
    "Not how long, but how well you have lived is the main thing.",
];

/// Failures while editing or sampling a preference list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferencesError {
    #[error("index {index} is out of range for a list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot pick from an empty list")]
    EmptyList,
}

/// The full user-editable preference state. Owned by the store; edits go
/// through the list helpers so order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesState {
    pub health_tips: Vec<String>,
    pub motivational_quotes: Vec<String>,
    pub dark_mode: bool,
}

impl Default for PreferencesState {
    fn default() -> Self {
        Self {
            health_tips: DEFAULT_HEALTH_TIPS.iter().map(|s| s.to_string()).collect(),
            motivational_quotes: DEFAULT_MOTIVATIONAL_QUOTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dark_mode: false,
        }
    }
}

/// A new list with `text` appended. Empty or duplicate text is accepted;
/// filtering input is the presentation layer's call.
pub fn with_entry_added(list: &[String], text: impl Into<String>) -> Vec<String> {
    let mut updated = list.to_vec();
    updated.push(text.into());
    updated
}

/// A new list with the entry at `index` removed, later entries shifting
/// down by one.
pub fn with_entry_removed(list: &[String], index: usize) -> Result<Vec<String>, PreferencesError> {
    if index >= list.len() {
        return Err(PreferencesError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }
    let mut updated = list.to_vec();
    updated.remove(index);
    Ok(updated)
}

/// A uniformly random entry from `list`.
pub fn pick_random(list: &[String]) -> Result<&str, PreferencesError> {
    list.choose(&mut rand::thread_rng())
        .map(String::as_str)
        .ok_or(PreferencesError::EmptyList)
}
