//! Persisted user preferences.
//!
//! The store keeps the editable tip/quote lists and the dark-mode flag in
//! a key/value table, one JSON value per key. Nothing is written until
//! the user edits something; a missing key falls back to the shipped
//! default on load, so defaults can evolve without a migration.

use anyhow::{Context, Result};
use rusqlite::{OptionalExtension, Transaction};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::preferences::{
    pick_random, with_entry_added, with_entry_removed, PreferencesError, PreferencesState,
};
use crate::services::database::Database;

pub const KEY_HEALTH_TIPS: &str = "health_tips";
pub const KEY_MOTIVATIONAL_QUOTES: &str = "motivational_quotes";
pub const KEY_DARK_MODE: &str = "dark_mode";

pub struct PreferencesStore<'a> {
    db: &'a Database,
    state: PreferencesState,
}

impl<'a> PreferencesStore<'a> {
    /// Load the store from `db`, filling defaults for any key that was
    /// never written.
    pub fn load(db: &'a Database) -> Result<Self> {
        let state = read_state(db)?;
        log::info!(
            "Loaded preferences: {} tips, {} quotes, dark_mode={}",
            state.health_tips.len(),
            state.motivational_quotes.len(),
            state.dark_mode
        );
        Ok(Self { db, state })
    }

    /// The current in-memory state.
    pub fn state(&self) -> &PreferencesState {
        &self.state
    }

    /// Re-read persisted state, replacing the in-memory copy.
    pub fn reload(&mut self) -> Result<&PreferencesState> {
        self.state = read_state(self.db)?;
        Ok(&self.state)
    }

    /// Write the full in-memory state in one transaction.
    pub fn save(&self) -> Result<()> {
        write_state(self.db, &self.state)
    }

    pub fn add_health_tip(&mut self, text: impl Into<String>) -> Result<()> {
        let mut next = self.state.clone();
        next.health_tips = with_entry_added(&self.state.health_tips, text);
        self.persist(next)
    }

    pub fn remove_health_tip(&mut self, index: usize) -> Result<()> {
        let mut next = self.state.clone();
        next.health_tips = with_entry_removed(&self.state.health_tips, index)?;
        self.persist(next)
    }

    pub fn add_quote(&mut self, text: impl Into<String>) -> Result<()> {
        let mut next = self.state.clone();
        next.motivational_quotes = with_entry_added(&self.state.motivational_quotes, text);
        self.persist(next)
    }

    pub fn remove_quote(&mut self, index: usize) -> Result<()> {
        let mut next = self.state.clone();
        next.motivational_quotes = with_entry_removed(&self.state.motivational_quotes, index)?;
        self.persist(next)
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<()> {
        if self.state.dark_mode == dark_mode {
            return Ok(());
        }
        let mut next = self.state.clone();
        next.dark_mode = dark_mode;
        self.persist(next)
    }

    /// Write `next` and adopt it as the in-memory state once the write
    /// has committed. On a failed write the in-memory state is unchanged
    /// and still matches the database.
    fn persist(&mut self, next: PreferencesState) -> Result<()> {
        write_state(self.db, &next)?;
        self.state = next;
        Ok(())
    }

    /// A random tip from the current list.
    pub fn random_health_tip(&self) -> Result<&str, PreferencesError> {
        pick_random(&self.state.health_tips)
    }

    /// A random quote from the current list.
    pub fn random_quote(&self) -> Result<&str, PreferencesError> {
        pick_random(&self.state.motivational_quotes)
    }
}

fn read_state(db: &Database) -> Result<PreferencesState> {
    let defaults = PreferencesState::default();
    Ok(PreferencesState {
        health_tips: read_key(db, KEY_HEALTH_TIPS)?.unwrap_or(defaults.health_tips),
        motivational_quotes: read_key(db, KEY_MOTIVATIONAL_QUOTES)?
            .unwrap_or(defaults.motivational_quotes),
        dark_mode: read_key(db, KEY_DARK_MODE)?.unwrap_or(defaults.dark_mode),
    })
}

fn write_state(db: &Database, state: &PreferencesState) -> Result<()> {
    let tx = db
        .connection()
        .unchecked_transaction()
        .context("Failed to begin preferences transaction")?;

    write_key(&tx, KEY_HEALTH_TIPS, &state.health_tips)?;
    write_key(&tx, KEY_MOTIVATIONAL_QUOTES, &state.motivational_quotes)?;
    write_key(&tx, KEY_DARK_MODE, &state.dark_mode)?;

    tx.commit().context("Failed to commit preferences")?;
    log::debug!("Saved preferences");
    Ok(())
}

fn read_key<T: DeserializeOwned>(db: &Database, key: &str) -> Result<Option<T>> {
    let raw: Option<String> = db
        .connection()
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .optional()
        .with_context(|| format!("Failed to read preference '{}'", key))?;

    match raw {
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to decode preference '{}'", key))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

fn write_key<T: Serialize>(tx: &Transaction, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to encode preference '{}'", key))?;

    tx.execute(
        "INSERT INTO preferences (key, value, updated_at) \
         VALUES (?1, ?2, CURRENT_TIMESTAMP) \
         ON CONFLICT(key) DO UPDATE \
         SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        (key, &raw),
    )
    .with_context(|| format!("Failed to write preference '{}'", key))?;

    Ok(())
}
