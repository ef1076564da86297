// Integration tests for the calculation pipeline and preference persistence

mod fixtures;

use fixtures::{dates, inputs};
use pretty_assertions::assert_eq;

use shortlife_clock::models::age::AgeInput;
use shortlife_clock::models::expectancy::{Gender, Region};
use shortlife_clock::models::preferences::{PreferencesError, DEFAULT_HEALTH_TIPS};
use shortlife_clock::services::clock::LifeClockService;
use shortlife_clock::services::countdown::{CountdownPhase, CountdownRender, SECONDS_PER_DAY};
use shortlife_clock::services::database::Database;
use shortlife_clock::services::export;
use shortlife_clock::services::preferences::PreferencesStore;

#[test]
fn test_full_pipeline_from_birthdate() {
    let mut clock = LifeClockService::new();

    // Mar 1, 2000 on Feb 29, 2024: the 24th anniversary is one day away.
    let result = clock
        .recalculate(
            &inputs::leap_boundary_birthdate(),
            Region::World,
            Gender::Male,
            dates::leap_day_2024(),
        )
        .expect("Pipeline should accept a valid birthdate");

    assert_eq!(result.days_lived, 23 * 365);
    assert_eq!(result.days_remaining, (70 - 23) * 365);
    assert_eq!(clock.engine().phase(), CountdownPhase::Running);
    assert_eq!(
        clock.engine().remaining_seconds(),
        result.days_remaining * SECONDS_PER_DAY
    );

    // One day later the same birthdate counts one more completed year.
    let older = clock
        .recalculate(
            &inputs::leap_boundary_birthdate(),
            Region::World,
            Gender::Male,
            dates::mar_1_2024(),
        )
        .expect("Pipeline should accept the anniversary itself");

    assert_eq!(older.days_lived, 24 * 365);
    assert_eq!(
        clock.engine().remaining_seconds(),
        older.days_remaining * SECONDS_PER_DAY
    );
}

#[test]
fn test_first_tick_after_calculation() {
    let mut clock = LifeClockService::new();
    clock
        .recalculate(
            &inputs::manual_23(),
            Region::World,
            Gender::Male,
            dates::jun_1_2024(),
        )
        .unwrap();

    let render = clock.tick();
    match render {
        CountdownRender::Remaining(breakdown) => {
            // 47 years of 365 days, minus the one second just ticked.
            assert_eq!(breakdown.days, 47 * 365 - 1);
            assert_eq!(breakdown.hours, 23);
            assert_eq!(breakdown.minutes, 59);
            assert_eq!(breakdown.seconds, 59);
        }
        other => panic!("expected a running countdown, got {:?}", other),
    }
}

#[test]
fn test_invalid_input_keeps_previous_state() {
    let mut clock = LifeClockService::new();
    clock
        .recalculate(
            &inputs::manual_23(),
            Region::Asia,
            Gender::Female,
            dates::jun_1_2024(),
        )
        .unwrap();
    let committed = *clock.last_result().unwrap();

    let err = clock
        .recalculate(
            &inputs::manual_fractional(),
            Region::Asia,
            Gender::Female,
            dates::jun_1_2024(),
        )
        .unwrap_err();

    assert!(err.to_string().contains("whole number"));
    assert_eq!(clock.last_result(), Some(&committed));
    assert_eq!(clock.engine().phase(), CountdownPhase::Running);
}

#[test]
fn test_export_matches_committed_result() {
    let mut clock = LifeClockService::new();
    let result = clock
        .recalculate(
            &inputs::manual_23(),
            Region::World,
            Gender::Male,
            dates::jun_1_2024(),
        )
        .unwrap();

    let doc = export::to_csv(&result);
    let expected = format!(
        "Life Percentage Used,Days Lived,Remaining Days\n{:.2}%,{},{}",
        result.percentage_used, result.days_lived, result.days_remaining
    );
    assert_eq!(doc, expected);
    assert_eq!(doc, "Life Percentage Used,Days Lived,Remaining Days\n32.86%,8395,17155");
}

#[test]
fn test_expired_lifespan_exports_zero_remaining() {
    let mut clock = LifeClockService::new();
    let result = clock
        .recalculate(
            &AgeInput::Manual("81".to_string()),
            Region::Australia,
            Gender::Male,
            dates::jun_1_2024(),
        )
        .unwrap();

    assert_eq!(clock.render(), CountdownRender::Expired);
    assert!(export::to_csv(&result).ends_with(",0"));
}

#[test]
fn test_preferences_survive_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("preferences.db");
    let db_path = db_path.to_str().unwrap();

    // First launch: the user edits tips and flips dark mode.
    {
        let db = Database::new(db_path).expect("Failed to create database");
        db.initialize_schema().expect("Failed to initialize schema");

        let mut store = PreferencesStore::load(&db).expect("Failed to load preferences");
        store.add_health_tip("Walk after lunch.").unwrap();
        store.remove_quote(0).unwrap();
        store.set_dark_mode(true).unwrap();
    } // Database connection closed

    // Second launch: edits should persist across the restart.
    {
        let db = Database::new(db_path).expect("Failed to open database");
        db.initialize_schema().expect("Failed to initialize schema");

        let store = PreferencesStore::load(&db).expect("Failed to reload preferences");
        assert_eq!(store.state().health_tips.len(), 6);
        assert_eq!(
            store.state().health_tips.last().map(String::as_str),
            Some("Walk after lunch.")
        );
        assert_eq!(store.state().motivational_quotes.len(), 3);
        assert!(store.state().dark_mode, "Dark mode should persist across restarts");
    }
}

#[test]
fn test_untouched_keys_keep_defaults_after_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("preferences.db");
    let db_path = db_path.to_str().unwrap();

    {
        let db = Database::new(db_path).unwrap();
        db.initialize_schema().unwrap();

        let mut store = PreferencesStore::load(&db).unwrap();
        store.set_dark_mode(true).unwrap();
    }

    {
        let db = Database::new(db_path).unwrap();
        db.initialize_schema().unwrap();

        let store = PreferencesStore::load(&db).unwrap();
        // Only dark_mode was written; the lists still track the defaults.
        assert_eq!(store.state().health_tips, DEFAULT_HEALTH_TIPS.to_vec());
        assert!(store.state().dark_mode);
    }
}

#[test]
fn test_emptied_tip_list_persists_and_reports_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("preferences.db");
    let db_path = db_path.to_str().unwrap();

    {
        let db = Database::new(db_path).unwrap();
        db.initialize_schema().unwrap();

        let mut store = PreferencesStore::load(&db).unwrap();
        for _ in 0..DEFAULT_HEALTH_TIPS.len() {
            store.remove_health_tip(0).unwrap();
        }
    }

    {
        let db = Database::new(db_path).unwrap();
        db.initialize_schema().unwrap();

        let store = PreferencesStore::load(&db).unwrap();
        assert!(store.state().health_tips.is_empty());
        assert_eq!(store.random_health_tip(), Err(PreferencesError::EmptyList));
    }
}

#[test]
fn test_calculation_pipeline_with_persisted_preferences() {
    // The pipeline and the store share nothing but the embedder, so a
    // full session exercises both side by side.
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("preferences.db");

    let db = Database::new(db_path.to_str().unwrap()).unwrap();
    db.initialize_schema().unwrap();
    let store = PreferencesStore::load(&db).unwrap();

    let mut clock = LifeClockService::new();
    clock
        .recalculate(
            &inputs::manual_23(),
            Region::Europe,
            Gender::Female,
            dates::jun_1_2024(),
        )
        .unwrap();

    let tip = store.random_health_tip().unwrap();
    assert!(store.state().health_tips.iter().any(|t| t == tip));
    assert_eq!(clock.engine().phase(), CountdownPhase::Running);
}
