// Shortlife Clock
// Command-line entry point over the calculation and countdown engines

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use directories::ProjectDirs;

use shortlife_clock::models::age::AgeInput;
use shortlife_clock::models::expectancy::{Gender, Region};
use shortlife_clock::models::preferences::PreferencesError;
use shortlife_clock::services::clock::{LifeClockService, RemainingDisplay};
use shortlife_clock::services::countdown::CountdownRender;
use shortlife_clock::services::database::Database;
use shortlife_clock::services::export;
use shortlife_clock::services::preferences::PreferencesStore;
use shortlife_clock::services::scheduler::RepeatingTimer;

/// Seconds between health tip rotations in watch mode (one day).
const TIP_REFRESH_SECONDS: u64 = 86_400;

#[derive(Debug, Parser)]
#[command(name = "shortlife-clock", version, about = "Count down a statistical lifespan")]
struct Args {
    /// Current age in whole years
    #[arg(long, conflicts_with = "birthdate")]
    age: Option<String>,

    /// Birthdate as YYYY-MM-DD, used instead of --age
    #[arg(long)]
    birthdate: Option<NaiveDate>,

    /// Region row of the expectancy table
    #[arg(long, default_value = "World")]
    region: Region,

    /// Gender column of the expectancy table
    #[arg(long, default_value = "Male")]
    gender: Gender,

    /// Preferences database path (defaults to the per-user data directory)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Write the calculation to this path as a CSV document
    #[arg(long)]
    export: Option<PathBuf>,

    /// Keep running and print the countdown every second
    #[arg(long)]
    watch: bool,

    /// Show the remaining span as a percentage of the expected lifespan
    #[arg(long)]
    percentage: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting Shortlife Clock");

    let args = Args::parse();

    let input = if let Some(text) = &args.age {
        AgeInput::Manual(text.clone())
    } else if let Some(birthdate) = args.birthdate {
        AgeInput::Birthdate(birthdate)
    } else {
        bail!("provide --age or --birthdate");
    };

    let db_path = match &args.prefs {
        Some(path) => path.to_string_lossy().to_string(),
        None => default_prefs_path()?,
    };
    let db = Database::new(&db_path)?;
    db.initialize_schema()?;
    let store = PreferencesStore::load(&db)?;
    log::debug!("dark_mode preference is {}", store.state().dark_mode);

    let mut clock = LifeClockService::new();
    let result = clock.recalculate_now(&input, args.region, args.gender)?;

    println!("Life Percentage Used: {:.2}%", result.percentage_used);
    println!("Days Lived: {}", result.days_lived);
    println!("Remaining Days: {}", result.days_remaining);
    println!("Progress: {}%", result.progress_percent());

    if args.percentage {
        if let Some(RemainingDisplay::Percentage(pct)) = clock.remaining_display(true) {
            println!("Remaining Life: {:.2}%", pct);
        }
    }

    print_random_quote(&store);
    print_random_tip(&store);

    if let Some(path) = &args.export {
        fs::write(path, export::to_csv(&result))
            .with_context(|| format!("Failed to export results to {}", path.display()))?;
        log::info!("Exported results to {}", path.display());
        println!("Exported to {}", path.display());
    }

    println!("Time Remaining: {}", clock.render());

    if args.watch {
        run_watch(clock, store)?;
    }

    Ok(())
}

enum TimerEvent {
    Tick,
    TipRefresh,
}

/// Drive the countdown in real time: a one-second tick timer and a daily
/// tip rotation, both funneled into the thread that owns the clock.
fn run_watch(mut clock: LifeClockService, store: PreferencesStore) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel();

    let tick_tx = event_tx.clone();
    let tick_timer = RepeatingTimer::spawn(Duration::from_secs(1), move || {
        let _ = tick_tx.send(TimerEvent::Tick);
    });

    let tip_tx = event_tx;
    let tip_timer = RepeatingTimer::spawn(Duration::from_secs(TIP_REFRESH_SECONDS), move || {
        let _ = tip_tx.send(TimerEvent::TipRefresh);
    });

    for event in &event_rx {
        match event {
            TimerEvent::Tick => {
                let render = clock.tick();
                println!("Time Remaining: {}", render);
                if render == CountdownRender::Expired {
                    break;
                }
            }
            TimerEvent::TipRefresh => print_random_tip(&store),
        }
    }

    tick_timer.cancel();
    tip_timer.cancel();
    Ok(())
}

fn print_random_tip(store: &PreferencesStore) {
    match store.random_health_tip() {
        Ok(tip) => println!("Health Tip: {}", tip),
        Err(PreferencesError::EmptyList) => println!("No health tips available."),
        Err(err) => log::warn!("Could not pick a health tip: {}", err),
    }
}

fn print_random_quote(store: &PreferencesStore) {
    match store.random_quote() {
        Ok(quote) => println!("Motivational Quote: {}", quote),
        Err(PreferencesError::EmptyList) => println!("No motivational quotes available."),
        Err(err) => log::warn!("Could not pick a quote: {}", err),
    }
}

fn default_prefs_path() -> Result<String> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Shortlife", "ShortlifeClock") {
        let data_dir = proj_dirs.data_dir();
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        Ok(data_dir.join("preferences.db").to_string_lossy().to_string())
    } else {
        Ok("preferences.db".to_string())
    }
}
