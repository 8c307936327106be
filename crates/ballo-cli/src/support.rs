use crate::cli::{GlobalArgs, RosterArgs};
use crate::config::BalloConfig;
use ballo_roster::{Roster, pair_couples};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// Everything a command needs from the global flags and config file.
pub struct Context {
    pub config: BalloConfig,
    pub on: NaiveDate,
}

pub fn load_config_or_exit(global: &GlobalArgs) -> BalloConfig {
    BalloConfig::load(global.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// `--on`, else the configured season date, else today.
pub fn reference_date_or_exit(global: &GlobalArgs, config: &BalloConfig) -> NaiveDate {
    if let Some(on) = &global.on {
        return parse_date_or_exit("--on", on);
    }
    config
        .season
        .reference_date
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

pub fn parse_date_or_exit(flag: &str, value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").unwrap_or_else(|_| {
        eprintln!("error: {flag} expects YYYY-MM-DD, got `{value}`");
        std::process::exit(1);
    })
}

fn pick_path(flag: &Option<String>, configured: &Option<PathBuf>) -> Option<PathBuf> {
    flag.as_ref().map(PathBuf::from).or_else(|| configured.clone())
}

/// Load the roster from CLI paths, falling back to the config.
///
/// Athletes are required. Couples come from their file when one is given,
/// otherwise they are paired from the athletes' partner codes.
pub fn load_roster_or_exit(args: &RosterArgs, config: &BalloConfig) -> Roster {
    let paths = &config.roster;
    let Some(athletes_path) = pick_path(&args.athletes, &paths.athletes) else {
        eprintln!("error: no athletes file; pass --athletes or set [roster] athletes in ballo.toml");
        std::process::exit(1);
    };

    let mut roster = Roster::new();
    roster
        .load_athletes_jsonl(&athletes_path)
        .unwrap_or_else(|e| {
            eprintln!("error: failed to load {}: {e}", athletes_path.display());
            std::process::exit(1);
        });

    match pick_path(&args.couples, &paths.couples) {
        Some(path) => {
            roster.load_couples_jsonl(&path).unwrap_or_else(|e| {
                eprintln!("error: failed to load {}: {e}", path.display());
                std::process::exit(1);
            });
        }
        None => {
            let athletes: Vec<_> = roster.athletes().cloned().collect();
            for couple in pair_couples(&athletes) {
                roster.upsert_couple(couple);
            }
        }
    }

    if let Some(path) = pick_path(&args.competitions, &paths.competitions) {
        roster.load_competitions_jsonl(&path).unwrap_or_else(|e| {
            eprintln!("error: failed to load {}: {e}", path.display());
            std::process::exit(1);
        });
    }
    if let Some(path) = pick_path(&args.events, &paths.events) {
        roster.load_events_jsonl(&path).unwrap_or_else(|e| {
            eprintln!("error: failed to load {}: {e}", path.display());
            std::process::exit(1);
        });
    }

    tracing::info!(
        athletes = roster.athlete_count(),
        couples = roster.couple_count(),
        "roster loaded"
    );
    roster
}

pub fn print_json(payload: &impl Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
