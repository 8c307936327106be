//! Canonical in-memory roster.
//!
//! Athletes are keyed by code, couples by their sorted pair key and
//! competitions by id, so every iteration order is deterministic. Event
//! types are kept in load order; `events_for` filters them per competition.

use crate::athlete::Athlete;
use crate::competition::{Competition, EventType};
use crate::couple::Couple;
use crate::jsonl::{JsonlError, read_records_from_path, write_records_to_path};
use std::collections::BTreeMap;
use std::path::Path;

/// Errors raised while loading or querying the roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Jsonl(#[from] JsonlError),

    #[error("athlete not found: {0}")]
    AthleteNotFound(String),

    #[error("competition not found: {0}")]
    CompetitionNotFound(String),

    #[error("couple not found: {0}")]
    CoupleNotFound(String),
}

/// Deterministic in-memory state for athletes, couples and competitions.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    athletes: BTreeMap<String, Athlete>,
    couples: BTreeMap<String, Couple>,
    competitions: BTreeMap<String, Competition>,
    events: Vec<EventType>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from athletes alone.
    ///
    /// Duplicate codes keep the first occurrence, matching spreadsheet
    /// imports where the first row for a code is authoritative.
    pub fn from_athletes(athletes: Vec<Athlete>) -> Self {
        let mut roster = Self::new();
        for athlete in athletes {
            roster
                .athletes
                .entry(athlete.code.clone())
                .or_insert(athlete);
        }
        roster
    }

    /// Load athletes from a JSONL file, normalizing each record.
    pub fn load_athletes_jsonl(&mut self, path: impl AsRef<Path>) -> Result<usize, RosterError> {
        let athletes: Vec<Athlete> = read_records_from_path(path)?;
        let count = athletes.len();
        for athlete in athletes {
            let athlete = athlete.normalized();
            self.athletes.entry(athlete.code.clone()).or_insert(athlete);
        }
        Ok(count)
    }

    /// Load couples from a JSONL file. Later lines replace earlier ones
    /// with the same pair key.
    pub fn load_couples_jsonl(&mut self, path: impl AsRef<Path>) -> Result<usize, RosterError> {
        let couples: Vec<Couple> = read_records_from_path(path)?;
        let count = couples.len();
        for couple in couples {
            self.upsert_couple(couple);
        }
        Ok(count)
    }

    /// Load competitions from a JSONL file.
    ///
    /// Calendar exports repeat events under fresh ids; a competition whose
    /// name and date match one already held under another id is skipped.
    /// Returns how many competitions were kept.
    pub fn load_competitions_jsonl(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<usize, RosterError> {
        let competitions: Vec<Competition> = read_records_from_path(path)?;
        let mut kept = 0;
        for competition in competitions {
            let key = competition.dedup_key();
            let duplicate = self
                .competitions
                .values()
                .any(|held| held.id != competition.id && held.dedup_key() == key);
            if duplicate {
                tracing::warn!(id = %competition.id, key = %key, "duplicate competition skipped");
                continue;
            }
            self.upsert_competition(competition);
            kept += 1;
        }
        Ok(kept)
    }

    pub fn load_events_jsonl(&mut self, path: impl AsRef<Path>) -> Result<usize, RosterError> {
        let events: Vec<EventType> = read_records_from_path(path)?;
        let count = events.len();
        self.events.extend(events);
        Ok(count)
    }

    /// Persist couples to a JSONL file, in pair-key order.
    pub fn save_couples_jsonl(&self, path: impl AsRef<Path>) -> Result<(), RosterError> {
        let couples: Vec<Couple> = self.couples.values().cloned().collect();
        write_records_to_path(path, &couples)?;
        Ok(())
    }

    pub fn athlete(&self, code: &str) -> Option<&Athlete> {
        self.athletes.get(code)
    }

    /// Lookup an athlete that must exist.
    pub fn require_athlete(&self, code: &str) -> Result<&Athlete, RosterError> {
        self.athlete(code)
            .ok_or_else(|| RosterError::AthleteNotFound(code.to_string()))
    }

    pub fn couple(&self, pair_key: &str) -> Option<&Couple> {
        self.couples.get(pair_key)
    }

    /// The couple an athlete dances in, if any.
    pub fn couple_of(&self, athlete_code: &str) -> Option<&Couple> {
        self.couples().find(|couple| couple.includes(athlete_code))
    }

    pub fn competition(&self, id: &str) -> Option<&Competition> {
        self.competitions.get(id)
    }

    pub fn require_competition(&self, id: &str) -> Result<&Competition, RosterError> {
        self.competition(id)
            .ok_or_else(|| RosterError::CompetitionNotFound(id.to_string()))
    }

    /// Insert or replace an athlete by code. Returns the previous record.
    pub fn upsert_athlete(&mut self, athlete: Athlete) -> Option<Athlete> {
        self.athletes.insert(athlete.code.clone(), athlete)
    }

    /// Insert or replace a couple by pair key. Returns the previous record.
    pub fn upsert_couple(&mut self, couple: Couple) -> Option<Couple> {
        self.couples.insert(couple.pair_key(), couple)
    }

    pub fn upsert_competition(&mut self, competition: Competition) -> Option<Competition> {
        self.competitions.insert(competition.id.clone(), competition)
    }

    pub fn add_event(&mut self, event: EventType) {
        self.events.push(event);
    }

    pub fn athletes(&self) -> impl Iterator<Item = &Athlete> {
        self.athletes.values()
    }

    pub fn couples(&self) -> impl Iterator<Item = &Couple> {
        self.couples.values()
    }

    pub fn competitions(&self) -> impl Iterator<Item = &Competition> {
        self.competitions.values()
    }

    /// Every loaded event type, in load order.
    pub fn events(&self) -> &[EventType] {
        &self.events
    }

    /// Event types offered at one competition, in load order.
    pub fn events_for(&self, competition_id: &str) -> Vec<&EventType> {
        self.events
            .iter()
            .filter(|event| event.competition_id == competition_id)
            .collect()
    }

    pub fn athlete_count(&self) -> usize {
        self.athletes.len()
    }

    pub fn couple_count(&self) -> usize {
        self.couples.len()
    }
}
