//! # ballo-roster
//!
//! Record layer for the federation roster.
//!
//! This crate provides:
//! - `Athlete`, `Couple`, `Competition` and `EventType` records
//! - boundary normalization of spreadsheet dates and category cells
//! - JSONL read/write (portable persistence)
//! - `Roster` (deterministic in-memory state)
//! - couple pairing from partner codes and the roster anomaly scan
//!
//! Rules about ages, categories and classes live in `ballo-kernel`; this
//! crate only feeds them records.
//!
//! ## Data model
//!
//! ```text
//! JSONL (on disk, one line per record)
//!     ↕  load / save
//! Roster (athletes by code, couples by pair key, competitions by id)
//!     │
//! pair_couples / scan_anomalies
//! ```

pub mod anomalies;
pub mod athlete;
pub mod competition;
pub mod couple;
pub mod dates;
pub mod jsonl;
pub mod pairing;
pub mod roster;

pub use anomalies::{AnomalyReport, CoupleAnomaly, certificate_issue, scan_anomalies};
pub use athlete::{Athlete, FieldIssue, Gender, MAX_DISCIPLINES};
pub use competition::{Competition, EventType};
pub use couple::{Couple, NOT_DANCED, UNCATEGORIZED, pair_key};
pub use dates::{format_italian_date, normalize_date, parse_category_cell, parse_loose_date};
pub use jsonl::{
    JsonlError, read_records, read_records_from_path, write_records, write_records_to_path,
};
pub use pairing::pair_couples;
pub use roster::{Roster, RosterError};
