//! # ballo-enroll
//!
//! Who may enter which event.
//!
//! - `event`: discipline and class lookup from event names, display order
//! - `eligibility`: strict per-competition gating and entry checks
//! - `presets`: the federation catalogue used to configure competitions
//!
//! ```text
//! presets ──generate──▶ EventType records
//!                            │
//! Couple ──▶ event::effective_class ──▶ eligibility::evaluate_event
//!                                              │
//!                                  is_competition_allowed / check_entry
//! ```

pub mod eligibility;
pub mod event;
pub mod presets;

pub use eligibility::{
    EntryBlock, EntryCheck, EventDecision, allowed_events, check_entry, evaluate_event,
    is_competition_allowed,
};
pub use event::{
    effective_class, event_class_key, event_discipline, event_priority, sort_event_refs,
    sort_event_types,
};
pub use presets::{
    COMBINATA_PRESETS, DisciplineGroup, EventPreset, PresetSelection, STANDARD_LATIN_PRESETS,
    SYLLABUS_CLASSES, find_preset, generate_event_types,
};
