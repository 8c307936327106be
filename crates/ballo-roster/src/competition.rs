//! Competitions and their event types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A competition on the federation calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<NaiveDate>,

    /// Entries made after this date pay the late fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_fee_deadline: Option<NaiveDate>,
}

impl Competition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            end_date: None,
            location: None,
            registration_deadline: None,
            late_fee_deadline: None,
        }
    }

    /// Registration is closed once `on` is past the deadline. The deadline
    /// day itself is still open; no deadline means never closed.
    pub fn is_deadline_passed(&self, on: NaiveDate) -> bool {
        self.registration_deadline
            .is_some_and(|deadline| on > deadline)
    }

    /// Whether an entry made on `entered_on` pays the late fee.
    pub fn is_late_entry(&self, entered_on: NaiveDate) -> bool {
        self.late_fee_deadline
            .is_some_and(|deadline| entered_on > deadline)
    }

    /// Case-insensitive name plus date, the identity used to deduplicate
    /// calendar imports.
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.name.trim().to_lowercase(), self.date)
    }
}

/// One event (heat) offered at a competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub competition_id: String,
    /// Full name, conventionally `"<Discipline group> - <Preset>"`.
    pub event_name: String,
    pub allowed_classes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
}
