//! Roster anomaly scan.
//!
//! Flags couples whose stored category no longer matches their birth dates
//! and athletes with a missing or expired medical certificate, then lists
//! athletes that are in no couple at all.

use ballo_kernel::{CoupleCategoryCheck, validate_couple_category};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::athlete::Athlete;
use crate::dates::{format_italian_date, parse_loose_date};
use crate::roster::Roster;

/// Problems found for one couple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoupleAnomaly {
    pub pair_key: String,
    pub athlete1: String,
    pub athlete2: String,
    pub stored_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_issue: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certificate_issues: Vec<String>,
    #[serde(skip)]
    youngest_birth: Option<NaiveDate>,
}

impl CoupleAnomaly {
    pub fn has_category_issue(&self) -> bool {
        self.category_issue.is_some()
    }

    pub fn has_certificate_issues(&self) -> bool {
        !self.certificate_issues.is_empty()
    }
}

/// Result of [`scan_anomalies`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnomalyReport {
    /// Couples with at least one problem, youngest partner first.
    pub anomalies: Vec<CoupleAnomaly>,
    /// Athletes in no couple: men first, then youngest first, undated last.
    pub orphans: Vec<Athlete>,
}

impl AnomalyReport {
    pub fn category_anomalies(&self) -> impl Iterator<Item = &CoupleAnomaly> {
        self.anomalies.iter().filter(|a| a.has_category_issue())
    }

    pub fn certificate_anomalies(&self) -> impl Iterator<Item = &CoupleAnomaly> {
        self.anomalies.iter().filter(|a| a.has_certificate_issues())
    }

    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty() && self.orphans.is_empty()
    }
}

/// Medical-certificate problem for one athlete, if any.
///
/// A certificate is valid through its expiry day. An unreadable expiry
/// counts as missing.
pub fn certificate_issue(athlete: &Athlete, on: NaiveDate) -> Option<String> {
    let expiry = athlete
        .medical_certificate_expiry
        .as_deref()
        .and_then(parse_loose_date);
    match expiry {
        None => Some(format!("{}: Certificato mancante", athlete.full_name())),
        Some(expiry) if expiry < on => Some(format!(
            "{}: Certificato scaduto il {}",
            athlete.full_name(),
            format_italian_date(expiry)
        )),
        Some(_) => None,
    }
}

fn birth_of(athlete: &Athlete) -> Option<NaiveDate> {
    athlete.birth_date.as_deref().and_then(parse_loose_date)
}

/// Later birth date first; undated last.
fn youngest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Scan every couple and athlete in the roster as of `on`.
pub fn scan_anomalies(roster: &Roster, on: NaiveDate) -> AnomalyReport {
    let mut anomalies = Vec::new();
    let mut coupled: BTreeSet<&str> = BTreeSet::new();

    for couple in roster.couples() {
        coupled.insert(couple.athlete1_code.as_str());
        coupled.insert(couple.athlete2_code.as_str());

        let (Some(athlete1), Some(athlete2)) = (
            roster.athlete(&couple.athlete1_code),
            roster.athlete(&couple.athlete2_code),
        ) else {
            tracing::warn!(pair = %couple.pair_key(), "couple references an unknown athlete");
            continue;
        };

        let verdict = validate_couple_category(&CoupleCategoryCheck {
            stored_category: &couple.category,
            athlete1_birth_date: athlete1.birth_date.as_deref(),
            athlete2_birth_date: athlete2.birth_date.as_deref(),
            on_date: on,
        });
        let category_issue = match verdict {
            Ok(verdict) => verdict.reason(),
            Err(err) => {
                tracing::warn!(pair = %couple.pair_key(), error = %err, "category check skipped");
                Some(err.to_string())
            }
        };

        let certificate_issues: Vec<String> = [athlete1, athlete2]
            .into_iter()
            .filter_map(|athlete| certificate_issue(athlete, on))
            .collect();

        if category_issue.is_none() && certificate_issues.is_empty() {
            continue;
        }

        let youngest_birth = match (birth_of(athlete1), birth_of(athlete2)) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (one, other) => one.or(other),
        };
        anomalies.push(CoupleAnomaly {
            pair_key: couple.pair_key(),
            athlete1: athlete1.full_name(),
            athlete2: athlete2.full_name(),
            stored_category: couple.category.clone(),
            category_issue,
            certificate_issues,
            youngest_birth,
        });
    }

    anomalies.sort_by(|a, b| youngest_first(a.youngest_birth, b.youngest_birth));

    let mut orphans: Vec<Athlete> = roster
        .athletes()
        .filter(|athlete| !coupled.contains(athlete.code.as_str()))
        .cloned()
        .collect();
    orphans.sort_by(|a, b| {
        b.is_male()
            .cmp(&a.is_male())
            .then_with(|| youngest_first(birth_of(a), birth_of(b)))
    });

    tracing::debug!(
        anomalies = anomalies.len(),
        orphans = orphans.len(),
        "anomaly scan complete"
    );
    AnomalyReport { anomalies, orphans }
}
