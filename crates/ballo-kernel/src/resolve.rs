//! Per-discipline class resolution for a couple.
//!
//! Entries from both partners are pooled without deduplication; the ranking
//! collapses duplicates. A couple's combinata (10-dance) class is never
//! weaker than either of its constituent disciplines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::class::{WEAKEST_CLASS, best_class, normalize_class};
use crate::discipline::{Discipline, DisciplineEntry, DisciplineKey};

/// Best class per discipline key.
pub type DisciplineInfo = BTreeMap<DisciplineKey, String>;

/// Resolved classes for one couple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResolution {
    pub best_overall_class: String,
    pub discipline_info: DisciplineInfo,
    /// Distinct disciplines, in first-seen order.
    pub disciplines: Vec<Discipline>,
}

/// Resolve the best class per discipline and overall.
pub fn resolve_discipline_classes(entries: &[DisciplineEntry]) -> ClassResolution {
    let mut disciplines: Vec<Discipline> = Vec::new();
    for entry in entries {
        if !disciplines.contains(&entry.discipline) {
            disciplines.push(entry.discipline);
        }
    }

    let mut discipline_info = DisciplineInfo::new();
    let mut best_overall = WEAKEST_CLASS.to_string();

    for discipline in &disciplines {
        let mut discipline_best: Option<String> = None;
        for entry in entries.iter().filter(|e| e.discipline == *discipline) {
            discipline_best = Some(match discipline_best {
                None => normalize_class(&entry.class),
                Some(best) => best_class(Some(best.as_str()), Some(entry.class.as_str())),
            });

            let slot = discipline_info
                .entry(entry.key())
                .or_insert_with(|| normalize_class(&entry.class));
            let merged = best_class(Some(slot.as_str()), Some(entry.class.as_str()));
            *slot = merged;
        }
        best_overall = best_class(Some(best_overall.as_str()), discipline_best.as_deref());
    }

    if let Some(combinata) = resolved_combinata(&discipline_info) {
        best_overall = best_class(Some(best_overall.as_str()), Some(combinata.as_str()));
        discipline_info.insert(DisciplineKey::Combinata, combinata);
    }

    ClassResolution {
        best_overall_class: best_overall,
        discipline_info,
        disciplines,
    }
}

/// The combinata class implied by a discipline map, when the rule applies.
///
/// Applies when combinata is present, or when both standard and latino are.
/// The result is the best of combinata (defaulting to `D`), latino and standard;
/// an absent latino or standard is skipped.
pub fn resolved_combinata(info: &DisciplineInfo) -> Option<String> {
    let combinata = info.get(&DisciplineKey::Combinata);
    let standard = info.get(&DisciplineKey::Standard);
    let latino = info.get(&DisciplineKey::Latino);

    if combinata.is_none() && (standard.is_none() || latino.is_none()) {
        return None;
    }

    let with_latino = best_class(
        Some(combinata.map_or(WEAKEST_CLASS, String::as_str)),
        latino.map(String::as_str),
    );
    Some(best_class(
        Some(with_latino.as_str()),
        standard.map(String::as_str),
    ))
}
