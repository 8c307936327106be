//! Couple records.

use ballo_kernel::{Discipline, DisciplineInfo, DisciplineKey, WEAKEST_CLASS, best_class};
use serde::{Deserialize, Serialize};

/// Category given to a couple whose first athlete has none on file.
pub const UNCATEGORIZED: &str = "Senza categoria";

/// Placeholder shown for a discipline the couple does not dance.
pub const NOT_DANCED: &str = "-";

/// A competing pair of athletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
    pub athlete1_code: String,
    pub athlete2_code: String,
    /// Stored category text, as recorded; may be stale.
    pub category: String,
    /// Best overall class.
    pub class: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disciplines: Vec<Discipline>,
    #[serde(default, skip_serializing_if = "DisciplineInfo::is_empty")]
    pub discipline_info: DisciplineInfo,
}

impl Couple {
    /// Order-independent identity: both codes sorted and joined with `-`.
    pub fn pair_key(&self) -> String {
        pair_key(&self.athlete1_code, &self.athlete2_code)
    }

    pub fn includes(&self, athlete_code: &str) -> bool {
        self.athlete1_code == athlete_code || self.athlete2_code == athlete_code
    }

    pub fn dances(&self, discipline: Discipline) -> bool {
        self.disciplines.contains(&discipline)
    }

    /// Display class for one discipline key.
    ///
    /// A recorded per-discipline class wins. Otherwise combinata resolves to
    /// the best of the overall class, latino and standard, and any other
    /// discipline the couple dances shows the overall class. Disciplines the
    /// couple does not dance show [`NOT_DANCED`].
    pub fn class_for(&self, key: DisciplineKey) -> String {
        if let Some(class) = self.discipline_info.get(&key).filter(|c| !c.is_empty()) {
            return class.clone();
        }

        if key == DisciplineKey::Combinata && self.dances(Discipline::Combinata) {
            let base = if self.class.is_empty() {
                WEAKEST_CLASS
            } else {
                self.class.as_str()
            };
            let with_latino = best_class(
                Some(base),
                self.discipline_info
                    .get(&DisciplineKey::Latino)
                    .map(String::as_str),
            );
            return best_class(
                Some(with_latino.as_str()),
                self.discipline_info
                    .get(&DisciplineKey::Standard)
                    .map(String::as_str),
            );
        }

        if self.dances(key.discipline()) && !self.class.is_empty() {
            self.class.clone()
        } else {
            NOT_DANCED.to_string()
        }
    }
}

/// Sorted pair key for two athlete codes.
pub fn pair_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}-{b}")
    } else {
        format!("{b}-{a}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn couple(disciplines: Vec<Discipline>, info: &[(DisciplineKey, &str)]) -> Couple {
        Couple {
            athlete1_code: "B2".to_string(),
            athlete2_code: "A1".to_string(),
            category: "Adult".to_string(),
            class: "B1".to_string(),
            disciplines,
            discipline_info: info.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    #[test]
    fn pair_key_is_order_independent() {
        let c = couple(vec![], &[]);
        assert_eq!(c.pair_key(), "A1-B2");
        assert_eq!(pair_key("A1", "B2"), pair_key("B2", "A1"));
    }

    #[test]
    fn recorded_class_wins() {
        let c = couple(
            vec![Discipline::Latino],
            &[(DisciplineKey::Latino, "A2")],
        );
        assert_eq!(c.class_for(DisciplineKey::Latino), "A2");
    }

    #[test]
    fn combinata_falls_back_to_best_of_overall_and_parts() {
        let c = couple(
            vec![Discipline::Combinata, Discipline::Latino],
            &[(DisciplineKey::Latino, "A")],
        );
        assert_eq!(c.class_for(DisciplineKey::Combinata), "A");
    }

    #[test]
    fn danced_discipline_without_record_shows_overall_class() {
        let c = couple(vec![Discipline::ShowDance], &[]);
        assert_eq!(c.class_for(DisciplineKey::ShowDanceSa), "B1");
        assert_eq!(c.class_for(DisciplineKey::ShowDance), "B1");
    }

    #[test]
    fn undanced_discipline_shows_placeholder() {
        let c = couple(vec![Discipline::Latino], &[(DisciplineKey::Latino, "C")]);
        assert_eq!(c.class_for(DisciplineKey::Standard), "-");
        assert_eq!(c.class_for(DisciplineKey::Combinata), "-");
    }
}
