//! Build couples from athletes' partner codes.

use ballo_kernel::{DisciplineEntry, resolve_discipline_classes};
use std::collections::{BTreeSet, HashMap};

use crate::athlete::Athlete;
use crate::couple::{Couple, UNCATEGORIZED, pair_key};

/// Pair athletes into couples.
///
/// Walks athletes in input order. An athlete with a partner code forms a
/// couple with that partner when the partner is also present; self-pairs
/// and unknown partners are skipped and each pair is emitted once. The
/// couple takes the category of the athlete seen first and the classes
/// resolved from both partners' discipline entries.
pub fn pair_couples(athletes: &[Athlete]) -> Vec<Couple> {
    let by_code: HashMap<&str, &Athlete> = athletes
        .iter()
        .map(|athlete| (athlete.code.as_str(), athlete))
        .collect();

    let mut seen = BTreeSet::new();
    let mut couples = Vec::new();

    for athlete in athletes {
        let Some(partner_code) = athlete.partner_code.as_deref() else {
            continue;
        };
        if partner_code == athlete.code {
            continue;
        }
        let Some(partner) = by_code.get(partner_code) else {
            tracing::debug!(
                athlete = %athlete.code,
                partner = partner_code,
                "partner not in roster, skipping pair"
            );
            continue;
        };
        if !seen.insert(pair_key(&athlete.code, partner_code)) {
            continue;
        }

        let entries: Vec<DisciplineEntry> = athlete
            .disciplines
            .iter()
            .chain(partner.disciplines.iter())
            .cloned()
            .collect();
        let resolution = resolve_discipline_classes(&entries);

        let category = athlete.category.trim();
        couples.push(Couple {
            athlete1_code: athlete.code.clone(),
            athlete2_code: partner.code.clone(),
            category: if category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                category.to_string()
            },
            class: resolution.best_overall_class,
            disciplines: resolution.disciplines,
            discipline_info: resolution.discipline_info,
        });
    }

    tracing::debug!(
        athletes = athletes.len(),
        couples = couples.len(),
        "paired couples"
    );
    couples
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballo_kernel::{Discipline, DisciplineKey};

    fn athlete(code: &str, partner: Option<&str>, entries: &[(&str, &str)]) -> Athlete {
        let mut athlete = Athlete::new(code, "Ada", "Rossi");
        athlete.partner_code = partner.map(str::to_string);
        athlete.disciplines = entries
            .iter()
            .map(|(raw, class)| DisciplineEntry::parse(raw, class).expect("known discipline"))
            .collect();
        athlete
    }

    #[test]
    fn mutual_partners_form_one_couple() {
        let mut first = athlete("M1", Some("F1"), &[("Danze Standard", "B1")]);
        first.category = "Youth".to_string();
        let second = athlete("F1", Some("M1"), &[("Danze Latino Americane", "A2")]);

        let couples = pair_couples(&[first, second]);
        assert_eq!(couples.len(), 1);
        let couple = &couples[0];
        assert_eq!(couple.athlete1_code, "M1");
        assert_eq!(couple.athlete2_code, "F1");
        assert_eq!(couple.category, "Youth");
        assert_eq!(couple.class, "A2");
        assert_eq!(
            couple.disciplines,
            vec![Discipline::Standard, Discipline::Latino]
        );
        assert_eq!(couple.discipline_info[&DisciplineKey::Combinata], "A2");
    }

    #[test]
    fn one_sided_partner_code_still_pairs() {
        let couples = pair_couples(&[
            athlete("M1", Some("F1"), &[]),
            athlete("F1", None, &[("Latino", "C")]),
        ]);
        assert_eq!(couples.len(), 1);
        assert_eq!(couples[0].category, UNCATEGORIZED);
        assert_eq!(couples[0].class, "C");
    }

    #[test]
    fn self_pairs_and_unknown_partners_are_skipped() {
        let couples = pair_couples(&[
            athlete("M1", Some("M1"), &[]),
            athlete("M2", Some("GHOST"), &[]),
        ]);
        assert!(couples.is_empty());
    }

    #[test]
    fn couple_without_entries_is_class_d() {
        let couples = pair_couples(&[athlete("M1", Some("F1"), &[]), athlete("F1", None, &[])]);
        assert_eq!(couples[0].class, "D");
        assert!(couples[0].discipline_info.is_empty());
    }
}
