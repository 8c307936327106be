//! What an event name says about the event.
//!
//! Event names follow the `"<Discipline group> - <Preset>"` convention, so
//! the discipline is read from the prefix and the class key from keywords
//! anywhere in the name.

use ballo_kernel::{Discipline, DisciplineKey, best_class, normalize_class};
use ballo_roster::{Couple, EventType};
use std::cmp::Ordering;

const DISCIPLINE_PREFIXES: [(&str, Discipline); 5] = [
    ("danze standard -", Discipline::Standard),
    ("danze latino americane -", Discipline::Latino),
    ("combinata -", Discipline::Combinata),
    ("standard -", Discipline::Standard),
    ("latini -", Discipline::Latino),
];

/// Discipline an event belongs to, from its name prefix.
///
/// `None` for unprefixed names; such events are open to every discipline.
pub fn event_discipline(event_name: &str) -> Option<Discipline> {
    let lower = event_name.trim().to_lowercase();
    DISCIPLINE_PREFIXES
        .iter()
        .find(|(prefix, _)| lower.starts_with(prefix))
        .map(|(_, discipline)| *discipline)
}

/// Which per-discipline class an event is judged on, from name keywords.
pub fn event_class_key(event_name: &str) -> Option<DisciplineKey> {
    let lower = event_name.to_lowercase();
    if lower.contains("latino") || lower.contains("latini") {
        Some(DisciplineKey::Latino)
    } else if lower.contains("standard") {
        Some(DisciplineKey::Standard)
    } else if lower.contains("combinata") {
        Some(DisciplineKey::Combinata)
    } else if lower.contains("south american") {
        Some(DisciplineKey::ShowDanceSa)
    } else if lower.contains("classic showdance") || lower.contains("classic show dance") {
        Some(DisciplineKey::ShowDanceClassic)
    } else if lower.contains("show dance") || lower.contains("showdance") {
        Some(DisciplineKey::ShowDance)
    } else {
        None
    }
}

/// The couple's class for one event, normalized.
///
/// Combinata takes the best of its recorded (or overall) class and the
/// couple's latino and standard classes. Any other key uses the recorded
/// class; events with no key, or keys the couple has no record for, fall
/// back to the overall class.
pub fn effective_class(couple: &Couple, event_name: &str) -> String {
    let info = &couple.discipline_info;
    let recorded = |key: DisciplineKey| info.get(&key).map(String::as_str).filter(|c| !c.is_empty());

    match event_class_key(event_name) {
        Some(DisciplineKey::Combinata) => {
            let base = recorded(DisciplineKey::Combinata).unwrap_or(couple.class.as_str());
            let with_latino = best_class(Some(base), recorded(DisciplineKey::Latino));
            best_class(Some(with_latino.as_str()), recorded(DisciplineKey::Standard))
        }
        Some(key) => normalize_class(recorded(key).unwrap_or(couple.class.as_str())),
        None => normalize_class(&couple.class),
    }
}

/// Display priority: Standard, then Latin, then Combinata, then the rest.
pub fn event_priority(event_name: &str) -> u8 {
    let lower = event_name.trim().to_lowercase();
    if lower.starts_with("danze standard") || lower.starts_with("standard") {
        1
    } else if lower.starts_with("danze latino")
        || lower.starts_with("latini")
        || lower.starts_with("latino")
    {
        2
    } else if lower.starts_with("combinata") {
        3
    } else {
        4
    }
}

fn compare_events(a: &EventType, b: &EventType) -> Ordering {
    event_priority(&a.event_name)
        .cmp(&event_priority(&b.event_name))
        .then_with(|| a.event_name.cmp(&b.event_name))
}

/// Sort events into display order; ties break on the event name.
pub fn sort_event_types(events: &mut [EventType]) {
    events.sort_by(compare_events);
}

/// Borrowing variant of [`sort_event_types`].
pub fn sort_event_refs(events: &mut [&EventType]) {
    events.sort_by(|a, b| compare_events(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn couple(class: &str, info: &[(DisciplineKey, &str)]) -> Couple {
        Couple {
            athlete1_code: "M1".to_string(),
            athlete2_code: "F1".to_string(),
            category: "Adult".to_string(),
            class: class.to_string(),
            disciplines: vec![Discipline::Standard, Discipline::Latino],
            discipline_info: info.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    fn event(name: &str) -> EventType {
        EventType {
            id: name.to_string(),
            competition_id: "c1".to_string(),
            event_name: name.to_string(),
            allowed_classes: Vec::new(),
            min_age: None,
            max_age: None,
        }
    }

    #[test]
    fn discipline_from_prefix() {
        assert_eq!(
            event_discipline("Danze Standard - Youth (16/18)"),
            Some(Discipline::Standard)
        );
        assert_eq!(
            event_discipline("danze latino americane - Adult (19/34)"),
            Some(Discipline::Latino)
        );
        assert_eq!(
            event_discipline("Combinata - Combinata 8 Balli"),
            Some(Discipline::Combinata)
        );
        assert_eq!(event_discipline("Latini - Over 35"), Some(Discipline::Latino));
        assert_eq!(event_discipline("Standard - Over 45"), Some(Discipline::Standard));
        assert_eq!(event_discipline("Gran Galà"), None);
        // The keyword alone is not a prefix.
        assert_eq!(event_discipline("Trofeo Standard"), None);
    }

    #[test]
    fn class_key_from_keywords() {
        assert_eq!(
            event_class_key("Danze Latino Americane - Youth"),
            Some(DisciplineKey::Latino)
        );
        assert_eq!(
            event_class_key("Danze Standard - Youth"),
            Some(DisciplineKey::Standard)
        );
        assert_eq!(
            event_class_key("Combinata - Combinata 10 Balli"),
            Some(DisciplineKey::Combinata)
        );
        assert_eq!(
            event_class_key("South American Showdance Open"),
            Some(DisciplineKey::ShowDanceSa)
        );
        assert_eq!(
            event_class_key("Classic Showdance Open"),
            Some(DisciplineKey::ShowDanceClassic)
        );
        assert_eq!(event_class_key("Show Dance"), Some(DisciplineKey::ShowDance));
        assert_eq!(event_class_key("Gran Galà"), None);
    }

    #[test]
    fn effective_class_uses_discipline_record() {
        let c = couple("A2", &[(DisciplineKey::Latino, "A2"), (DisciplineKey::Standard, "b1")]);
        assert_eq!(effective_class(&c, "Danze Standard - Youth"), "B1");
        assert_eq!(effective_class(&c, "Danze Latino Americane - Youth"), "A2");
    }

    #[test]
    fn effective_class_falls_back_to_overall() {
        let c = couple("c", &[(DisciplineKey::Latino, "B2")]);
        assert_eq!(effective_class(&c, "Danze Standard - Youth"), "C");
        assert_eq!(effective_class(&c, "Gran Galà"), "C");
    }

    #[test]
    fn effective_combinata_is_best_of_parts() {
        let c = couple(
            "D",
            &[
                (DisciplineKey::Combinata, "C"),
                (DisciplineKey::Latino, "B3"),
                (DisciplineKey::Standard, "A1"),
            ],
        );
        assert_eq!(effective_class(&c, "Combinata - Combinata 10 Balli"), "A1");

        let no_record = couple("B2", &[]);
        assert_eq!(effective_class(&no_record, "Combinata - Combinata 8 Balli"), "B2");
    }

    #[test]
    fn events_sort_by_discipline_then_name() {
        let mut events = vec![
            event("Gran Galà"),
            event("Combinata - Combinata 8 Balli"),
            event("Danze Latino Americane - Youth (16/18)"),
            event("Danze Standard - Youth (16/18)"),
            event("Danze Standard - Adult (19/34)"),
            event("Latini - Over 35"),
        ];
        sort_event_types(&mut events);
        let names: Vec<&str> = events.iter().map(|e| e.event_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Danze Standard - Adult (19/34)",
                "Danze Standard - Youth (16/18)",
                "Danze Latino Americane - Youth (16/18)",
                "Latini - Over 35",
                "Combinata - Combinata 8 Balli",
                "Gran Galà",
            ]
        );
    }
}
