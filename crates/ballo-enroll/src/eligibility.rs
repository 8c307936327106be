//! Strict competition entry gating.
//!
//! A competition with no configured events is closed. Otherwise a couple
//! may enter when at least one event accepts both its discipline and its
//! effective class for that event. Event age bounds are carried on the
//! records but not checked here; the class lists already encode the
//! intended brackets.

use ballo_kernel::normalize_class;
use ballo_roster::{Competition, Couple, EventType};
use chrono::NaiveDate;
use serde::Serialize;

use crate::event::{effective_class, event_discipline, sort_event_refs};

/// Outcome of checking one event for one couple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum EventDecision {
    Allowed { class: String },
    DisciplineNotDanced,
    ClassNotAllowed { class: String },
}

impl EventDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Check one event for one couple.
pub fn evaluate_event(event: &EventType, couple: &Couple) -> EventDecision {
    if let Some(discipline) = event_discipline(&event.event_name)
        && !couple.dances(discipline)
    {
        return EventDecision::DisciplineNotDanced;
    }

    let class = effective_class(couple, &event.event_name);
    if event
        .allowed_classes
        .iter()
        .any(|allowed| normalize_class(allowed) == class)
    {
        EventDecision::Allowed { class }
    } else {
        EventDecision::ClassNotAllowed { class }
    }
}

/// Whether the couple may enter the competition at all.
pub fn is_competition_allowed(competition_id: &str, events: &[EventType], couple: &Couple) -> bool {
    events
        .iter()
        .filter(|event| event.competition_id == competition_id)
        .any(|event| evaluate_event(event, couple).is_allowed())
}

/// Events of the competition the couple may enter, in display order.
pub fn allowed_events<'a>(
    competition_id: &str,
    events: &'a [EventType],
    couple: &Couple,
) -> Vec<&'a EventType> {
    let mut allowed: Vec<&EventType> = events
        .iter()
        .filter(|event| event.competition_id == competition_id)
        .filter(|event| evaluate_event(event, couple).is_allowed())
        .collect();
    sort_event_refs(&mut allowed);
    allowed
}

/// Why a couple cannot enter a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryBlock {
    NoEventsConfigured,
    NoEligibleEvent,
    DeadlinePassed,
}

impl std::fmt::Display for EntryBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEventsConfigured => write!(f, "Nessuna gara configurata"),
            Self::NoEligibleEvent => write!(f, "Nessuna gara compatibile"),
            Self::DeadlinePassed => write!(f, "Iscrizioni chiuse"),
        }
    }
}

/// Entry status of one couple for one competition on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryCheck<'a> {
    pub competition_id: &'a str,
    pub events: Vec<&'a EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<EntryBlock>,
}

impl EntryCheck<'_> {
    pub fn is_open(&self) -> bool {
        self.blocked.is_none()
    }
}

/// Full entry check: event gating plus the registration deadline.
///
/// Gating runs first, so a closed competition with no matching event
/// reports the event problem.
pub fn check_entry<'a>(
    competition: &'a Competition,
    events: &'a [EventType],
    couple: &Couple,
    on: NaiveDate,
) -> EntryCheck<'a> {
    let configured = events
        .iter()
        .any(|event| event.competition_id == competition.id);
    let allowed = allowed_events(&competition.id, events, couple);

    let blocked = if !configured {
        Some(EntryBlock::NoEventsConfigured)
    } else if allowed.is_empty() {
        Some(EntryBlock::NoEligibleEvent)
    } else if competition.is_deadline_passed(on) {
        Some(EntryBlock::DeadlinePassed)
    } else {
        None
    };

    if let Some(block) = blocked {
        tracing::debug!(
            competition = %competition.id,
            pair = %couple.pair_key(),
            reason = ?block,
            "entry blocked"
        );
    }

    EntryCheck {
        competition_id: &competition.id,
        events: allowed,
        blocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballo_kernel::{Discipline, DisciplineKey};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn couple(disciplines: Vec<Discipline>, class: &str, info: &[(DisciplineKey, &str)]) -> Couple {
        Couple {
            athlete1_code: "M1".to_string(),
            athlete2_code: "F1".to_string(),
            category: "Adult".to_string(),
            class: class.to_string(),
            disciplines,
            discipline_info: info.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    fn event(competition_id: &str, name: &str, classes: &[&str]) -> EventType {
        EventType {
            id: format!("{competition_id}:{name}"),
            competition_id: competition_id.to_string(),
            event_name: name.to_string(),
            allowed_classes: classes.iter().map(|c| c.to_string()).collect(),
            min_age: None,
            max_age: None,
        }
    }

    fn latin_b1() -> Couple {
        couple(vec![Discipline::Latino], "B1", &[(DisciplineKey::Latino, "B1")])
    }

    #[test]
    fn no_configured_events_means_closed() {
        let events = vec![event("other", "Danze Latino Americane - Adult", &["B1"])];
        assert!(!is_competition_allowed("c1", &events, &latin_b1()));
        assert!(!is_competition_allowed("c1", &[], &latin_b1()));
    }

    #[test]
    fn discipline_must_be_danced() {
        let std_event = event("c1", "Danze Standard - Adult (19/34)", &["B1"]);
        assert_eq!(
            evaluate_event(&std_event, &latin_b1()),
            EventDecision::DisciplineNotDanced
        );
        assert!(!is_competition_allowed("c1", &[std_event], &latin_b1()));
    }

    #[test]
    fn class_must_be_listed() {
        let latin = event("c1", "Danze Latino Americane - Adult (19/34)", &["A", "AS"]);
        assert_eq!(
            evaluate_event(&latin, &latin_b1()),
            EventDecision::ClassNotAllowed {
                class: "B1".to_string()
            }
        );
        let open = event("c1", "Danze Latino Americane - Open Classe B", &["b1", "B2"]);
        assert_eq!(
            evaluate_event(&open, &latin_b1()),
            EventDecision::Allowed {
                class: "B1".to_string()
            }
        );
        assert!(is_competition_allowed("c1", &[latin, open], &latin_b1()));
    }

    #[test]
    fn event_age_bounds_are_not_checked() {
        // An Adult couple in a Senior 1 (35/44) heat whose class list matches.
        let senior = EventType {
            min_age: Some(35),
            max_age: Some(44),
            ..event("c1", "Danze Latino Americane - Senior 1 (35/44)", &["B1"])
        };
        assert_eq!(
            evaluate_event(&senior, &latin_b1()),
            EventDecision::Allowed {
                class: "B1".to_string()
            }
        );
        assert!(is_competition_allowed("c1", &[senior], &latin_b1()));
    }

    #[test]
    fn unprefixed_events_accept_any_discipline() {
        let gala = event("c1", "Gran Galà", &["B1"]);
        assert!(evaluate_event(&gala, &latin_b1()).is_allowed());
    }

    #[test]
    fn per_discipline_class_decides() {
        // Latin A, Standard C: allowed in latin A events only.
        let c = couple(
            vec![Discipline::Latino, Discipline::Standard],
            "A",
            &[(DisciplineKey::Latino, "A"), (DisciplineKey::Standard, "C")],
        );
        let events = vec![
            event("c1", "Danze Standard - Adult (19/34)", &["A", "AS"]),
            event("c1", "Danze Latino Americane - Adult (19/34)", &["A", "AS"]),
            event("c1", "Danze Standard - Open Classe B", &["B1", "B2", "B3"]),
        ];
        let allowed: Vec<&str> = allowed_events("c1", &events, &c)
            .iter()
            .map(|e| e.event_name.as_str())
            .collect();
        assert_eq!(allowed, vec!["Danze Latino Americane - Adult (19/34)"]);
    }

    #[test]
    fn allowed_events_are_in_display_order() {
        let c = couple(
            vec![Discipline::Latino, Discipline::Standard, Discipline::Combinata],
            "B2",
            &[],
        );
        let events = vec![
            event("c1", "Combinata - Combinata 10 Balli", &["B2"]),
            event("c1", "Danze Latino Americane - Youth (16/18)", &["B2"]),
            event("c1", "Danze Standard - Youth (16/18)", &["B2"]),
        ];
        let allowed: Vec<&str> = allowed_events("c1", &events, &c)
            .iter()
            .map(|e| e.event_name.as_str())
            .collect();
        assert_eq!(
            allowed,
            vec![
                "Danze Standard - Youth (16/18)",
                "Danze Latino Americane - Youth (16/18)",
                "Combinata - Combinata 10 Balli",
            ]
        );
    }

    #[test]
    fn entry_check_reports_first_block() {
        let mut competition = Competition::new("c1", "Trofeo", date(2025, 5, 10));
        competition.registration_deadline = Some(date(2025, 5, 1));
        let events = vec![event("c1", "Danze Latino Americane - Adult", &["B1"])];
        let couple = latin_b1();

        let open = check_entry(&competition, &events, &couple, date(2025, 4, 30));
        assert!(open.is_open());
        assert_eq!(open.events.len(), 1);

        let late = check_entry(&competition, &events, &couple, date(2025, 5, 2));
        assert_eq!(late.blocked, Some(EntryBlock::DeadlinePassed));

        let none = check_entry(&competition, &[], &couple, date(2025, 4, 30));
        assert_eq!(none.blocked, Some(EntryBlock::NoEventsConfigured));
        assert_eq!(none.blocked.map(|b| b.to_string()).as_deref(), Some("Nessuna gara configurata"));
    }

    #[test]
    fn decision_wire_shape() {
        let decision = EventDecision::ClassNotAllowed {
            class: "C".to_string(),
        };
        insta::assert_json_snapshot!(decision, @r#"
        {
          "decision": "class_not_allowed",
          "class": "C"
        }
        "#);
    }
}
