//! Federation catalogue of event presets.
//!
//! Organizers configure a competition by switching presets on per
//! discipline group. The stored event name is `"<Group> - <Preset>"`, which
//! is what [`crate::event::event_discipline`] later reads back.

use ballo_kernel::normalize_class;
use ballo_roster::EventType;
use serde::Serialize;

/// Classes that make an event "syllabus" (no open-level class allowed).
pub const SYLLABUS_CLASSES: [&str; 6] = ["B", "B1", "B2", "B3", "C", "D"];

/// One configurable event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventPreset {
    pub name: &'static str,
    pub classes: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
}

impl EventPreset {
    /// Whether every allowed class is a syllabus class.
    pub fn is_syllabus(&self) -> bool {
        self.classes
            .iter()
            .all(|class| SYLLABUS_CLASSES.contains(&normalize_class(class).as_str()))
    }
}

const fn preset(
    name: &'static str,
    classes: &'static [&'static str],
    min_age: Option<i32>,
    max_age: Option<i32>,
) -> EventPreset {
    EventPreset {
        name,
        classes,
        min_age,
        max_age,
    }
}

const SYLLABUS_JUVENILE: &[&str] = &["D", "C", "B1", "B2", "B3"];
const TO_A: &[&str] = &["D", "C", "B1", "B2", "B3", "A"];
const TO_AS: &[&str] = &["D", "C", "B1", "B2", "B3", "A", "AS"];
const TO_AS_SPLIT_A: &[&str] = &["D", "C", "B1", "B2", "B3", "A1", "A2", "AS"];
const ADULT: &[&str] = &["D", "C", "B1", "B2", "B3", "A1", "A2", "AS", "MASTER"];
const TO_MASTER: &[&str] = &["D", "C", "B1", "B2", "B3", "A", "AS", "MASTER"];

/// Presets offered for Standard and for Latin.
pub const STANDARD_LATIN_PRESETS: [EventPreset; 19] = [
    preset("Juvenile 1 (6/9)", SYLLABUS_JUVENILE, Some(6), Some(9)),
    preset("Juvenile 2 (10/11)", TO_A, Some(10), Some(11)),
    preset("Junior 1 (12/13)", TO_A, Some(12), Some(13)),
    preset("Junior 2 (14/15)", TO_AS, Some(14), Some(15)),
    preset("Youth (16/18)", TO_AS, Some(16), Some(18)),
    preset("Under 16", TO_AS_SPLIT_A, None, Some(15)),
    preset("Under 21", TO_AS_SPLIT_A, Some(16), Some(20)),
    preset("Adult (19/34)", ADULT, Some(19), Some(34)),
    preset("Senior 1 (35/44)", TO_MASTER, Some(35), Some(44)),
    preset("Senior 2 (45/54)", TO_MASTER, Some(45), Some(54)),
    preset("Senior 3 (55/64)", TO_AS, Some(55), Some(64)),
    preset("Senior 4 (65/74)", TO_MASTER, Some(65), Some(74)),
    preset("Senior 5 (75+)", TO_AS, Some(75), None),
    preset("Over 35", TO_MASTER, Some(35), None),
    preset("Over 45", TO_MASTER, Some(45), None),
    preset("Over 55", TO_AS, Some(55), None),
    preset("Over 65", TO_MASTER, Some(65), None),
    preset("Open Classe A", &["A", "A1", "A2"], Some(16), None),
    preset("Open Classe B", &["B1", "B2", "B3"], None, None),
];

/// Presets offered for Combinata.
pub const COMBINATA_PRESETS: [EventPreset; 4] = [
    preset(
        "Combinata 10 Balli",
        &["MASTER", "AS", "A", "A1", "A2", "B", "B1", "B2", "B3"],
        None,
        None,
    ),
    preset("Combinata 8 Balli", &["C", "D"], None, None),
    preset("Classic Show Dance", &["MASTER", "AS", "A"], None, None),
    preset("South America Showdance", &["MASTER", "AS", "A"], None, None),
];

/// A discipline group as shown to organizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisciplineGroup {
    #[serde(rename = "Danze Standard")]
    Standard,
    #[serde(rename = "Danze Latino Americane")]
    Latin,
    #[serde(rename = "Combinata")]
    Combinata,
}

impl DisciplineGroup {
    pub const ALL: [DisciplineGroup; 3] = [
        DisciplineGroup::Standard,
        DisciplineGroup::Latin,
        DisciplineGroup::Combinata,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Danze Standard",
            Self::Latin => "Danze Latino Americane",
            Self::Combinata => "Combinata",
        }
    }

    pub fn presets(self) -> &'static [EventPreset] {
        match self {
            Self::Standard | Self::Latin => &STANDARD_LATIN_PRESETS,
            Self::Combinata => &COMBINATA_PRESETS,
        }
    }

    /// Presets whose classes are all syllabus classes.
    pub fn syllabus_presets(self) -> impl Iterator<Item = &'static EventPreset> {
        self.presets().iter().filter(|preset| preset.is_syllabus())
    }

    /// Stored event name for one preset of this group.
    pub fn event_name(self, preset: &EventPreset) -> String {
        format!("{} - {}", self.label(), preset.name)
    }
}

impl std::fmt::Display for DisciplineGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DisciplineGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|group| group.label().to_lowercase() == lower)
            .or(match lower.as_str() {
                "standard" => Some(Self::Standard),
                "latino" | "latin" | "latini" => Some(Self::Latin),
                _ => None,
            })
            .ok_or_else(|| format!("unknown discipline group: {s}"))
    }
}

/// Look up the preset behind a stored `"<Group> - <Preset>"` event name.
pub fn find_preset(event_name: &str) -> Option<(DisciplineGroup, &'static EventPreset)> {
    let (group, preset_name) = event_name.split_once(" - ")?;
    let group: DisciplineGroup = group.parse().ok()?;
    group
        .presets()
        .iter()
        .find(|preset| preset.name == preset_name.trim())
        .map(|preset| (group, preset))
}

/// Which presets of a group to switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetSelection {
    All,
    Syllabus,
}

/// Event-type records for a competition, one per selected preset.
///
/// Ids are `"<competition id>:<event name>"`, so regenerating the same
/// selection yields the same records.
pub fn generate_event_types(
    competition_id: &str,
    group: DisciplineGroup,
    selection: PresetSelection,
) -> Vec<EventType> {
    group
        .presets()
        .iter()
        .filter(|preset| selection == PresetSelection::All || preset.is_syllabus())
        .map(|preset| {
            let event_name = group.event_name(preset);
            EventType {
                id: format!("{competition_id}:{event_name}"),
                competition_id: competition_id.to_string(),
                event_name,
                allowed_classes: preset.classes.iter().map(|c| c.to_string()).collect(),
                min_age: preset.min_age,
                max_age: preset.max_age,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::event_discipline;
    use ballo_kernel::Discipline;

    #[test]
    fn syllabus_presets_per_group() {
        let standard: Vec<&str> = DisciplineGroup::Standard
            .syllabus_presets()
            .map(|p| p.name)
            .collect();
        assert_eq!(standard, vec!["Juvenile 1 (6/9)", "Open Classe B"]);

        let combinata: Vec<&str> = DisciplineGroup::Combinata
            .syllabus_presets()
            .map(|p| p.name)
            .collect();
        assert_eq!(combinata, vec!["Combinata 8 Balli"]);
    }

    #[test]
    fn group_names_parse() {
        assert_eq!(
            "danze latino americane".parse::<DisciplineGroup>().unwrap(),
            DisciplineGroup::Latin
        );
        assert_eq!(
            "Standard".parse::<DisciplineGroup>().unwrap(),
            DisciplineGroup::Standard
        );
        assert!("Show".parse::<DisciplineGroup>().is_err());
    }

    #[test]
    fn stored_names_round_trip_to_presets() {
        let (group, preset) = find_preset("Danze Standard - Youth (16/18)").unwrap();
        assert_eq!(group, DisciplineGroup::Standard);
        assert_eq!(preset.min_age, Some(16));
        assert!(find_preset("Combinata - Youth (16/18)").is_none());
        assert!(find_preset("Gran Galà").is_none());
    }

    #[test]
    fn generated_events_carry_group_prefix() {
        let events = generate_event_types("c1", DisciplineGroup::Latin, PresetSelection::All);
        assert_eq!(events.len(), STANDARD_LATIN_PRESETS.len());
        assert!(
            events
                .iter()
                .all(|e| event_discipline(&e.event_name) == Some(Discipline::Latino))
        );
        assert_eq!(events[0].id, "c1:Danze Latino Americane - Juvenile 1 (6/9)");

        let combinata =
            generate_event_types("c1", DisciplineGroup::Combinata, PresetSelection::Syllabus);
        insta::assert_json_snapshot!(combinata, @r#"
        [
          {
            "id": "c1:Combinata - Combinata 8 Balli",
            "competition_id": "c1",
            "event_name": "Combinata - Combinata 8 Balli",
            "allowed_classes": [
              "C",
              "D"
            ]
          }
        ]
        "#);
    }
}
