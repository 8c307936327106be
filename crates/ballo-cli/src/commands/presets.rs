use crate::cli::GroupArg;
use crate::support::{print_json, yes_no};
use ballo_enroll::{DisciplineGroup, EventPreset, PresetSelection, generate_event_types};
use ballo_roster::{EventType, write_records_to_path};
use serde_json::json;
use std::path::PathBuf;

fn map_group(group: GroupArg) -> DisciplineGroup {
    match group {
        GroupArg::Standard => DisciplineGroup::Standard,
        GroupArg::Latin => DisciplineGroup::Latin,
        GroupArg::Combinata => DisciplineGroup::Combinata,
    }
}

pub fn run(
    group: Option<GroupArg>,
    syllabus: bool,
    competition: Option<String>,
    out: Option<String>,
    json_output: bool,
) {
    let groups: Vec<DisciplineGroup> = match group {
        Some(group) => vec![map_group(group)],
        None => DisciplineGroup::ALL.to_vec(),
    };
    let selection = if syllabus {
        PresetSelection::Syllabus
    } else {
        PresetSelection::All
    };

    match competition {
        Some(competition_id) => generate(&competition_id, &groups, selection, out, json_output),
        None => list(&groups, selection, json_output),
    }
}

fn selected(group: DisciplineGroup, selection: PresetSelection) -> Vec<&'static EventPreset> {
    match selection {
        PresetSelection::All => group.presets().iter().collect(),
        PresetSelection::Syllabus => group.syllabus_presets().collect(),
    }
}

fn list(groups: &[DisciplineGroup], selection: PresetSelection, json_output: bool) {
    if json_output {
        let payload: Vec<_> = groups
            .iter()
            .map(|group| {
                json!({
                    "group": group,
                    "presets": selected(*group, selection),
                })
            })
            .collect();
        print_json(&payload);
        return;
    }

    println!("ballo presets");
    for group in groups {
        println!("  {group}:");
        for preset in selected(*group, selection) {
            println!(
                "    - {} [{}] syllabus: {}",
                preset.name,
                preset.classes.join(", "),
                yes_no(preset.is_syllabus())
            );
        }
    }
}

fn generate(
    competition_id: &str,
    groups: &[DisciplineGroup],
    selection: PresetSelection,
    out: Option<String>,
    json_output: bool,
) {
    let events: Vec<EventType> = groups
        .iter()
        .flat_map(|group| generate_event_types(competition_id, *group, selection))
        .collect();

    if let Some(out) = &out {
        let path = PathBuf::from(out);
        write_records_to_path(&path, &events).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {e}", path.display());
            std::process::exit(1);
        });
    }

    if json_output {
        print_json(&json!({
            "action": "presets.generate",
            "competition": competition_id,
            "eventCount": events.len(),
            "outPath": out,
            "events": events,
        }));
        return;
    }

    println!("ballo presets {competition_id}");
    println!("  events: {}", events.len());
    for event in &events {
        println!("  - {}", event.event_name);
    }
    if let Some(out) = &out {
        println!("  written: {out}");
    }
}
