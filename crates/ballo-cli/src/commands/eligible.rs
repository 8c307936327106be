use crate::cli::RosterArgs;
use crate::support::{Context, load_roster_or_exit, print_json, yes_no};
use ballo_enroll::{check_entry, evaluate_event};
use ballo_roster::{Couple, Roster, pair_key};
use serde_json::json;

pub fn run(
    ctx: &Context,
    competition_id: String,
    couple_ref: String,
    roster_args: RosterArgs,
    json_output: bool,
) {
    let roster = load_roster_or_exit(&roster_args, &ctx.config);

    let competition = roster
        .require_competition(&competition_id)
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
    let Some(couple) = find_couple(&roster, &couple_ref) else {
        eprintln!("error: couple not found: {couple_ref}");
        std::process::exit(1);
    };

    let check = check_entry(competition, roster.events(), couple, ctx.on);

    if json_output {
        let decisions: Vec<_> = roster
            .events_for(&competition.id)
            .into_iter()
            .map(|event| {
                json!({
                    "eventId": event.id,
                    "eventName": event.event_name,
                    "evaluation": evaluate_event(event, couple),
                })
            })
            .collect();
        let events: Vec<&str> = check
            .events
            .iter()
            .map(|event| event.event_name.as_str())
            .collect();
        print_json(&json!({
            "competition": competition.id,
            "pairKey": couple.pair_key(),
            "on": ctx.on.to_string(),
            "open": check.is_open(),
            "blocked": check.blocked,
            "reason": check.blocked.map(|block| block.to_string()),
            "lateFee": check.is_open() && competition.is_late_entry(ctx.on),
            "events": events,
            "decisions": decisions,
        }));
        return;
    }

    println!("ballo eligible {} {}", competition.id, couple.pair_key());
    println!("  competition: {} ({})", competition.name, competition.date);
    println!("  on: {}", ctx.on);
    println!("  open: {}", yes_no(check.is_open()));
    if let Some(block) = check.blocked {
        println!("  reason: {block}");
    } else if competition.is_late_entry(ctx.on) {
        println!("  late fee: yes");
    }
    for event in &check.events {
        println!("  - {}", event.event_name);
    }
}

/// A couple by pair key, or the couple either partner code belongs to.
fn find_couple<'a>(roster: &'a Roster, couple_ref: &str) -> Option<&'a Couple> {
    let key = couple_ref.trim();
    roster.couple(key).or_else(|| {
        key.split_once('-')
            .and_then(|(a, b)| roster.couple(&pair_key(a, b)))
            .or_else(|| roster.couple_of(key))
    })
}
