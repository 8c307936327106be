use crate::cli::RosterArgs;
use crate::support::{Context, load_roster_or_exit, print_json};
use ballo_kernel::Discipline;
use ballo_roster::{Couple, pair_couples, write_records_to_path};
use serde_json::json;
use std::path::PathBuf;

pub fn run(ctx: &Context, roster_args: RosterArgs, out: Option<String>, json_output: bool) {
    // Always re-pair from partner codes, ignoring any couples file.
    let args = RosterArgs {
        couples: None,
        ..roster_args
    };
    let mut config = ctx.config.clone();
    config.roster.couples = None;
    let roster = load_roster_or_exit(&args, &config);

    let athletes: Vec<_> = roster.athletes().cloned().collect();
    let couples: Vec<Couple> = pair_couples(&athletes);

    if let Some(out) = &out {
        let path = PathBuf::from(out);
        write_records_to_path(&path, &couples).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {e}", path.display());
            std::process::exit(1);
        });
    }

    if json_output {
        print_json(&json!({
            "action": "pair",
            "athleteCount": athletes.len(),
            "coupleCount": couples.len(),
            "outPath": out,
            "couples": couples,
        }));
        return;
    }

    println!("ballo pair");
    println!("  athletes: {}", athletes.len());
    println!("  couples: {}", couples.len());
    for couple in &couples {
        println!(
            "  - {} [{}] class {}{}",
            couple.pair_key(),
            couple.category,
            couple.class,
            discipline_classes(couple)
        );
    }
    if let Some(out) = &out {
        println!("  written: {out}");
    }
}

/// `" (standard A, latino B1)"` for the disciplines the couple dances.
fn discipline_classes(couple: &Couple) -> String {
    let parts: Vec<String> = Discipline::ALL
        .into_iter()
        .filter(|discipline| couple.dances(*discipline))
        .map(|discipline| format!("{discipline} {}", couple.class_for(discipline.key())))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}
