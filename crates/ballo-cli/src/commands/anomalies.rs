use crate::cli::RosterArgs;
use crate::support::{Context, load_roster_or_exit, print_json, yes_no};
use ballo_roster::{FieldIssue, scan_anomalies};
use serde_json::json;

pub fn run(ctx: &Context, roster_args: RosterArgs, json_output: bool) {
    let roster = load_roster_or_exit(&roster_args, &ctx.config);
    let report = scan_anomalies(&roster, ctx.on);
    let record_issues: Vec<(&str, Vec<FieldIssue>)> = roster
        .athletes()
        .map(|athlete| (athlete.code.as_str(), athlete.validate()))
        .filter(|(_, issues)| !issues.is_empty())
        .collect();

    if json_output {
        let invalid: Vec<_> = record_issues
            .iter()
            .map(|(code, issues)| json!({ "code": code, "issues": issues }))
            .collect();
        print_json(&json!({
            "on": ctx.on.to_string(),
            "clean": report.is_clean(),
            "categoryCount": report.category_anomalies().count(),
            "certificateCount": report.certificate_anomalies().count(),
            "anomalies": report.anomalies,
            "orphans": report.orphans,
            "recordIssues": invalid,
        }));
        return;
    }

    println!("ballo anomalies");
    println!("  on: {}", ctx.on);
    println!("  clean: {}", yes_no(report.is_clean()));

    println!("  category:");
    for anomaly in report.category_anomalies() {
        println!(
            "    - {} ({} / {}) [{}]: {}",
            anomaly.pair_key,
            anomaly.athlete1,
            anomaly.athlete2,
            anomaly.stored_category,
            anomaly.category_issue.as_deref().unwrap_or_default()
        );
    }

    println!("  certificates:");
    for anomaly in report.certificate_anomalies() {
        for issue in &anomaly.certificate_issues {
            println!("    - {}: {issue}", anomaly.pair_key);
        }
    }

    println!("  without partner:");
    for athlete in &report.orphans {
        println!("    - {} {}", athlete.code, athlete.full_name());
    }

    if !record_issues.is_empty() {
        println!("  invalid records:");
        for (code, issues) in &record_issues {
            for issue in issues {
                println!("    - {code} {}: {}", issue.field, issue.message);
            }
        }
    }
}
