use crate::support::{Context, print_json, yes_no};
use ballo_kernel::{
    CategoryVerdict, SoloCategoryCheck, category_min_age, format_category_display,
    validate_category_match,
};

pub fn run(ctx: &Context, stored: String, birth: Option<String>, json_output: bool) {
    let verdict = validate_category_match(&SoloCategoryCheck {
        stored_category: &stored,
        birth_date: birth.as_deref(),
        on_date: ctx.on,
    })
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json_output {
        print_json(&verdict);
        return;
    }
    println!("ballo category {stored}");
    match category_min_age(&stored) {
        Some(age) => println!("  stored from age: {age}"),
        None => println!("  stored from age: unrecognized"),
    }
    print_verdict(&verdict);
}

/// Human rendering shared with `ballo couple`.
pub fn print_verdict(verdict: &CategoryVerdict) {
    println!("  ok: {}", yes_no(verdict.is_ok()));
    let expected: Vec<String> = verdict
        .expected()
        .iter()
        .map(|label| format_category_display(*label))
        .collect();
    println!("  expected: {}", expected.join(", "));
    if let Some(reason) = verdict.reason() {
        println!("  reason: {reason}");
    }
}
