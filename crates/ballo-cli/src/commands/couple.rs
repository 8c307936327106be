use crate::commands::category::print_verdict;
use crate::support::{Context, print_json};
use ballo_kernel::{CoupleCategoryCheck, validate_couple_category};

pub fn run(
    ctx: &Context,
    stored: String,
    birth1: Option<String>,
    birth2: Option<String>,
    json_output: bool,
) {
    let verdict = validate_couple_category(&CoupleCategoryCheck {
        stored_category: &stored,
        athlete1_birth_date: birth1.as_deref(),
        athlete2_birth_date: birth2.as_deref(),
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
    println!("ballo couple {stored}");
    print_verdict(&verdict);
}
