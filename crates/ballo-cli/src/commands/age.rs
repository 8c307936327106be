use crate::support::{Context, print_json};
use ballo_kernel::{
    allowed_categories_for_age, format_category_display, parse_birth_date, sports_age_from_date,
};
use serde_json::json;

pub fn run(ctx: &Context, birth_date: String, json_output: bool) {
    let birth = parse_birth_date(&birth_date).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    let age = sports_age_from_date(birth, ctx.on);
    let allowed = allowed_categories_for_age(age, ctx.on);

    if json_output {
        print_json(&json!({
            "birthDate": birth.to_string(),
            "on": ctx.on.to_string(),
            "sportsAge": age,
            "allowed": allowed,
        }));
        return;
    }

    println!("ballo age {birth}");
    println!("  on: {}", ctx.on);
    println!("  sports age: {age}");
    for (index, label) in allowed.iter().enumerate() {
        let role = if index == 0 { "primary" } else { "grace" };
        println!("  {role}: {}", format_category_display(*label));
    }
}
